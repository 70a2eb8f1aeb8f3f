use std::fmt;

/// One line of input to the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play { row: i32, col: i32 },
    Undo,
    Redo,
    New,
    Show,
    State,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(verb) = words.next() else {
            return Err("empty command".to_string());
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "play" | "p" => {
                let row = coordinate(words.next(), "row")?;
                let col = coordinate(words.next(), "col")?;
                Command::Play { row, col }
            }
            "undo" | "u" => Command::Undo,
            "redo" | "r" => Command::Redo,
            "new" | "n" => Command::New,
            "show" | "s" => Command::Show,
            "state" => Command::State,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(format!("unknown command: {verb}")),
        };

        if let Some(extra) = words.next() {
            return Err(format!("unexpected argument: {extra}"));
        }
        Ok(command)
    }
}

fn coordinate(word: Option<&str>, name: &str) -> Result<i32, String> {
    let word = word.ok_or_else(|| format!("missing {name}"))?;
    word.parse()
        .map_err(|_| format!("invalid {name}: {word}"))
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Play { row, col } => write!(f, "play {row} {col}"),
            Command::Undo => write!(f, "undo"),
            Command::Redo => write!(f, "redo"),
            Command::New => write!(f, "new"),
            Command::Show => write!(f, "show"),
            Command::State => write!(f, "state"),
            Command::Quit => write!(f, "quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play() {
        assert_eq!("play 3 4".parse(), Ok(Command::Play { row: 3, col: 4 }));
        assert_eq!("p -1 0".parse(), Ok(Command::Play { row: -1, col: 0 }));
        assert_eq!("  PLAY 0  18 ".parse(), Ok(Command::Play { row: 0, col: 18 }));
    }

    #[test]
    fn parses_short_forms() {
        assert_eq!("u".parse(), Ok(Command::Undo));
        assert_eq!("r".parse(), Ok(Command::Redo));
        assert_eq!("n".parse(), Ok(Command::New));
        assert_eq!("s".parse(), Ok(Command::Show));
        assert_eq!("q".parse(), Ok(Command::Quit));
        assert_eq!("state".parse(), Ok(Command::State));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "play 3".parse::<Command>(),
            Err("missing col".to_string())
        );
        assert_eq!(
            "play x 3".parse::<Command>(),
            Err("invalid row: x".to_string())
        );
        assert_eq!(
            "undo now".parse::<Command>(),
            Err("unexpected argument: now".to_string())
        );
        assert_eq!(
            "jump".parse::<Command>(),
            Err("unknown command: jump".to_string())
        );
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let cmd = Command::Play { row: 2, col: 5 };
        assert_eq!(cmd.to_string().parse(), Ok(cmd));
        assert_eq!(Command::Undo.to_string(), "undo");
    }
}
