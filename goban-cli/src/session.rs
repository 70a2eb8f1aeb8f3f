use std::io::{BufRead, Write};

use anyhow::Result;
use goban_engine::{Engine, Stone};
use tracing::{debug, info, warn};

use crate::command::Command;

/// Whether the control loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A single game driven by text commands.
pub struct Session {
    engine: Engine,
    json: bool,
}

impl Session {
    pub fn new(size: u8, json: bool) -> Self {
        Session {
            engine: Engine::new(size),
            json,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        self.render(out)?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    warn!("bad command {line:?}: {e}");
                    writeln!(out, "error: {e}")?;
                }
            }
        }
        info!(moves = self.engine().move_count(), "session ended");
        Ok(())
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        debug!(%command, "executing");
        match command {
            Command::Play { row, col } => match self.engine.try_place(row, col) {
                Ok(placement) => {
                    if !placement.captured.is_empty() {
                        writeln!(
                            out,
                            "{} captured {} stone(s)",
                            placement.stone,
                            placement.captured.len()
                        )?;
                    }
                    self.render(out)?;
                }
                Err(reason) => writeln!(out, "illegal move at ({row}, {col}): {reason}")?,
            },
            Command::Undo => {
                if self.engine.undo_move() {
                    self.render(out)?;
                } else {
                    writeln!(out, "nothing to undo")?;
                }
            }
            Command::Redo => {
                if self.engine.redo_move() {
                    self.render(out)?;
                } else {
                    writeln!(out, "nothing to redo")?;
                }
            }
            Command::New => {
                self.engine.new_game();
                self.render(out)?;
            }
            Command::Show => self.render(out)?,
            Command::State => self.write_state(out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn render(&self, out: &mut impl Write) -> Result<()> {
        if self.json {
            return self.write_state(out);
        }

        let size = usize::from(self.engine.size());
        let header: String = (0..size).map(|c| char::from(b'0' + (c % 10) as u8)).collect();
        writeln!(out, "   {header}")?;
        for (row, line) in self.engine.board().to_string().lines().enumerate() {
            writeln!(out, "{row:>2} {line}")?;
        }

        let captures = self.engine.captures();
        writeln!(
            out,
            "{} to play (captures: black {}, white {})",
            self.engine.turn(),
            captures.get(Stone::Black),
            captures.get(Stone::White)
        )?;
        if let Some(ko) = self.engine.ko() {
            writeln!(out, "ko at ({}, {})", ko.pos.0, ko.pos.1)?;
        }
        Ok(())
    }

    fn write_state(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer(&mut *out, &self.engine.game_state())?;
        writeln!(out)?;
        Ok(())
    }
}
