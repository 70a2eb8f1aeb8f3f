use goban_engine::{Engine, Stone};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGoban {
    inner: Engine,
}

#[wasm_bindgen]
impl WasmGoban {
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Self {
        Self {
            inner: Engine::new(size),
        }
    }

    // -- Game actions (delegate to Engine) --

    pub fn try_play(&mut self, row: i32, col: i32) -> bool {
        self.inner.place_stone(row, col)
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo_move()
    }

    pub fn redo(&mut self) -> bool {
        self.inner.redo_move()
    }

    pub fn new_game(&mut self) {
        self.inner.new_game();
    }

    pub fn is_legal(&self, row: i32, col: i32) -> bool {
        self.inner.is_legal(row, col)
    }

    // -- Engine accessors (WASM-friendly types) --

    /// Flat row-major cells: 1 = Black, -1 = White, 0 = Empty.
    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.inner.board().cells())
    }

    pub fn size(&self) -> u8 {
        self.inner.size()
    }

    pub fn current_turn_stone(&self) -> i8 {
        self.inner.turn().to_int()
    }

    pub fn captures_black(&self) -> u32 {
        self.inner.captures().get(Stone::Black)
    }

    pub fn captures_white(&self) -> u32 {
        self.inner.captures().get(Stone::White)
    }

    pub fn has_ko(&self) -> bool {
        self.inner.ko().is_some()
    }

    pub fn ko_row(&self) -> i32 {
        self.inner.ko().map_or(-1, |ko| ko.pos.0)
    }

    pub fn ko_col(&self) -> i32 {
        self.inner.ko().map_or(-1, |ko| ko.pos.1)
    }

    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.inner.game_state()).unwrap_or_else(|_| "{}".to_string())
    }
}
