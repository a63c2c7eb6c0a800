use wasm_bindgen::prelude::*;

pub mod board;
pub mod game;
pub mod rules;
pub mod types;

use game::GameState;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Game handle exported to the embedding page. The caller owns the handle
/// and with it the authoritative state; nothing in the crate is global.
#[wasm_bindgen]
pub struct Game {
    state: GameState,
}

#[wasm_bindgen]
impl Game {
    /// Starts a new game: opening position, black to move.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            state: GameState::new(),
        }
    }

    /// Discards the current game and starts over.
    pub fn restart(&mut self) {
        self.state = GameState::new();
    }

    /// Attempts a placement at `pos` (0..=63) for the side to move. A
    /// rejected attempt leaves the position untouched; `state()` carries
    /// the outcome message either way.
    pub fn attempt_move(&mut self, pos: u8) {
        self.state = self.state.attempt_move(pos as usize);
    }

    /// Serialized `GameSnapshot` of the current position.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.state.snapshot())?)
    }

    /// Legal placements for the side to move, ascending.
    pub fn legal_moves(&self) -> Vec<u8> {
        self.state
            .legal_moves()
            .into_iter()
            .map(|pos| pos as u8)
            .collect()
    }

    /// Current piece tally as a serialized `Score`.
    pub fn score(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.state.score())?)
    }

    /// Squares that would flip if the side to move played `pos`, without
    /// committing anything. Drives the hover preview in the UI.
    pub fn preview_flips(&self, pos: u8) -> Vec<u8> {
        rules::compute_flips(&self.state.board, pos as usize, self.state.current)
            .into_iter()
            .map(|square| square as u8)
            .collect()
    }

    /// Serialized `GameResult`, or JS `undefined` while the game is in
    /// progress.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.state.result())?)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn handle_plays_a_move_and_switches_sides() {
        let mut game = Game::new();
        assert_eq!(game.legal_moves(), vec![19, 26, 37, 44]);

        game.attempt_move(19);

        assert_eq!(game.state.current, Player::White);
        assert_eq!(game.state.last_move, Some(19));
    }

    #[test]
    fn preview_does_not_commit_the_move() {
        let game = Game::new();

        assert_eq!(game.preview_flips(19), vec![27]);
        assert_eq!(game.state, GameState::new());
    }

    #[test]
    fn restart_returns_to_the_opening_position() {
        let mut game = Game::new();
        game.attempt_move(19);
        game.restart();

        assert_eq!(game.state, GameState::new());
    }
}
