use serde::Serialize;

/// A side in the game. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Wire encoding shared with the UI: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Wire encoding shared with the UI: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Piece tally. Sums to 64 for any valid board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
    pub empty: u8,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `Some(pos)` with the most recent placement (0..=63).
    /// - `None` before the first accepted move of a game.
    pub last_move: Option<u8>,
    /// Contract:
    /// - Positions flipped by the most recent accepted move (0..=63).
    /// - Empty before the first accepted move of a game.
    pub flipped: Vec<u8>,
    /// Human-readable outcome of the last attempt: empty after a normal
    /// move, otherwise a rejection, skipped-turn, or game-over notice.
    pub message: String,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 1=black, 2=white, 0=draw.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}
