use crate::board::Board;
use crate::rules::{apply_move, list_legal_moves, opponent};
use crate::types::{GameResult, GameSnapshot, Player, Score};

/// Whether the game still accepts moves. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// One point in a game. States are immutable values: every accepted move
/// attempt produces a new state, so readers of an old state never observe
/// a half-applied transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current: Player,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub last_flipped: Vec<usize>,
    pub message: String,
}

impl GameState {
    /// Creates a fresh game: opening position, black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::Black,
            status: GameStatus::Playing,
            last_move: None,
            last_flipped: Vec::new(),
            message: String::new(),
        }
    }

    /// Returns the piece tally of the current board.
    pub fn score(&self) -> Score {
        self.board.count_pieces()
    }

    /// Returns every legal placement for the side to move, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        list_legal_moves(&self.board, self.current)
    }

    /// Attempts a placement at `pos` for the side to move.
    ///
    /// An illegal `pos` (occupied, out of range, or capturing nothing)
    /// rejects the attempt: the returned state differs from `self` only in
    /// `message`. An accepted move flips the captured discs and resolves
    /// the turn: the opponent moves next unless they have no reply, in
    /// which case the mover keeps the turn; when neither side can move the
    /// game is over. Calling this on a finished game returns the state
    /// unchanged.
    pub fn attempt_move(&self, pos: usize) -> GameState {
        if self.status == GameStatus::GameOver {
            return self.clone();
        }

        let legal = list_legal_moves(&self.board, self.current);
        if !legal.contains(&pos) {
            let mut rejected = self.clone();
            rejected.message = "illegal move: must flank an opponent disc".to_string();
            return rejected;
        }

        let (next_board, flipped) = apply_move(&self.board, pos, self.current);
        let next_player = opponent(self.current);

        let opp_moves = list_legal_moves(&next_board, next_player);
        if !opp_moves.is_empty() {
            return GameState {
                board: next_board,
                current: next_player,
                status: GameStatus::Playing,
                last_move: Some(pos),
                last_flipped: flipped,
                message: String::new(),
            };
        }

        // The opponent has no reply. Either the mover goes again, or
        // neither side can move and the game ends.
        let cur_moves = list_legal_moves(&next_board, self.current);
        if cur_moves.is_empty() {
            return GameState {
                board: next_board,
                current: next_player,
                status: GameStatus::GameOver,
                last_move: Some(pos),
                last_flipped: flipped,
                message: final_message(&next_board),
            };
        }

        GameState {
            board: next_board,
            current: self.current,
            status: GameStatus::Playing,
            last_move: Some(pos),
            last_flipped: flipped,
            message: "opponent has no legal move, turn skipped".to_string(),
        }
    }

    /// Final result; `None` while the game is still in progress.
    pub fn result(&self) -> Option<GameResult> {
        if self.status != GameStatus::GameOver {
            return None;
        }

        let score = self.score();
        let winner = if score.black > score.white {
            Player::Black.code()
        } else if score.white > score.black {
            Player::White.code()
        } else {
            0
        };

        Some(GameResult {
            winner,
            black_count: score.black,
            white_count: score.white,
        })
    }

    /// Serializable view handed across the WASM boundary.
    pub fn snapshot(&self) -> GameSnapshot {
        let score = self.score();
        GameSnapshot {
            board: self.board.to_array().to_vec(),
            current_player: self.current.code(),
            black_count: score.black,
            white_count: score.white,
            is_game_over: self.status == GameStatus::GameOver,
            last_move: self.last_move.map(|pos| pos as u8),
            flipped: self.last_flipped.iter().map(|&pos| pos as u8).collect(),
            message: self.message.clone(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn final_message(board: &Board) -> String {
    let score = board.count_pieces();
    let verdict = if score.black > score.white {
        "black wins"
    } else if score.white > score.black {
        "white wins"
    } else {
        "draw"
    };
    format!(
        "game over: black {} - white {}, {verdict}",
        score.black, score.white
    )
}
