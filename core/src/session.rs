use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::*;

/// Owner of the current board, shared by whatever drives the game.
///
/// Every call takes the lock once, so a reveal never observes a half-replaced
/// board and two racing reveals of the same mine report a single hit.
#[derive(Debug, Default)]
pub struct Session {
    board: Mutex<Option<Board>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game. On an invalid size the current board is kept.
    pub fn start(&self, size: i64) -> Result<GameConfig> {
        let config = GameConfig::new(size)?;
        self.start_with_seed(config, rand::random());
        Ok(config)
    }

    /// Same as [`Session::start`], taking the size as typed by the player.
    pub fn start_from_input(&self, input: &str) -> Result<GameConfig> {
        let config: GameConfig = input.parse()?;
        self.start_with_seed(config, rand::random());
        Ok(config)
    }

    pub fn start_with_seed(&self, config: GameConfig, seed: u64) {
        self.replace(Board::with_seed(config, seed));
    }

    /// Swaps in a prepared board, returning the previous one.
    pub fn replace(&self, board: Board) -> Option<Board> {
        self.lock().replace(board)
    }

    pub fn reveal(&self, index: CellIndex) -> Result<RevealOutcome> {
        self.lock()
            .as_mut()
            .ok_or(GameError::NoBoard)?
            .reveal(index)
    }

    pub fn reveal_at(&self, coords: Coord2) -> Result<RevealOutcome> {
        self.lock()
            .as_mut()
            .ok_or(GameError::NoBoard)?
            .reveal_at(coords)
    }

    /// Discards the current board, leaving the session waiting for a new size.
    pub fn restart(&self) -> Option<Board> {
        self.lock().take()
    }

    pub fn snapshot(&self) -> Option<Board> {
        self.lock().clone()
    }

    pub fn has_board(&self) -> bool {
        self.lock().is_some()
    }

    // Every mutation completes before the guard drops, so a poisoned board is still consistent.
    fn lock(&self) -> MutexGuard<'_, Option<Board>> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
