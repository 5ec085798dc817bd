use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Lost,
}

impl GameState {
    pub const fn is_lost(self) -> bool {
        matches!(self, Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One game: a fixed mine layout plus the cells opened so far.
///
/// There is no win state. A board without mines can be fully opened and still
/// reports [`GameState::InProgress`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    mine_layout: MineLayout,
    revealed_mask: Array2<bool>,
    revealed: Vec<CellIndex>,
    state: GameState,
    triggered_mine: Option<CellIndex>,
}

/// Unchecked shape of a saved [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    mine_layout: MineLayout,
    revealed_mask: Array2<bool>,
    revealed: Vec<CellIndex>,
    state: GameState,
    triggered_mine: Option<CellIndex>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    /// Replays the saved reveals on a fresh board and accepts the snapshot
    /// only if every saved field matches the replay.
    fn try_from(repr: BoardRepr) -> Result<Self> {
        let mut board = Board::new(repr.mine_layout);

        for &index in &repr.revealed {
            let outcome = board.reveal(index).map_err(|_| GameError::CorruptBoard)?;
            if !outcome.has_update() {
                // duplicate, or a reveal after the loss
                return Err(GameError::CorruptBoard);
            }
        }

        if board.revealed_mask != repr.revealed_mask
            || board.state != repr.state
            || board.triggered_mine != repr.triggered_mine
        {
            return Err(GameError::CorruptBoard);
        }
        Ok(board)
    }
}

impl Board {
    pub fn new(mine_layout: MineLayout) -> Self {
        let config = mine_layout.config();
        log::debug!(
            "New {0}x{0} board with {1} mines",
            config.size(),
            mine_layout.mine_count()
        );
        Self {
            mine_layout,
            revealed_mask: Array2::default(config.dim()),
            revealed: Vec::new(),
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(RandomMinefieldGenerator::new(seed).generate(config))
    }

    /// Validates `size` and builds a board with freshly seeded mines.
    #[cfg(feature = "std")]
    pub fn create(size: i64) -> Result<Self> {
        let config = GameConfig::new(size)?;
        Ok(Self::with_seed(config, rand::random()))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_lost(&self) -> bool {
        self.state.is_lost()
    }

    pub fn config(&self) -> GameConfig {
        self.mine_layout.config()
    }

    pub fn size(&self) -> Coord {
        self.mine_layout.size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_layout.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn mine_indices(&self) -> Vec<CellIndex> {
        self.mine_layout.mine_indices()
    }

    /// Revealed cells in the order they were opened.
    pub fn revealed(&self) -> &[CellIndex] {
        &self.revealed
    }

    pub fn triggered_mine(&self) -> Option<CellIndex> {
        self.triggered_mine
    }

    pub fn is_revealed(&self, index: CellIndex) -> bool {
        self.mine_layout
            .validate_index(index)
            .is_ok_and(|coords| self.revealed_mask[coords.to_nd_index()])
    }

    pub fn has_mine_at(&self, index: CellIndex) -> bool {
        self.mine_layout.contains_mine(index)
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<CellView> {
        let coords = self.mine_layout.validate_index(index)?;
        Ok(self.view_at(coords))
    }

    /// Every cell in row-major order with what a player may see of it.
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellIndex, CellView)> + '_ {
        (0..self.total_cells()).filter_map(|index| Some((index, self.cell_at(index).ok()?)))
    }

    pub fn reveal_at(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let index = self.config().cell_index(coords)?;
        self.reveal(index)
    }

    /// Opens one cell.
    ///
    /// Revealing an already open cell, or any cell once the game is lost, is a
    /// no-op reported as [`RevealKind::NoChange`].
    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_index(index)?;

        if self.state.is_lost() || self.revealed_mask[coords.to_nd_index()] {
            return Ok(self.outcome(RevealKind::NoChange));
        }

        self.revealed_mask[coords.to_nd_index()] = true;
        self.revealed.push(index);

        if self.mine_layout[coords] {
            self.triggered_mine = Some(index);
            self.state = GameState::Lost;
            log::info!("Mine hit at cell {index}, game over");
            Ok(self.outcome(RevealKind::HitMine))
        } else {
            log::trace!("Revealed safe cell {index}");
            Ok(self.outcome(RevealKind::Revealed))
        }
    }

    fn view_at(&self, coords: Coord2) -> CellView {
        match (self.revealed_mask[coords.to_nd_index()], self.mine_layout[coords]) {
            (false, _) => CellView::Hidden,
            (true, false) => CellView::Safe,
            (true, true) => CellView::Mine,
        }
    }

    fn outcome(&self, kind: RevealKind) -> RevealOutcome {
        RevealOutcome {
            state: self.state,
            kind,
        }
    }
}
