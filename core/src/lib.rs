#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::vec::Vec;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
#[cfg(feature = "std")]
pub use session::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
#[cfg(feature = "std")]
mod session;
mod tile;
mod types;

/// Smallest accepted grid size.
pub const MIN_SIZE: Coord = 2;

/// One in every `MINE_DENSITY_DIVISOR` cells holds a mine, rounded down.
pub const MINE_DENSITY_DIVISOR: CellCount = 5;

/// Validated square grid size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Coord", into = "Coord")]
pub struct GameConfig {
    size: Coord,
}

impl GameConfig {
    pub fn new(size: i64) -> Result<Self> {
        if size < i64::from(MIN_SIZE) {
            return Err(GameError::InvalidSize);
        }
        let size = Coord::try_from(size).map_err(|_| GameError::SizeTooLarge)?;
        Self::try_from(size)
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn mine_count(&self) -> CellCount {
        self.total_cells() / MINE_DENSITY_DIVISOR
    }

    pub fn cell_index(&self, coords: Coord2) -> Result<CellIndex> {
        cell_index(self.size, coords).ok_or(GameError::InvalidIndex)
    }

    pub fn cell_coords(&self, index: CellIndex) -> Result<Coord2> {
        cell_coords(self.size, index).ok_or(GameError::InvalidIndex)
    }

    pub(crate) fn dim(&self) -> [usize; 2] {
        (self.size, self.size).to_nd_index()
    }
}

impl TryFrom<Coord> for GameConfig {
    type Error = GameError;

    fn try_from(size: Coord) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(GameError::InvalidSize);
        }
        Ok(Self { size })
    }
}

impl From<GameConfig> for Coord {
    fn from(config: GameConfig) -> Self {
        config.size
    }
}

/// Parses the size typed by a player. Only whole numbers are accepted.
impl FromStr for GameConfig {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self> {
        let size: i64 = input
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidSize)?;
        Self::new(size)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineLayoutRepr")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

/// Unchecked shape of a saved [`MineLayout`].
#[derive(Deserialize)]
struct MineLayoutRepr {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl TryFrom<MineLayoutRepr> for MineLayout {
    type Error = GameError;

    fn try_from(repr: MineLayoutRepr) -> Result<Self> {
        let (rows, cols) = repr.mine_mask.dim();
        let size = Coord::try_from(rows).map_err(|_| GameError::CorruptBoard)?;
        if rows != cols || size < MIN_SIZE {
            return Err(GameError::CorruptBoard);
        }

        let layout = Self::from_mine_mask(repr.mine_mask);
        if layout.mine_count != repr.mine_count {
            return Err(GameError::CorruptBoard);
        }
        Ok(layout)
    }
}

impl MineLayout {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_indices(config: GameConfig, mine_indices: &[CellIndex]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(config.dim());

        for &index in mine_indices {
            let coords = config.cell_coords(index)?;
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn config(&self) -> GameConfig {
        GameConfig { size: self.size() }
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<Coord2> {
        self.config().cell_coords(index)
    }

    pub fn size(&self) -> Coord {
        self.mine_mask.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, index: CellIndex) -> bool {
        self.validate_index(index).is_ok_and(|coords| self[coords])
    }

    /// Mined cell indices in ascending order.
    pub fn mine_indices(&self) -> Vec<CellIndex> {
        let size = self.size();
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .filter_map(|((row, col), _)| cell_index(size, (row as Coord, col as Coord)))
            .collect()
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealKind {
    NoChange,
    Revealed,
    HitMine,
}

/// Result of one reveal: the status after the move and what the move did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    pub state: GameState,
    pub kind: RevealKind,
}

impl RevealOutcome {
    /// True only for the reveal that caused the loss, never for later no-ops.
    pub const fn hit_mine(self) -> bool {
        matches!(self.kind, RevealKind::HitMine)
    }

    pub const fn has_update(self) -> bool {
        use RevealKind::*;
        match self.kind {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }
}
