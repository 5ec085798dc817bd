use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Safe,
    Mine,
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
