use std::fmt;

use bombgrid_core::{Board, CellView, GameState};

const HIDDEN: char = '#';
const SAFE: char = '.';
const MINE: char = '*';

/// Draws the grid with row and column numbers, one line per row.
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let size = usize::from(board.size());
        let width = (size - 1).to_string().len();

        write!(f, "{:width$} ", "")?;
        for col in 0..size {
            write!(f, " {col:>width$}")?;
        }
        writeln!(f)?;

        let cells: Vec<_> = board.iter_cells().map(|(_, cell)| cell).collect();
        for (row, line) in cells.chunks(size).enumerate() {
            write!(f, "{row:>width$} ")?;
            for &cell in line {
                write!(f, " {:>width$}", glyph(cell))?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            "{} mines, {} opened, {}",
            board.mine_count(),
            board.revealed().len(),
            status(board.state())
        )
    }
}

fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Hidden => HIDDEN,
        CellView::Safe => SAFE,
        CellView::Mine => MINE,
    }
}

fn status(state: GameState) -> &'static str {
    match state {
        GameState::InProgress => "avoid the bombs!",
        GameState::Lost => "you lost! Type `new N` to try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bombgrid_core::{CellIndex, GameConfig, MineLayout};

    fn board(size: i64, mines: &[CellIndex]) -> Board {
        let config = GameConfig::new(size).unwrap();
        Board::new(MineLayout::from_mine_indices(config, mines).unwrap())
    }

    #[test]
    fn draws_hidden_grid() {
        let rendered = BoardView(&board(3, &[4])).to_string();

        assert_eq!(
            rendered,
            "   0 1 2\n\
             0  # # #\n\
             1  # # #\n\
             2  # # #\n\
             1 mines, 0 opened, avoid the bombs!"
        );
    }

    #[test]
    fn draws_opened_cells_and_loss() {
        let mut board = board(3, &[4]);
        board.reveal(0).unwrap();
        board.reveal(4).unwrap();

        let rendered = BoardView(&board).to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[1], "0  . # #");
        assert_eq!(lines[2], "1  # * #");
        assert!(lines[4].starts_with("1 mines, 2 opened, you lost!"));
    }

    #[test]
    fn pads_wide_grids() {
        let rendered = BoardView(&board(11, &[])).to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert!(lines[0].ends_with(" 9 10"));
        assert!(lines[11].starts_with("10   #  #"));
    }
}
