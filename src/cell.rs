use core::fmt::{self, Formatter};
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A cell on a Minesweeper grid.
///
/// Cells are plain data: the engine mutates them through the three grid passes (mine placement, adjacency counting, reveal) and frontends read them back through [`Cell::view`]. All fields are public — a frontend which implements flagging flips [`visibility`][Self::visibility] directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Cell {
    /// Whether the cell is hidden, flagged or already revealed.
    pub visibility: Visibility,
    /// Whether the cell holds a mine.
    pub mine: bool,
    /// The number of mines on the up to 8 surrounding cells, in `0..=8`.
    ///
    /// This is only meaningful after a full [`recount_adjacent_mines`][crate::Grid::recount_adjacent_mines] pass over the grid; until then it holds the zero it was initialized with.
    pub adjacent_mines: u8,
}
impl Cell {
    /// Returns `true` if the cell has been revealed, `false` otherwise.
    #[inline]
    pub fn is_visible(self) -> bool {
        match self.visibility {
            Visibility::Visible => true,
            _ => false,
        }
    }
    /// Returns `true` if the cell is still hidden, `false` otherwise.
    #[inline]
    pub fn is_hidden(self) -> bool {
        match self.visibility {
            Visibility::Hidden => true,
            _ => false,
        }
    }
    /// Returns `true` if the cell carries a flag, `false` otherwise.
    #[inline]
    pub fn is_flagged(self) -> bool {
        match self.visibility {
            Visibility::Flagged => true,
            _ => false,
        }
    }
    /// Returns the tag a renderer should draw for this cell.
    ///
    /// Hidden and flagged cells keep their mine flag and count to themselves — the view is the entire read-side contract, so a frontend holding only views cannot leak the board.
    #[inline]
    pub fn view(self) -> CellView {
        match self.visibility {
            Visibility::Hidden => CellView::Hidden,
            Visibility::Flagged => CellView::Flagged,
            Visibility::Visible => CellView::Visible(self.adjacent_mines),
        }
    }
}
impl Default for Cell {
    /// Returns a hidden, mine-free cell with a zero count.
    fn default() -> Self {
        Self {
            visibility: Visibility::default(),
            mine: false,
            adjacent_mines: 0,
        }
    }
}

/// The display state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Visibility {
    /// Not yet revealed. Every cell starts out here.
    Hidden,
    /// Marked by the player as a suspected mine.
    ///
    /// No algorithm in this crate reads or writes this state — it exists so that frontends which implement flagging have somewhere to keep it, and so that [`Cell::view`] can report it.
    Flagged,
    /// Revealed by a [`reveal`][crate::Grid::reveal] pass.
    Visible,
}
impl Default for Visibility {
    /// Returns the `Hidden` state.
    #[inline(always)]
    fn default() -> Self {
        Self::Hidden
    }
}

/// The tag a render collaborator consumes for one cell.
///
/// A full frame is every cell of the grid in row-major order, one row per output line — see [`Grid::rows`][crate::Grid::rows]. This is the only read-side contract the engine exposes; how the tags turn into glyphs, sprites or colors is the frontend's business.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CellView {
    /// A revealed cell and its adjacent-mine count, in `0..=8`.
    Visible(u8),
    /// A cell that has not been revealed.
    Hidden,
    /// A cell the player flagged.
    Flagged,
}
impl fmt::Display for CellView {
    /// Writes the classic one-character encoding: the digit for a revealed cell next to mines, `v` for a revealed cell of a clearing, `h` for a hidden cell and `f` for a flagged one.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible(0) => f.write_str("v"),
            Self::Visible(count) => write!(f, "{}", count),
            Self::Hidden => f.write_str("h"),
            Self::Flagged => f.write_str("f"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_conceals_hidden_state() {
        let mut cell = Cell::default();
        cell.mine = true;
        cell.adjacent_mines = 3;
        assert_eq!(cell.view(), CellView::Hidden);
        cell.visibility = Visibility::Flagged;
        assert_eq!(cell.view(), CellView::Flagged);
        cell.visibility = Visibility::Visible;
        assert_eq!(cell.view(), CellView::Visible(3));
    }

    #[test]
    fn view_encoding() {
        assert_eq!(CellView::Visible(0).to_string(), "v");
        assert_eq!(CellView::Visible(8).to_string(), "8");
        assert_eq!(CellView::Hidden.to_string(), "h");
        assert_eq!(CellView::Flagged.to_string(), "f");
    }
}
