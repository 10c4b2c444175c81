//! The grid of a Minesweeper game.
//!
//! This is the main point of interest — every pass of the engine runs against the [`Grid`] defined here. A grid is built once per game through [`Grid::new`] (or [`Grid::generate`], which also runs the placement and counting passes), mutated in place, and read back by the frontend through [`Grid::rows`]. It is never resized.

use crate::{
    iter::{GridRowsIter, Neighborhood, RowIter},
    Cell,
};
use alloc::{vec, vec::Vec};
use core::{
    fmt::{self, Formatter},
    num::NonZeroUsize,
    ops::{Index, IndexMut},
};
use log::debug;
#[cfg(feature = "generation")]
use rand::Rng;
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The dimensions of a grid.
///
/// The first element specifies the width (the number of columns), while the second one specifies the height (number of rows). As required by `NonZeroUsize`, a grid cannot be smaller than 1x1 — zero-size boards are unrepresentable rather than rejected at runtime.
pub type GridDimensions = [NonZeroUsize; 2];
/// The coordinates of a cell on a grid.
///
/// The first element specifies the column index (X coordinate), while the second one specifies the row index (Y coordinate). The coordinate system starts from zero, i.e. `[0, 0]` is the top left corner and the only cell of a 1x1 grid.
pub type GridCoordinates = [usize; 2];

/// The ways a grid operation can fail.
///
/// Counting and revealing are total over a valid grid — the only fallible points are cell addressing and board configuration, and both report here instead of panicking or looping forever.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum GridError {
    /// A coordinate pair pointed outside the grid extent.
    OutOfBounds(GridCoordinates),
    /// The requested mine count does not leave a single mine-free cell, so mine placement could never terminate.
    InvalidConfiguration {
        /// The requested number of mines.
        mine_count: usize,
        /// The number of cells on the requested grid.
        area: usize,
    },
}
impl fmt::Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds([x, y]) => {
                write!(f, "coordinates [{}, {}] are outside the grid", x, y)
            }
            Self::InvalidConfiguration { mine_count, area } => write!(
                f,
                "mine count {} must be smaller than the grid area {}",
                mine_count, area
            ),
        }
    }
}
#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// Represents a Minesweeper grid.
///
/// Grids are matrices of [cells][Cell] together with the target mine count. The cells live in one contiguous allocation addressed `x + y * width`, so row-major traversal walks memory in order. Three passes mutate a grid over its lifetime: [`place_mines`][Self::place_mines] flips mine flags, [`recount_adjacent_mines`][Self::recount_adjacent_mines] writes the counts, and [`reveal`][Self::reveal] flips visibility. The frontend then reads the result through [`rows`][Self::rows].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Grid {
    dimensions: GridDimensions,
    mine_count: usize,
    storage: Vec<Cell>,
}
impl Grid {
    /// Creates a grid with every cell hidden, mine-free and zero-counted.
    ///
    /// # Errors
    /// [`GridError::InvalidConfiguration`] if `mine_count` is not smaller than the grid area. The bound is strict — a grid with a mine on every cell would keep [`place_mines`][Self::place_mines] rejection-sampling forever, so the configuration is refused before any placement can run.
    pub fn new(dimensions: GridDimensions, mine_count: usize) -> Result<Self, GridError> {
        let area = dimensions[0].get() * dimensions[1].get();
        if mine_count >= area {
            return Err(GridError::InvalidConfiguration { mine_count, area });
        }
        Ok(Self {
            dimensions,
            mine_count,
            storage: vec![Cell::default(); area],
        })
    }
    /// Creates a fully initialized board: a fresh grid with `mine_count` mines placed through `rng` and every adjacent-mine count computed.
    ///
    /// This is the whole construction pipeline in one call; use [`new`][Self::new] plus the individual passes if you need to lay out mines yourself.
    ///
    /// # Errors
    /// [`GridError::InvalidConfiguration`], under the same condition as [`new`][Self::new].
    #[cfg(feature = "generation")]
    pub fn generate<R: Rng + ?Sized>(
        dimensions: GridDimensions,
        mine_count: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(dimensions, mine_count)?;
        grid.place_mines(rng);
        grid.recount_adjacent_mines();
        Ok(grid)
    }

    /// Returns the width and height of the grid.
    #[inline(always)]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }
    /// Returns the width (number of columns) of the grid.
    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.dimensions[0].get()
    }
    /// Returns the height (number of rows) of the grid.
    #[inline(always)]
    pub const fn height(&self) -> usize {
        self.dimensions[1].get()
    }
    /// Returns the total number of cells on the grid.
    #[inline(always)]
    pub const fn area(&self) -> usize {
        self.width() * self.height()
    }
    /// Returns the number of mines the grid is configured to hold.
    #[inline(always)]
    pub const fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Returns the flat storage index for a coordinate pair, or `None` if it is out of bounds.
    fn index_of(&self, coordinates: GridCoordinates) -> Option<usize> {
        let [x, y] = coordinates;
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(x + y * self.width())
    }
    /// Returns the cell at the column `coordinates[0]` and row `coordinates[1]`, both starting at zero, or `None` if the coordinates are out of bounds.
    ///
    /// This is the immutable version of `get_mut`.
    #[inline]
    pub fn get(&self, coordinates: GridCoordinates) -> Option<&Cell> {
        let index = self.index_of(coordinates)?;
        Some(&self.storage[index])
    }
    /// Returns a mutable reference to the cell at the column `coordinates[0]` and row `coordinates[1]`, both starting at zero, or `None` if the coordinates are out of bounds.
    ///
    /// This is the mutable version of `get`.
    #[inline]
    pub fn get_mut(&mut self, coordinates: GridCoordinates) -> Option<&mut Cell> {
        let index = self.index_of(coordinates)?;
        Some(&mut self.storage[index])
    }
    /// Returns the cell at the given coordinates, reporting the failed coordinates on a miss.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the coordinates lie outside the grid extent.
    #[inline]
    pub fn cell(&self, coordinates: GridCoordinates) -> Result<&Cell, GridError> {
        self.get(coordinates)
            .ok_or(GridError::OutOfBounds(coordinates))
    }
    /// Returns a mutable reference to the cell at the given coordinates, reporting the failed coordinates on a miss.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the coordinates lie outside the grid extent.
    #[inline]
    pub fn cell_mut(&mut self, coordinates: GridCoordinates) -> Result<&mut Cell, GridError> {
        self.get_mut(coordinates)
            .ok_or(GridError::OutOfBounds(coordinates))
    }
    /// Detects whether a location holds a mine, or `None` if it's out of bounds.
    #[inline]
    pub fn is_mine(&self, coordinates: GridCoordinates) -> Option<bool> {
        self.get(coordinates).map(|cell| cell.mine)
    }

    /// Returns the clamped neighborhood block around `center` — up to 9 coordinates, the center included.
    ///
    /// The block is a pure function of the grid dimensions and the center; it borrows no cells, so it can drive a pass that mutates the grid it came from.
    #[inline(always)]
    pub fn neighborhood(&self, center: GridCoordinates) -> Neighborhood {
        Neighborhood::new(self.dimensions, center)
    }

    /// Counts the mines on the up to 8 cells surrounding a location.
    ///
    /// All directly and diagonally adjacent cells are considered, clamped at edges and corners. The location itself never counts, whether it holds a mine or not — the center is skipped by comparing coordinates, not mine flags.
    #[must_use = "counting a neighborhood is a nine-cell lookup"]
    pub fn count_adjacent_mines(&self, location: GridCoordinates) -> u8 {
        let mut count = 0_u8;
        for spot in self.neighborhood(location) {
            if spot == location {
                continue;
            }
            if let Some(true) = self.is_mine(spot) {
                count += 1;
            }
        }
        count
    }
    /// Writes the adjacent-mine count of every cell on the grid.
    ///
    /// The pass runs row-major over the full grid; the result is order-independent, and running it twice over the same mine layout yields identical counts. It must complete before a reveal or a render reads the counts — a partially counted grid holds unrepresentative zeros.
    pub fn recount_adjacent_mines(&mut self) {
        let (width, height) = (self.width(), self.height());
        for y in 0..height {
            for x in 0..width {
                let count = self.count_adjacent_mines([x, y]);
                self.storage[x + y * width].adjacent_mines = count;
            }
        }
        debug!("recounted adjacent mines on a {}x{} grid", width, height);
    }

    /// Places the configured number of mines on distinct cells drawn uniformly from `rng`.
    ///
    /// Placement is rejection sampling, the same as the classic implementations: draw a flat cell index, retry if that cell already holds a mine, stop once exactly [`mine_count`][Self::mine_count] mines exist. The strict mine-count bound enforced by [`new`][Self::new] is what guarantees the loop terminates.
    ///
    /// The grid must not hold mines yet — placing on top of an earlier placement could leave fewer free cells than mines to place. Counts are not touched; run [`recount_adjacent_mines`][Self::recount_adjacent_mines] once placement is done, or use [`generate`][Self::generate] which does both.
    #[cfg(feature = "generation")]
    pub fn place_mines<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let area = self.area();
        let mut placed = 0_usize;
        let mut draws = 0_usize;
        while placed < self.mine_count {
            draws += 1;
            let index: usize = rng.gen_range(0, area);
            let cell = &mut self.storage[index];
            if !cell.mine {
                cell.mine = true;
                placed += 1;
            }
        }
        debug!(
            "placed {} mines on a {}-cell grid in {} draws",
            placed, area, draws
        );
    }

    /// Returns an iterator over a single row.
    ///
    /// An out-of-range row yields an empty iterator.
    #[inline(always)]
    pub fn row(&self, row: usize) -> RowIter<'_> {
        RowIter::new(self, row)
    }
    /// Returns an iterator over the grid's rows, top to bottom.
    ///
    /// This is the read side of the engine: every cell in row-major order, one [`RowIter`] per output line, for the render collaborator to consume.
    #[inline(always)]
    pub fn rows(&self) -> GridRowsIter<'_> {
        GridRowsIter::new(self)
    }
}
impl Index<GridCoordinates> for Grid {
    type Output = Cell;
    /// Returns the cell at the column `coordinates[0]` and row `coordinates[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method. For a version which returns an `Option` instead of panicking if the index is out of bounds, see `get`.
    #[inline(always)]
    fn index(&self, coordinates: GridCoordinates) -> &Self::Output {
        self.get(coordinates).expect("index out of bounds")
    }
}
impl IndexMut<GridCoordinates> for Grid {
    /// Returns the cell at the column `coordinates[0]` and row `coordinates[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method. For a version which returns an `Option` instead of panicking if the index is out of bounds, see `get_mut`.
    #[inline(always)]
    fn index_mut(&mut self, coordinates: GridCoordinates) -> &mut Self::Output {
        self.get_mut(coordinates).expect("index out of bounds")
    }
}
