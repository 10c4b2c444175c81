//! A Minesweeper board engine.
//!
//! The crate owns the part of a Minesweeper game that every implementation ends up writing: the grid of cells, random mine placement, the per-cell adjacent-mine counts and the flood-fill reveal. Rendering the board and collecting player input are deliberately left out — a frontend walks [`Grid::rows`], draws the [`CellView`] tag of each cell however it likes, and calls back into [`Grid::reveal`] when the player clicks.
//!
//! # Feature gates
//! - `std` — enable a dependency on the hosted standard library (**enabled by default**)
//!
//!   Without this feature, the crate only depends on `core` and `alloc` (a memory allocator is still required), so the engine runs in a freestanding environment — a Minesweeper on a microcontroller needs a display driver and this crate, nothing else.
//!
//! - `generation` — enable random mine placement (**enabled by default**)
//!
//!   Enables the dependency on `rand`, used by [`Grid::place_mines`] and [`Grid::generate`]. Disable to remove said dependency if you'd like to lay out mines yourself.
//!
//! - `serialization` — enable support for grid serialization (**enabled by default**, disable to speed up compilation)
//!
//!   Enables the dependency on `serde` and its derive macros, which allows one to serialize and deserialize a grid into a consistent (platform-independent) format. See the `serde` crate for more.
//!
//! - `track_caller` — use `track_caller` attributes
//!
//!   Places the `track_caller` attribute on indexing operators and other panicking methods, improving panic messages. **Requires a nightly compiler**.
//!
//! # Example
//! One full pass — generate a board, reveal around a starting point, hand the rows to a renderer:
//! ```
//! use minefield::Grid;
//! use core::num::NonZeroUsize;
//!
//! let dimensions = [NonZeroUsize::new(9).unwrap(), NonZeroUsize::new(9).unwrap()];
//! let mut grid = Grid::generate(dimensions, 10, &mut rand::thread_rng()).unwrap();
//! grid.reveal([4, 4]).unwrap();
//! for row in grid.rows() {
//!     let line: String = row.map(|cell| cell.view().to_string()).collect();
//!     assert_eq!(line.len(), 9); // one character per cell, one row per line
//! }
//! ```

#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]
#![cfg_attr(feature = "track_caller", feature(track_caller))]
// Copypaste the following to enable this on specific methods:
//  #[cfg_attr(feature = "track_caller", track_caller)]

// Copypaste to derive Serde traits on specific types:
// #[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod cell;
pub use cell::*;
mod grid;
pub use grid::*;
pub mod iter;
pub use iter::*;
mod reveal;
