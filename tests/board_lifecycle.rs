//! Drives the whole board lifecycle through the public API: generate, count,
//! reveal, then read the result back the way a render collaborator would.

use core::num::NonZeroUsize;
use minefield::{Grid, GridDimensions, GridError};
use rand::{rngs::StdRng, SeedableRng};

fn dimensions(width: usize, height: usize) -> GridDimensions {
    [
        NonZeroUsize::new(width).unwrap(),
        NonZeroUsize::new(height).unwrap(),
    ]
}

#[test]
fn generated_board_holds_exactly_the_configured_mines() {
    for seed in 0..8_u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::generate(dimensions(16, 16), 40, &mut rng).unwrap();
        let mines = grid.rows().flatten().filter(|cell| cell.mine).count();
        assert_eq!(mines, 40);
    }
}

#[test]
fn adjacency_counts_match_a_brute_force_scan() {
    let mut rng = StdRng::seed_from_u64(20_260_808);
    let grid = Grid::generate(dimensions(11, 7), 15, &mut rng).unwrap();
    let (width, height) = (grid.width(), grid.height());
    for y in 0..height {
        for x in 0..width {
            // Recount by hand, without the engine's neighborhood iterator.
            let mut expected = 0_u8;
            for dy in -1_i64..=1 {
                for dx in -1_i64..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    if grid.cell([nx as usize, ny as usize]).unwrap().mine {
                        expected += 1;
                    }
                }
            }
            assert_eq!(grid.cell([x, y]).unwrap().adjacent_mines, expected);
        }
    }
}

#[test]
fn reveal_only_ever_opens_numbered_cells() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = Grid::generate(dimensions(25, 25), 10, &mut rng).unwrap();
    grid.reveal([5, 5]).unwrap();
    for cell in grid.rows().flatten() {
        if cell.is_visible() {
            assert!(cell.adjacent_mines > 0);
        }
    }
}

#[test]
fn rendered_frame_is_one_tag_per_cell_row_by_row() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut grid = Grid::generate(dimensions(9, 5), 6, &mut rng).unwrap();
    grid.reveal([4, 2]).unwrap();
    let frame: Vec<String> = grid
        .rows()
        .map(|row| row.map(|cell| cell.view().to_string()).collect())
        .collect();
    assert_eq!(frame.len(), 5);
    for line in &frame {
        assert_eq!(line.chars().count(), 9);
        for tag in line.chars() {
            assert!(matches!(tag, 'h' | 'f' | 'v' | '1'..='8'));
        }
    }
}

#[test]
fn full_board_of_mines_is_refused_up_front() {
    let mut rng = StdRng::seed_from_u64(1);
    // With every cell mined, placement could never terminate — the
    // configuration has to be rejected before generation starts.
    assert_eq!(
        Grid::generate(dimensions(4, 4), 16, &mut rng),
        Err(GridError::InvalidConfiguration {
            mine_count: 16,
            area: 16
        })
    );
}
