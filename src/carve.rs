use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::{Dir, Grid, Pos, Tile};

/// Distance between two neighbouring rooms on the lattice.
const LATTICE_STEP: usize = 2;

/// Carves a perfect maze into an all-wall grid, starting from `start`.
///
/// Each popped room shuffles the four directions and opens every neighbour
/// that is still a wall, together with the wall cell between them, pushing
/// each one back on the stack. A room is only opened while it is still a
/// wall, so the opened rooms form a spanning tree.
pub fn carve_maze(grid: &mut Grid, start: Pos, rng: &mut impl Rng) -> Result<(), MazeError> {
    check_start(grid, start)?;

    let mut stack: Vec<Pos> = Vec::new();
    *grid.tile_mut(start) = Tile::Open;
    stack.push(start);
    let mut opened = 1usize;

    let mut dirs = Dir::ALL;
    while let Some(current) = stack.pop() {
        dirs.shuffle(rng);
        for dir in dirs {
            let Some(next) = dir.step(current, LATTICE_STEP) else {
                continue;
            };
            if !grid.is_interior(next) || grid.get(next) != Some(Tile::Wall) {
                continue;
            }
            *grid.tile_mut(next) = Tile::Open;
            *grid.tile_mut(midpoint(current, next)) = Tile::Open;
            stack.push(next);
            opened += 1;
        }
    }

    debug!(
        "carved {}x{} maze from {}: {} rooms opened",
        grid.height(),
        grid.width(),
        start,
        opened
    );
    Ok(())
}

/// Same as [`carve_maze`], with randomness from `seed` when given and from
/// the thread-local generator otherwise.
pub fn carve_maze_seeded(grid: &mut Grid, start: Pos, seed: Option<u64>) -> Result<(), MazeError> {
    match seed {
        Some(seed) => carve_maze(grid, start, &mut StdRng::seed_from_u64(seed)),
        None => carve_maze(grid, start, &mut rand::thread_rng()),
    }
}

fn check_start(grid: &Grid, start: Pos) -> Result<(), MazeError> {
    if !grid.contains(start) {
        return Err(MazeError::OutOfBounds {
            pos: start,
            width: grid.width(),
            height: grid.height(),
        });
    }
    if start.x % 2 != 0 || start.y % 2 != 0 || !grid.is_interior(start) {
        return Err(MazeError::NotLattice { pos: start });
    }
    if grid.get(start) != Some(Tile::Wall) {
        return Err(MazeError::AlreadyCarved { pos: start });
    }
    Ok(())
}

fn midpoint(a: Pos, b: Pos) -> Pos {
    Pos {
        x: (a.x + b.x) / 2,
        y: (a.y + b.y) / 2,
    }
}
