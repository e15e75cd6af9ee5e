use std::collections::VecDeque;

use log::{debug, warn};

use crate::error::MazeError;
use crate::grid::{Dir, Grid, Pos, Tile};

/// Breadth-first search from `start` towards `end` through open cells.
///
/// Every cell reached is marked [`Tile::Visited`]; the search stops as soon
/// as `end` is dequeued, so cells beyond that point stay open. No path is
/// reconstructed, the visited marks are only there to be drawn.
///
/// `start` must be open. A grid that was already solved has to be reset
/// with [`Grid::clear_visited`] before it can be searched again.
pub fn find_path_bfs(grid: &mut Grid, start: Pos, end: Pos) -> Result<bool, MazeError> {
    let out_of_bounds = |pos: Pos| MazeError::OutOfBounds {
        pos,
        width: grid.width(),
        height: grid.height(),
    };
    match grid.get(start) {
        Some(Tile::Open) => {}
        Some(tile) => return Err(MazeError::NotOpen { pos: start, tile }),
        None => return Err(out_of_bounds(start)),
    }
    if !grid.contains(end) {
        return Err(out_of_bounds(end));
    }

    let mut q = VecDeque::new();
    *grid.tile_mut(start) = Tile::Visited;
    q.push_back(start);
    let mut visited = 1usize;

    while let Some(pos) = q.pop_front() {
        if pos == end {
            debug!("reached {} from {} after visiting {} cells", end, start, visited);
            return Ok(true);
        }
        for dir in Dir::ALL {
            let (dx, dy) = dir.delta();
            let nx = pos.x as isize + dx;
            let ny = pos.y as isize + dy;
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            let next = Pos::new(nx as usize, ny as usize);
            let tile = grid.tile_mut(next);
            if *tile == Tile::Open {
                *tile = Tile::Visited;
                q.push_back(next);
                visited += 1;
            }
        }
    }

    warn!("no path from {} to {} ({} cells visited)", start, end, visited);
    Ok(false)
}
