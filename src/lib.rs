use std::io::Write;

pub mod carve;
pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod solve;

pub use carve::{carve_maze, carve_maze_seeded};
pub use config::MazeConfig;
pub use error::MazeError;
pub use grid::{make_odd, Dir, Grid, Pos, Tile};
pub use render::{draw, render_to_string};
pub use solve::find_path_bfs;

pub fn generate(config: &MazeConfig) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(config.rows, config.cols)?;
    carve_maze_seeded(&mut grid, config.start, config.seed)?;
    Ok(grid)
}

pub const NO_PATH_MESSAGE: &str = "No path found";

/// Searches `grid` and writes it to `out`. When `end` cannot be reached a
/// one-line notice goes first and the partly explored grid is still drawn.
pub fn solve_and_draw(
    out: &mut impl Write,
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    colored: bool,
) -> Result<bool, MazeError> {
    let found = find_path_bfs(grid, start, end)?;
    if !found {
        writeln!(out, "{NO_PATH_MESSAGE}")?;
    }
    draw(out, grid, start, end, colored)?;
    Ok(found)
}
