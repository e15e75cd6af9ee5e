use std::io;

use thiserror::Error;

use crate::grid::{Pos, Tile, MAX_SIDE, MIN_SIDE};

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze sides must be odd and between {} and {}, got {rows}x{cols}", MIN_SIDE, MAX_SIDE)]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("position {pos} is outside a {width}x{height} grid")]
    OutOfBounds { pos: Pos, width: usize, height: usize },
    #[error("position {pos} is {tile:?}, expected an open cell")]
    NotOpen { pos: Pos, tile: Tile },
    #[error("position {pos} is not on the even lattice")]
    NotLattice { pos: Pos },
    #[error("position {pos} has already been carved")]
    AlreadyCarved { pos: Pos },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
