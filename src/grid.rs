use std::fmt;

use crate::error::MazeError;

pub const MIN_SIDE: usize = 5;
pub const MAX_SIDE: usize = 1001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Visited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    /// Moves `distance` cells from `pos`, or `None` when that would go below zero.
    /// The upper bound is left to the grid.
    pub fn step(self, pos: Pos, distance: usize) -> Option<Pos> {
        let (dx, dy) = self.delta();
        let nx = pos.x as isize + dx * distance as isize;
        let ny = pos.y as isize + dy * distance as isize;
        if nx < 0 || ny < 0 {
            return None;
        }
        Some(Pos {
            x: nx as usize,
            y: ny as usize,
        })
    }
}

pub fn make_odd(n: usize) -> usize {
    if n % 2 == 0 {
        n + 1
    } else {
        n
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        let valid = |side: usize| (MIN_SIDE..=MAX_SIDE).contains(&side) && side % 2 == 1;
        if !valid(rows) || !valid(cols) {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            width: cols,
            height: rows,
            tiles: vec![vec![Tile::Wall; cols]; rows],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x > 0 && pos.y > 0 && pos.x < self.width - 1 && pos.y < self.height - 1
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.tiles.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    pub fn set(&mut self, pos: Pos, tile: Tile) -> Result<(), MazeError> {
        let (width, height) = (self.width, self.height);
        match self.tiles.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
            Some(cell) => {
                *cell = tile;
                Ok(())
            }
            None => Err(MazeError::OutOfBounds { pos, width, height }),
        }
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&t| t == tile)
            .count()
    }

    pub fn clear_visited(&mut self) {
        for tile in self.tiles.iter_mut().flat_map(|row| row.iter_mut()) {
            if *tile == Tile::Visited {
                *tile = Tile::Open;
            }
        }
    }

    pub(crate) fn tile_mut(&mut self, pos: Pos) -> &mut Tile {
        &mut self.tiles[pos.y][pos.x]
    }
}
