use std::io::{self, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::grid::{Grid, Pos, Tile};

pub const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Endpoint,
    Visited,
    Wall,
    Open,
}

impl Glyph {
    pub fn text(self) -> &'static str {
        match self {
            Glyph::Endpoint => "O ",
            Glyph::Visited => "x ",
            Glyph::Wall => "▓▓",
            Glyph::Open => "  ",
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Endpoint => Color::Yellow,
            Glyph::Visited => Color::Green,
            Glyph::Wall => Color::Blue,
            Glyph::Open => Color::Reset,
        }
    }
}

pub fn glyph_for(grid: &Grid, pos: Pos, start: Pos, end: Pos) -> Glyph {
    if pos == start || pos == end {
        return Glyph::Endpoint;
    }
    match grid.get(pos) {
        Some(Tile::Visited) => Glyph::Visited,
        Some(Tile::Open) => Glyph::Open,
        Some(Tile::Wall) | None => Glyph::Wall,
    }
}

pub fn render_to_string(grid: &Grid, start: Pos, end: Pos) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push_str(glyph_for(grid, Pos { x, y }, start, end).text());
        }
        out.push('\n');
    }
    out
}

/// Writes the maze through crossterm, colouring cells when `colored` is set.
pub fn draw(out: &mut impl Write, grid: &Grid, start: Pos, end: Pos, colored: bool) -> io::Result<()> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            draw_cell(out, glyph_for(grid, Pos { x, y }, start, end), colored)?;
        }
        out.queue(Print('\n'))?;
    }
    out.flush()
}

fn draw_cell(out: &mut impl Write, glyph: Glyph, colored: bool) -> io::Result<()> {
    let text = glyph.text();
    if colored {
        out.queue(SetForegroundColor(glyph.color()))?;
    }
    out.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            out.queue(Print(' '))?;
        }
    }
    if colored {
        out.queue(ResetColor)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carve::carve_maze;
    use crate::solve::find_path_bfs;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn renders_each_tile_kind() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(Pos::new(1, 1), Tile::Visited).unwrap();
        grid.set(Pos::new(3, 1), Tile::Open).unwrap();
        let text = render_to_string(&grid, Pos::new(2, 2), Pos::new(3, 3));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "▓▓▓▓▓▓▓▓▓▓");
        assert_eq!(lines[1], "▓▓x ▓▓  ▓▓");
        assert_eq!(lines[2], "▓▓▓▓O ▓▓▓▓");
        assert_eq!(lines[3], "▓▓▓▓▓▓O ▓▓");
    }

    #[test]
    fn cells_are_two_columns_wide() {
        for glyph in [Glyph::Endpoint, Glyph::Visited, Glyph::Wall, Glyph::Open] {
            assert_eq!(UnicodeWidthStr::width(glyph.text()), CELL_W);
        }
    }

    #[test]
    fn plain_draw_matches_string_rendering() {
        let mut grid = Grid::new(9, 11).unwrap();
        carve_maze(&mut grid, Pos::new(2, 2), &mut StdRng::seed_from_u64(3)).unwrap();
        let (start, end) = (Pos::new(2, 2), Pos::new(8, 6));
        find_path_bfs(&mut grid, start, end).unwrap();

        let mut buf = Vec::new();
        draw(&mut buf, &grid, start, end, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_to_string(&grid, start, end));
    }

    #[test]
    fn colored_draw_emits_escape_codes() {
        let grid = Grid::new(5, 5).unwrap();
        let mut buf = Vec::new();
        draw(&mut buf, &grid, Pos::new(2, 2), Pos::new(2, 2), true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("O "));
    }
}
