use crate::grid::{make_odd, Pos, MAX_SIDE};

pub const DEFAULT_ROWS: usize = 15;
pub const DEFAULT_COLS: usize = 31;
pub const START: Pos = Pos::new(2, 2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Pos,
    pub end: Pos,
    pub seed: Option<u64>,
}

impl MazeConfig {
    /// Rounds both sides up to odd and puts the end in the far corner room.
    /// Sides below 5 are kept as given and rejected when the grid is built.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = make_odd(rows);
        let cols = make_odd(cols);
        Self {
            rows,
            cols,
            start: START,
            end: Pos::new(cols.saturating_sub(3), rows.saturating_sub(3)),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Reads `MAZE_ROWS`, `MAZE_COLS` and `MAZE_SEED`, keeping the defaults
    /// for anything unset or unparsable. These are optional overrides on top
    /// of the fixed 15x31 run; with none of them set the output is unchanged.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        let rows = read("MAZE_ROWS")
            .map(|v| v as usize)
            .filter(|v| (1..=MAX_SIDE).contains(v))
            .unwrap_or(DEFAULT_ROWS);
        let cols = read("MAZE_COLS")
            .map(|v| v as usize)
            .filter(|v| (1..=MAX_SIDE).contains(v))
            .unwrap_or(DEFAULT_COLS);
        Self::new(rows, cols).with_seed(read("MAZE_SEED"))
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn default_matches_fixed_run() {
        let config = MazeConfig::default();
        assert_eq!((config.rows, config.cols), (15, 31));
        assert_eq!(config.start, Pos::new(2, 2));
        assert_eq!(config.end, Pos::new(28, 12));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn new_rounds_to_odd() {
        let config = MazeConfig::new(10, 20);
        assert_eq!((config.rows, config.cols), (11, 21));
        assert_eq!(config.end, Pos::new(18, 8));
    }

    #[test]
    fn env_overrides() {
        let config = MazeConfig::from_lookup(lookup(&[
            ("MAZE_ROWS", "8"),
            ("MAZE_COLS", " 9 "),
            ("MAZE_SEED", "1234"),
        ]));
        assert_eq!((config.rows, config.cols), (9, 9));
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn bad_env_values_fall_back() {
        let config = MazeConfig::from_lookup(lookup(&[
            ("MAZE_ROWS", "zero"),
            ("MAZE_COLS", "0"),
            ("MAZE_SEED", "-1"),
        ]));
        assert_eq!(config, MazeConfig::default());
    }

    #[test]
    fn oversized_env_sizes_fall_back() {
        let config = MazeConfig::from_lookup(lookup(&[
            ("MAZE_ROWS", "18446744073709551615"),
            ("MAZE_COLS", "18446744073709551614"),
        ]));
        assert_eq!(config, MazeConfig::default());
        assert!(crate::generate(&config).is_ok());

        let config = MazeConfig::from_lookup(lookup(&[("MAZE_COLS", "1001")]));
        assert_eq!(config.cols, MAX_SIDE);
    }
}
