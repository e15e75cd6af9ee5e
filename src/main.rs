use std::io;

use crossterm::tty::IsTty;
use log::{debug, error};
use maze_solver::{generate, solve_and_draw, MazeConfig, MazeError};

fn main() -> io::Result<()> {
    if std::env::var("MAZE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let config = MazeConfig::from_env();
    debug!("maze config: {:?}", config);

    let mut stdout = io::stdout();
    if let Err(e) = run(&mut stdout, &config) {
        error!("{e}");
        eprintln!("maze: {e}");
    }
    Ok(())
}

fn run(stdout: &mut io::Stdout, config: &MazeConfig) -> Result<(), MazeError> {
    let mut grid = generate(config)?;
    let colored = stdout.is_tty();
    solve_and_draw(stdout, &mut grid, config.start, config.end, colored)?;
    Ok(())
}
