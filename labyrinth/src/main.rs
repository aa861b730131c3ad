//! Labyrinth: walled-grid path finder.

use std::io::{self, Write};

use clap::Parser;

use labyrinth_lib::{Args, Config, Output, logging, render, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _logger = logging::init(&args.log_level)?;
    let config = Config::try_from(args)?;

    let (grid, seed) = run::load_grid(&config.source)?;
    let outcome = run::search(grid, seed)?;

    let mut stdout = io::stdout().lock();
    match config.output {
        Output::Json => {
            serde_json::to_writer_pretty(&mut stdout, &outcome)?;
            writeln!(stdout)?;
        }
        Output::Text { color } => {
            render::render_outcome(&mut stdout, &outcome, config.limit, color)?;
        }
    }
    Ok(())
}
