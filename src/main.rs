use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_solver::Solver;

/// Find the shortest path through a maze file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze description: name, start line, end line, then comma-separated rows of P and W
    input: PathBuf,

    /// Write the solution here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the parsed maze to stderr before solving
    #[arg(long)]
    describe: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read maze file ({}).", args.input.display()))?;
    info!("read {} bytes from {}", raw.len(), args.input.display());

    let mut solver = Solver::new();
    let grid = solver.load(&raw)
        .with_context(|| format!("Invalid maze in {}.", args.input.display()))?;
    if args.describe {
        eprint!("{}", grid);
    }

    solver.solve()?;
    if let (Some(grid), Some(solution)) = (solver.grid(), solver.solution()) {
        if !solution.verify(grid) {
            panic!("PATH FOUND WAS INVALID, THIS IS LIKELY A BUG.");
        }
        if !solution.is_found() {
            eprintln!("No path could be found.");
        }
    }

    let summary = solver.render()?;
    match &args.output {
        Some(path) => {
            fs::write(path, &summary)
                .with_context(|| format!("Failed to write solution ({}).", path.display()))?;
            info!("wrote solution to {}", path.display());
        }
        None => print!("{}", summary),
    }

    Ok(())
}
