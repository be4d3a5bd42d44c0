use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use gj_solver::session::Session;
use gj_solver::sources::source_builder::GridSourceBuilder;

/// Solve a linear system given as an augmented matrix.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file with one equation per line; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Generate a random system with this many variables instead
    #[arg(short, long)]
    pub random: Option<usize>,

    /// Seed for the random system
    #[arg(short, long, requires = "random")]
    pub seed: Option<u64>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn run_solver(args: Args) -> Result<bool> {
    let mut source = GridSourceBuilder::new()
        .input(args.input)
        .random(args.random, args.seed)
        .build_appropriate_source()?;
    let mut session = Session::new(source.load().context("loading matrix")?);
    let outcome = session.solve().clone();
    if !outcome.is_solved() {
        eprintln!("{}", outcome.to_text());
        return Ok(false);
    }
    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            session.export(file)?;
            log::info!("wrote result to {}", path.display());
        }
        None => session.export(io::stdout().lock())?,
    }
    Ok(true)
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    match run_solver(args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("ran into solver error: {err:?}");
            process::exit(1)
        }
    }
}
