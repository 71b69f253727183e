use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use wasteland_core::{Board, Traversal};

mod config_file;
mod render;
mod seed;
mod shell;

use config_file::RunConfigFile;
use render::MAX_RENDERED_SIZE;
use seed::generate_runtime_seed;
use shell::Shell;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board seed. A fresh one is drawn when omitted.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Side length of the square board.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(2..=MAX_RENDERED_SIZE as i64))]
    size: u16,
    /// Path to a TOML file overriding generation and traversal ratios
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Player name; prompted for when omitted
    #[arg(short, long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RunConfigFile::load(path)?,
        None => RunConfigFile::default(),
    };
    let seed = args.seed.unwrap_or_else(generate_runtime_seed);
    let size = usize::from(args.size);

    let board = Board::build(size, seed, &config.generation)
        .with_context(|| format!("Failed to generate a {size}x{size} board from seed {seed}"))?;
    info!("board seed {seed}, snapshot 0x{:016x}", board.snapshot_hash());
    println!("Seed: {seed}");
    let mut traversal =
        Traversal::with_config(board, config.traversal).context("Invalid traversal config")?;

    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock());
    let name = match args.name {
        Some(name) => name,
        None => shell.prompt_name()?,
    };
    shell.play(&name, &mut traversal)?;
    Ok(())
}
