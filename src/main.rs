use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use word_snake::game::GameConfig;
use word_snake::modes::{PlayConfig, PlayMode};
use word_snake::words::{DEFAULT_INDEX_FILE, DEFAULT_LISTS_DIR};

#[derive(Parser)]
#[command(name = "word_snake")]
#[command(version, about = "Snake game for practicing vocabulary")]
struct Cli {
    /// Directory containing the word lists and their index
    #[arg(long, default_value = DEFAULT_LISTS_DIR)]
    lists_dir: PathBuf,

    /// Index file name inside the lists directory
    #[arg(long, default_value = DEFAULT_INDEX_FILE)]
    index: String,

    /// Word list id to play; repeat to combine lists. Skips the list picker.
    #[arg(long = "list")]
    lists: Vec<String>,

    /// Board size in tiles
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(5..=60))]
    tiles: u16,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Maximum log level
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn init_logging(path: &Path, level: Level) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.log_level)?;
    }

    let config = PlayConfig {
        game: GameConfig::new(cli.tiles as usize),
        lists_dir: cli.lists_dir,
        index_file: cli.index,
        preselected: cli.lists,
    };

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    Ok(())
}
