use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_arcade::game::{GameConfig, GameMode};
use snake_arcade::metrics::{JsonFileStore, MemoryStore, ScoreStore, ScoreTracker};
use snake_arcade::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake-arcade")]
#[command(version, about = "Terminal snake arcade game")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "classic")]
    mode: Mode,

    /// Grid width in tiles
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height in tiles
    #[arg(long, default_value = "20")]
    height: usize,

    /// Where high score and games-played counters are kept
    #[arg(long, default_value = "snake_scores.json")]
    scores_file: PathBuf,

    /// Keep scores in memory only, do not touch the scores file
    #[arg(long)]
    no_persist: bool,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Standard pace
    Classic,
    /// Faster base pace
    Speed,
    /// Slower base pace
    Wall,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Classic => GameMode::Classic,
            Mode::Speed => GameMode::Speed,
            Mode::Wall => GameMode::Wall,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height);

    let store: Box<dyn ScoreStore> = if cli.no_persist {
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::open(&cli.scores_file)?)
    };
    let tracker = ScoreTracker::load(store)?;

    let mut session = HumanMode::new(config, cli.mode.into(), tracker);
    session.run().await?;

    Ok(())
}
