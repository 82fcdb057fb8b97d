use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use word_reveal_game::config::CliConfig;
use word_reveal_game::{Config, GameEngine, GameInterface, Vocabulary, VERSION};
use tracing::{info, error};

#[derive(Parser)]
#[command(name = "word-reveal")]
#[command(about = "Guess the hidden word, one revealed letter at a time")]
#[command(version = VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Colour theme (default, dark, light)
    #[arg(short, long)]
    theme: Option<String>,

    /// Number of attempts per game
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Practice with a fixed secret word
    #[arg(short, long)]
    word: Option<String>,

    /// Seed for reproducible word and letter selection
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };

    config.merge_with_cli(CliConfig {
        log_level: cli.log_level.clone(),
        debug: cli.debug,
        theme: cli.theme.clone(),
        max_attempts: cli.max_attempts,
    });
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("word_reveal_game={},warn", config.logging.level))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Word Reveal v{}", VERSION);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let engine = GameEngine::with_rng(Vocabulary::default(), config.rules(), rng);

    let mut game_interface = GameInterface::new(config, engine)?;

    let outcome = match cli.word {
        Some(word) => {
            info!("Starting practice game");
            game_interface.play_word(&word).await
        }
        None => game_interface.run().await,
    };

    if let Err(e) = outcome {
        error!("Game error: {}", e);
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }

    info!("Game session ended");
    Ok(())
}
