pub mod core;
pub mod words;
pub mod ui;
pub mod config;
pub mod utils;

pub use self::core::{GameEngine, GameRules, GameState, GameStatus};
pub use words::Vocabulary;
pub use ui::GameInterface;
pub use config::Config;

// Re-export commonly used types
pub type Result<T> = anyhow::Result<T>;

// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
