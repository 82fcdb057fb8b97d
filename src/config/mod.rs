use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::core::GameRules;
use crate::core::engine::{DEFAULT_INITIAL_REVEALS, DEFAULT_MAX_ATTEMPTS};
use crate::utils::{GameError, GameResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub max_attempts: u32,
    pub initial_reveals: usize,
    pub confirm_give_up: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: String,
    pub placeholder: char,
    pub animation_speed: AnimationSpeed,
    pub text_width: usize,
    pub show_event_log: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnimationSpeed {
    None,
    Slow,
    Medium,
    Fast,
}

// Every word in the built-in vocabulary has five letters.
const SHORTEST_WORD_LENGTH: usize = 5;

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                max_attempts: DEFAULT_MAX_ATTEMPTS,
                initial_reveals: DEFAULT_INITIAL_REVEALS,
                confirm_give_up: true,
            },
            ui: UiConfig {
                theme: "default".to_string(),
                placeholder: '_',
                animation_speed: AnimationSpeed::Medium,
                text_width: 60,
                show_event_log: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GameError::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| GameError::configuration(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GameError::configuration(format!("Failed to create config directory: {}", e)))?;
        }

        let toml_content = toml::to_string_pretty(self)
            .map_err(|e| GameError::configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, toml_content)
            .map_err(|e| GameError::configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> GameResult<()> {
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(GameError::configuration("Invalid logging level")),
        }

        if self.game.max_attempts == 0 {
            return Err(GameError::configuration("Max attempts must be greater than 0"));
        }
        if self.game.initial_reveals >= SHORTEST_WORD_LENGTH {
            return Err(GameError::configuration(format!(
                "Initial reveals must be less than {}",
                SHORTEST_WORD_LENGTH
            )));
        }
        if self.ui.text_width < 20 {
            return Err(GameError::configuration("Text width must be at least 20"));
        }
        if self.ui.placeholder.is_alphabetic() || self.ui.placeholder.is_whitespace() {
            return Err(GameError::configuration("Placeholder must not be a letter or whitespace"));
        }

        Ok(())
    }

    pub fn merge_with_cli(&mut self, cli_config: CliConfig) {
        if let Some(log_level) = cli_config.log_level {
            self.logging.level = log_level;
        }
        if cli_config.debug {
            self.logging.level = "debug".to_string();
        }
        if let Some(theme) = cli_config.theme {
            self.ui.theme = theme;
        }
        if let Some(max_attempts) = cli_config.max_attempts {
            self.game.max_attempts = max_attempts;
        }
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            max_attempts: self.game.max_attempts,
            initial_reveals: self.game.initial_reveals,
        }
    }

    pub fn get_animation_delay_ms(&self) -> u64 {
        match self.ui.animation_speed {
            AnimationSpeed::None => 0,
            AnimationSpeed::Slow => 900,
            AnimationSpeed::Medium => 500,
            AnimationSpeed::Fast => 200,
        }
    }
}

// Configuration that can be overridden by CLI arguments
#[derive(Debug, Default)]
pub struct CliConfig {
    pub log_level: Option<String>,
    pub debug: bool,
    pub theme: Option<String>,
    pub max_attempts: Option<u32>,
}
