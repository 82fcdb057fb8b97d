use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Guess must be {expected} letters.")]
    InvalidGuessLength { expected: usize },

    #[error("No more attempts or hints left.")]
    HintUnavailable,

    #[error("Vocabulary must contain at least one word")]
    EmptyVocabulary,

    #[error("Invalid secret word: '{word}'")]
    InvalidWord { word: String },

    #[error("Invalid saved game: {message}")]
    InvalidSnapshot { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Input error: {message}")]
    Input { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameError {
    pub fn invalid_guess_length(expected: usize) -> Self {
        Self::InvalidGuessLength { expected }
    }

    pub fn invalid_word<S: Into<String>>(word: S) -> Self {
        Self::InvalidWord { word: word.into() }
    }

    pub fn invalid_snapshot<S: Into<String>>(message: S) -> Self {
        Self::InvalidSnapshot {
            message: message.into(),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_length_message() {
        let error = GameError::invalid_guess_length(5);
        assert!(matches!(error, GameError::InvalidGuessLength { expected: 5 }));
        assert_eq!(error.to_string(), "Guess must be 5 letters.");
    }

    #[test]
    fn test_hint_unavailable_message() {
        let error = GameError::HintUnavailable;
        assert_eq!(error.to_string(), "No more attempts or hints left.");
    }

    #[test]
    fn test_configuration_error_message() {
        let error = GameError::configuration("bad value");
        assert_eq!(error.to_string(), "Configuration error: bad value");
    }

    #[test]
    fn test_invalid_snapshot_message() {
        let error = GameError::invalid_snapshot("hint used without spending an attempt");
        assert_eq!(error.to_string(), "Invalid saved game: hint used without spending an attempt");
    }
}
