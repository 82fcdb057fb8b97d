use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use std::fmt;

pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won => write!(f, "Won"),
            GameStatus::Lost => write!(f, "Lost"),
        }
    }
}

/// Per-position visibility of the secret word. Positions only ever go from
/// hidden to revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealMask {
    revealed: Vec<bool>,
}

impl RevealMask {
    pub fn hidden(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Returns true if the position was hidden before the call.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&revealed| revealed).count()
    }

    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|&revealed| revealed)
    }

    pub fn hidden_positions(&self) -> Vec<usize> {
        self.revealed
            .iter()
            .enumerate()
            .filter(|(_, revealed)| !**revealed)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn revealed_positions(&self) -> Vec<usize> {
        self.revealed
            .iter()
            .enumerate()
            .filter(|(_, revealed)| **revealed)
            .map(|(index, _)| index)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub id: Uuid,
    pub secret_word: String,
    pub reveal_mask: RevealMask,
    pub attempts_left: u32,
    pub hint_used: bool,
    pub won: bool,
    pub last_message: String,
    pub guesses: Vec<String>,
    pub started_at: DateTime<Utc>,
}

impl GameState {
    /// A fresh game with every position hidden.
    pub fn new<S: Into<String>>(secret_word: S, attempts: u32) -> Self {
        let secret_word = secret_word.into().to_lowercase();
        let reveal_mask = RevealMask::hidden(secret_word.chars().count());

        Self {
            id: Uuid::new_v4(),
            secret_word,
            reveal_mask,
            attempts_left: attempts,
            hint_used: false,
            won: false,
            last_message: String::new(),
            guesses: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn word_length(&self) -> usize {
        self.reveal_mask.len()
    }

    pub fn letters(&self) -> Vec<char> {
        self.secret_word.chars().collect()
    }

    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.attempts_left == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn revealed_count(&self) -> usize {
        self.reveal_mask.revealed_count()
    }

    /// Revealed letters and placeholders separated by spaces, e.g. `a _ _ l _`.
    pub fn masked_word(&self) -> String {
        self.masked_word_with(PLACEHOLDER)
    }

    pub fn masked_word_with(&self, placeholder: char) -> String {
        self.visible_letters(placeholder)
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The visible word without separators.
    pub fn visible_word(&self) -> String {
        self.visible_letters(PLACEHOLDER).into_iter().collect()
    }

    fn visible_letters(&self, placeholder: char) -> Vec<char> {
        self.secret_word
            .chars()
            .enumerate()
            .map(|(index, letter)| {
                if self.reveal_mask.is_revealed(index) {
                    letter
                } else {
                    placeholder
                }
            })
            .collect()
    }

    pub fn set_message<S: Into<String>>(&mut self, message: S) {
        self.last_message = message.into();
    }

    pub fn elapsed_seconds(&self) -> i64 {
        Utc::now().signed_duration_since(self.started_at).num_seconds()
    }

    pub fn get_elapsed_formatted(&self) -> String {
        let elapsed = self.elapsed_seconds();
        let minutes = elapsed / 60;
        let seconds = elapsed % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_game_state_creation() {
        let game_state = GameState::new("Apple", 5);

        assert_eq!(game_state.secret_word, "apple");
        assert_eq!(game_state.word_length(), 5);
        assert_eq!(game_state.reveal_mask.len(), game_state.secret_word.len());
        assert_eq!(game_state.attempts_left, 5);
        assert_eq!(game_state.revealed_count(), 0);
        assert!(!game_state.hint_used);
        assert!(!game_state.won);
        assert!(game_state.last_message.is_empty());
        assert_eq!(game_state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_masked_word() {
        let mut game_state = GameState::new("apple", 5);
        assert_eq!(game_state.masked_word(), "_ _ _ _ _");

        game_state.reveal_mask.reveal(0);
        game_state.reveal_mask.reveal(3);
        assert_eq!(game_state.masked_word(), "a _ _ l _");
        assert_eq!(game_state.masked_word_with('*'), "a * * l *");
        assert_eq!(game_state.visible_word(), "a__l_");
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut mask = RevealMask::hidden(3);

        assert!(mask.reveal(1));
        assert!(!mask.reveal(1));
        assert!(!mask.reveal(7));
        assert_eq!(mask.revealed_count(), 1);
        assert_eq!(mask.hidden_positions(), vec![0, 2]);
        assert_eq!(mask.revealed_positions(), vec![1]);
    }

    #[test]
    fn test_status_transitions() {
        let mut game_state = GameState::new("apple", 1);
        assert!(!game_state.is_terminal());

        game_state.attempts_left = 0;
        assert_eq!(game_state.status(), GameStatus::Lost);

        game_state.won = true;
        assert_eq!(game_state.status(), GameStatus::Won);
        assert!(game_state.is_terminal());
    }

    #[test]
    fn test_empty_mask_is_complete() {
        let mask = RevealMask::hidden(0);
        assert!(mask.is_empty());
        assert!(mask.is_complete());
    }
}
