use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use crate::core::GameState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: Uuid,
    pub event_type: GameEventType,
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventType {
    GameStarted,
    GuessSubmitted,
    GuessRejected,
    HintUsed,
    HintRejected,
    GameWon,
    GameLost,
}

impl GameEvent {
    pub fn new(event_type: GameEventType, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            data,
        }
    }

    // The secret word is only recorded once the game is over.
    pub fn game_started(state: &GameState) -> Self {
        let data = serde_json::json!({
            "game_id": state.id,
            "word_length": state.word_length(),
            "attempts": state.attempts_left,
            "masked_word": state.masked_word()
        });
        Self::new(GameEventType::GameStarted, data)
    }

    pub fn guess_submitted(guess: &str, newly_revealed: usize, attempts_left: u32) -> Self {
        let data = serde_json::json!({
            "guess": guess,
            "newly_revealed": newly_revealed,
            "attempts_left": attempts_left
        });
        Self::new(GameEventType::GuessSubmitted, data)
    }

    pub fn guess_rejected(guess: &str, reason: &str) -> Self {
        let data = serde_json::json!({
            "guess": guess,
            "reason": reason
        });
        Self::new(GameEventType::GuessRejected, data)
    }

    pub fn hint_used(position: usize, attempts_left: u32) -> Self {
        let data = serde_json::json!({
            "position": position,
            "attempts_left": attempts_left
        });
        Self::new(GameEventType::HintUsed, data)
    }

    pub fn hint_rejected(reason: &str) -> Self {
        let data = serde_json::json!({
            "reason": reason
        });
        Self::new(GameEventType::HintRejected, data)
    }

    pub fn game_won(state: &GameState) -> Self {
        let data = serde_json::json!({
            "game_id": state.id,
            "secret_word": state.secret_word,
            "attempts_left": state.attempts_left,
            "guesses": state.guesses.len(),
            "hint_used": state.hint_used
        });
        Self::new(GameEventType::GameWon, data)
    }

    pub fn game_lost(state: &GameState) -> Self {
        let data = serde_json::json!({
            "game_id": state.id,
            "secret_word": state.secret_word,
            "revealed": state.revealed_count(),
            "guesses": state.guesses.len(),
            "hint_used": state.hint_used
        });
        Self::new(GameEventType::GameLost, data)
    }
}

pub trait GameEventHandler {
    fn handle_event(&mut self, event: &GameEvent);
}

pub struct EventLogger {
    events: VecDeque<GameEvent>,
    max_events: usize,
}

impl EventLogger {
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::new(),
            max_events,
        }
    }

    pub fn get_events(&self) -> Vec<&GameEvent> {
        self.events.iter().collect()
    }

    pub fn get_events_by_type(&self, event_type: &GameEventType) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|event| &event.event_type == event_type)
            .collect()
    }

    /// Newest first.
    pub fn get_recent_events(&self, count: usize) -> Vec<&GameEvent> {
        self.events
            .iter()
            .rev()
            .take(count)
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn export_events(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.events)
    }

    pub fn get_event_count(&self) -> usize {
        self.events.len()
    }

    pub fn get_event_count_by_type(&self, event_type: &GameEventType) -> usize {
        self.events
            .iter()
            .filter(|event| &event.event_type == event_type)
            .count()
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(500)
    }
}

impl GameEventHandler for EventLogger {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.push_back(event.clone());

        while self.events.len() > self.max_events {
            self.events.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_started_hides_secret() {
        let state = GameState::new("apple", 5);
        let event = GameEvent::game_started(&state);

        assert_eq!(event.event_type, GameEventType::GameStarted);
        assert_eq!(event.data["word_length"], 5);
        assert_eq!(event.data["attempts"], 5);
        assert!(event.data.get("secret_word").is_none());
    }

    #[test]
    fn test_game_lost_reveals_secret() {
        let mut state = GameState::new("apple", 0);
        state.guesses.push("zzzzz".to_string());
        let event = GameEvent::game_lost(&state);

        assert_eq!(event.event_type, GameEventType::GameLost);
        assert_eq!(event.data["secret_word"], "apple");
        assert_eq!(event.data["guesses"], 1);
    }

    #[test]
    fn test_event_logger_drops_oldest() {
        let mut logger = EventLogger::new(3);

        for position in 0..4 {
            logger.handle_event(&GameEvent::hint_used(position, 4));
        }

        assert_eq!(logger.get_event_count(), 3);
        assert_eq!(logger.get_events()[0].data["position"], 1);
        assert_eq!(logger.get_recent_events(1)[0].data["position"], 3);
    }

    #[test]
    fn test_event_filtering() {
        let mut logger = EventLogger::default();

        logger.handle_event(&GameEvent::guess_submitted("zzzzz", 0, 4));
        logger.handle_event(&GameEvent::guess_rejected("zz", "Guess must be 5 letters."));
        logger.handle_event(&GameEvent::guess_submitted("apple", 3, 4));

        assert_eq!(logger.get_events_by_type(&GameEventType::GuessSubmitted).len(), 2);
        assert_eq!(logger.get_event_count_by_type(&GameEventType::GuessRejected), 1);
        assert_eq!(logger.get_event_count_by_type(&GameEventType::HintUsed), 0);

        let exported = logger.export_events().unwrap();
        assert!(exported.contains("GuessRejected"));

        logger.clear();
        assert_eq!(logger.get_event_count(), 0);
    }
}
