use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::core::{GameState, GameStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStatistics {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub hints_used: u32,
    pub total_guesses: usize,
    /// Wins keyed by the attempts the player still had left.
    pub wins_by_attempts_left: BTreeMap<u32, u32>,
}

impl SessionStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game. Games still in progress are ignored and
    /// `false` is returned.
    pub fn record(&mut self, state: &GameState) -> bool {
        let status = state.status();
        if !status.is_terminal() {
            return false;
        }

        self.games_played += 1;
        self.total_guesses += state.guesses.len();
        if state.hint_used {
            self.hints_used += 1;
        }

        match status {
            GameStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                *self
                    .wins_by_attempts_left
                    .entry(state.attempts_left)
                    .or_insert(0) += 1;
            }
            GameStatus::Lost => {
                self.games_lost += 1;
                self.current_streak = 0;
            }
            GameStatus::InProgress => unreachable!(),
        }

        true
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }

    pub fn average_guesses(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_guesses as f64 / f64::from(self.games_played)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_game(won: bool, attempts_left: u32, hint_used: bool) -> GameState {
        let mut state = GameState::new("apple", attempts_left);
        state.won = won;
        state.hint_used = hint_used;
        state.guesses.push("apple".to_string());
        state
    }

    #[test]
    fn test_in_progress_game_not_recorded() {
        let mut stats = SessionStatistics::new();
        let state = GameState::new("apple", 5);

        assert!(!stats.record(&state));
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn test_streaks() {
        let mut stats = SessionStatistics::new();

        assert!(stats.record(&finished_game(true, 3, false)));
        assert!(stats.record(&finished_game(true, 4, true)));
        assert!(stats.record(&finished_game(false, 0, true)));
        assert!(stats.record(&finished_game(true, 3, false)));

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.games_lost, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.hints_used, 2);
        assert_eq!(stats.wins_by_attempts_left.get(&3), Some(&2));
        assert_eq!(stats.wins_by_attempts_left.get(&4), Some(&1));
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
        assert!((stats.average_guesses() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let mut stats = SessionStatistics::new();
        stats.record(&finished_game(true, 5, false));
        stats.reset();

        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.win_rate(), 0.0);
    }
}
