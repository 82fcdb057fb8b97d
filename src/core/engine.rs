use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::SeedableRng;
use crate::core::{GameState, GameStatus, GameEvent, GameEventHandler, EventLogger};
use crate::words::Vocabulary;
use crate::utils::{GameError, GameResult};
use tracing::{info, warn, debug};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_INITIAL_REVEALS: usize = 2;

pub const WIN_MESSAGE: &str = "Congratulations!";
pub const PARTIAL_MESSAGE: &str = "Some letters are correct! Keep going.";
pub const INCORRECT_MESSAGE: &str = "Incorrect! Try again.";
pub const HINT_MESSAGE: &str = "One letter has been revealed.";

pub fn loss_message(secret_word: &str) -> String {
    format!("Game Over! The word was '{}'.", secret_word)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub max_attempts: u32,
    pub initial_reveals: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_reveals: DEFAULT_INITIAL_REVEALS,
        }
    }
}

/// Owns the current game and applies every state transition to it.
///
/// A game is always present: construction starts the first one, and
/// `start_game` replaces it. Gameplay rejections never surface as errors,
/// they end up in the state's message.
pub struct GameEngine {
    vocabulary: Vocabulary,
    rules: GameRules,
    rng: StdRng,
    game_state: GameState,
    event_logger: EventLogger,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_rng(Vocabulary::default(), GameRules::default(), StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Vocabulary::default(), GameRules::default(), StdRng::seed_from_u64(seed))
    }

    pub fn with_vocabulary(vocabulary: Vocabulary, rules: GameRules) -> Self {
        Self::with_rng(vocabulary, rules, StdRng::from_entropy())
    }

    pub fn with_rng(vocabulary: Vocabulary, rules: GameRules, rng: StdRng) -> Self {
        let mut engine = Self {
            vocabulary,
            rules,
            rng,
            game_state: GameState::new(String::new(), rules.max_attempts),
            event_logger: EventLogger::default(),
        };
        engine.start_game();
        engine
    }

    /// Discards the current game and starts a new one with a random word.
    pub fn start_game(&mut self) -> &GameState {
        let word = self.vocabulary.choose(&mut self.rng).to_string();
        self.begin(word)
    }

    /// Starts a game with a caller-chosen secret word.
    pub fn start_game_with_word(&mut self, word: &str) -> GameResult<&GameState> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(GameError::invalid_word(word));
        }

        Ok(self.begin(word))
    }

    /// Replaces the current game with a previously captured state.
    ///
    /// The secret word is lowercased on load. States that could not have
    /// been produced under the engine's rules are rejected.
    pub fn load_game(&mut self, mut game_state: GameState) -> GameResult<&GameState> {
        game_state.secret_word = game_state.secret_word.to_lowercase();

        if game_state.secret_word.is_empty() {
            return Err(GameError::invalid_word(game_state.secret_word));
        }
        if game_state.reveal_mask.len() != game_state.secret_word.chars().count() {
            return Err(GameError::invalid_snapshot(format!(
                "mask covers {} positions, word has {}",
                game_state.reveal_mask.len(),
                game_state.secret_word.chars().count()
            )));
        }
        if game_state.won != game_state.reveal_mask.is_complete() {
            return Err(GameError::invalid_snapshot("won flag disagrees with the reveal mask"));
        }
        if game_state.attempts_left > self.rules.max_attempts {
            return Err(GameError::invalid_snapshot(format!(
                "{} attempts left exceeds the limit of {}",
                game_state.attempts_left, self.rules.max_attempts
            )));
        }
        if game_state.hint_used && game_state.attempts_left >= self.rules.max_attempts {
            return Err(GameError::invalid_snapshot("hint used without spending an attempt"));
        }

        info!("Loaded game {} ({})", game_state.id, game_state.status());
        self.game_state = game_state;
        Ok(&self.game_state)
    }

    fn begin(&mut self, word: String) -> &GameState {
        let mut state = GameState::new(word, self.rules.max_attempts);

        let length = state.word_length();
        let reveal_count = self.rules.initial_reveals.min(length);
        for position in index::sample(&mut self.rng, length, reveal_count).into_iter() {
            state.reveal_mask.reveal(position);
        }

        // Only reachable with words no longer than the initial reveal count.
        if state.reveal_mask.is_complete() {
            state.won = true;
            state.set_message(WIN_MESSAGE);
        }

        info!(
            "Started game {} with a {}-letter word ({} attempts)",
            state.id, length, state.attempts_left
        );
        debug!("Initial mask: {}", state.masked_word());

        self.event_logger.handle_event(&GameEvent::game_started(&state));
        self.game_state = state;
        &self.game_state
    }

    pub fn submit_guess(&mut self, guess: &str) -> &GameState {
        if self.game_state.is_terminal() {
            debug!("Ignoring guess '{}', game is already {}", guess, self.game_state.status());
            return &self.game_state;
        }

        let expected = self.game_state.word_length();
        if guess.chars().count() != expected {
            let rejection = GameError::invalid_guess_length(expected);
            let event = GameEvent::guess_rejected(guess, &rejection.to_string());
            self.reject(rejection, event);
            return &self.game_state;
        }

        let state = &mut self.game_state;
        let letters = state.letters();
        let mut has_correct_letters = false;
        let mut newly_revealed = 0;

        for (position, (guessed, secret)) in guess.chars().zip(letters).enumerate() {
            if guessed.to_lowercase().eq(std::iter::once(secret)) {
                has_correct_letters = true;
                if state.reveal_mask.reveal(position) {
                    newly_revealed += 1;
                }
            }
        }

        let normalized = guess.to_lowercase();
        state.guesses.push(normalized.clone());
        debug!("Guess '{}' revealed {} new letters: {}", normalized, newly_revealed, state.masked_word());

        if state.reveal_mask.is_complete() {
            state.won = true;
            state.set_message(WIN_MESSAGE);
        } else {
            state.attempts_left = state.attempts_left.saturating_sub(1);
            if state.attempts_left == 0 {
                let message = loss_message(&state.secret_word);
                state.set_message(message);
            } else if has_correct_letters {
                state.set_message(PARTIAL_MESSAGE);
            } else {
                state.set_message(INCORRECT_MESSAGE);
            }
        }

        let event = GameEvent::guess_submitted(&normalized, newly_revealed, state.attempts_left);
        self.event_logger.handle_event(&event);
        self.record_outcome();

        &self.game_state
    }

    pub fn request_hint(&mut self) -> &GameState {
        if self.game_state.is_terminal() || self.game_state.hint_used {
            let event = GameEvent::hint_rejected(if self.game_state.hint_used {
                "hint already used"
            } else {
                "game is over"
            });
            self.reject(GameError::HintUnavailable, event);
            return &self.game_state;
        }

        let hidden = self.game_state.reveal_mask.hidden_positions();
        let Some(&position) = hidden.choose(&mut self.rng) else {
            self.reject(GameError::HintUnavailable, GameEvent::hint_rejected("nothing left to reveal"));
            return &self.game_state;
        };

        let state = &mut self.game_state;
        state.attempts_left = state.attempts_left.saturating_sub(1);
        state.hint_used = true;
        state.reveal_mask.reveal(position);
        state.set_message(HINT_MESSAGE);

        debug!("Hint revealed position {}: {}", position, state.masked_word());

        if state.reveal_mask.is_complete() {
            state.won = true;
            state.set_message(WIN_MESSAGE);
        } else if state.attempts_left == 0 {
            let message = loss_message(&state.secret_word);
            state.set_message(message);
        }

        let event = GameEvent::hint_used(position, state.attempts_left);
        self.event_logger.handle_event(&event);
        self.record_outcome();

        &self.game_state
    }

    fn reject(&mut self, rejection: GameError, event: GameEvent) {
        warn!("Rejected: {}", rejection);
        self.game_state.set_message(rejection.to_string());
        self.event_logger.handle_event(&event);
    }

    fn record_outcome(&mut self) {
        let event = match self.game_state.status() {
            GameStatus::Won => {
                info!("Game {} won with {} attempts left", self.game_state.id, self.game_state.attempts_left);
                GameEvent::game_won(&self.game_state)
            }
            GameStatus::Lost => {
                info!("Game {} lost, the word was '{}'", self.game_state.id, self.game_state.secret_word);
                GameEvent::game_lost(&self.game_state)
            }
            GameStatus::InProgress => return,
        };
        self.event_logger.handle_event(&event);
    }

    pub fn state(&self) -> &GameState {
        &self.game_state
    }

    pub fn snapshot(&self) -> GameState {
        self.game_state.clone()
    }

    pub fn masked_word(&self) -> String {
        self.game_state.masked_word()
    }

    pub fn attempts_left(&self) -> u32 {
        self.game_state.attempts_left
    }

    pub fn hint_used(&self) -> bool {
        self.game_state.hint_used
    }

    pub fn won(&self) -> bool {
        self.game_state.won
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.status()
    }

    pub fn message(&self) -> &str {
        &self.game_state.last_message
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn event_history(&self) -> Vec<GameEvent> {
        self.event_logger.get_events().into_iter().cloned().collect()
    }

    pub fn recent_events(&self, count: usize) -> Vec<GameEvent> {
        self.event_logger.get_recent_events(count).into_iter().cloned().collect()
    }

    pub fn export_events(&self) -> GameResult<String> {
        Ok(self.event_logger.export_events()?)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
