use console::Term;
use std::io::{self, Write};
use crate::ui::ThemeManager;
use crate::core::{GameEvent, GameEventType, GameState, GameStatus, SessionStatistics};

pub struct Display {
    term: Term,
    theme_manager: ThemeManager,
    text_width: usize,
    placeholder: char,
}

impl Display {
    pub fn new(theme_manager: ThemeManager, text_width: usize, placeholder: char) -> io::Result<Self> {
        Ok(Self {
            term: Term::stdout(),
            theme_manager,
            text_width,
            placeholder,
        })
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        self.term.clear_screen()
    }

    pub fn show_title(&self, title: &str) -> io::Result<()> {
        let styled_title = self.theme_manager.apply_style(title, "title");

        let border = "═".repeat(self.text_width);
        let styled_border = self.theme_manager.apply_style(&border, "separator");

        writeln!(io::stdout(), "{}", styled_title)?;
        writeln!(io::stdout(), "{}", styled_border)?;
        writeln!(io::stdout())?;

        Ok(())
    }

    pub fn show_board(&self, state: &GameState) -> io::Result<()> {
        let board_style = match state.status() {
            GameStatus::InProgress => "board",
            GameStatus::Won => "board_won",
            GameStatus::Lost => "board_lost",
        };

        writeln!(io::stdout(), "Guess the word:")?;
        let board = self.center(&state.masked_word_with(self.placeholder));
        writeln!(io::stdout(), "{}", self.theme_manager.apply_style(&board, board_style))?;
        writeln!(io::stdout())?;

        Ok(())
    }

    pub fn show_attempts(&self, state: &GameState, max_attempts: u32) -> io::Result<()> {
        let bar = self.create_attempts_bar(state.attempts_left, max_attempts);
        let style = self.get_attempts_style(state.attempts_left, max_attempts);
        let styled_bar = self.theme_manager.apply_style(&bar, style);

        writeln!(io::stdout(), "Attempts left: {} {}", styled_bar, state.attempts_left)?;

        let hint_text = if state.hint_used {
            "💡 Hint used"
        } else {
            "💡 Hint available (costs one attempt)"
        };
        writeln!(io::stdout(), "{}", self.theme_manager.apply_style(hint_text, "hint"))?;

        if !state.guesses.is_empty() {
            let guesses = format!("Guesses: {}", state.guesses.join(", "));
            writeln!(io::stdout(), "{}", self.theme_manager.apply_style(&guesses, "info"))?;
        }
        writeln!(io::stdout())?;

        Ok(())
    }

    pub fn show_game_message(&self, state: &GameState) -> io::Result<()> {
        if state.last_message.is_empty() {
            return Ok(());
        }

        match state.status() {
            GameStatus::Won => self.show_success(&state.last_message),
            GameStatus::Lost => self.show_error(&state.last_message),
            GameStatus::InProgress => self.show_message(&state.last_message, "warning"),
        }
    }

    pub fn show_outcome(&self, state: &GameState) -> io::Result<()> {
        self.show_separator()?;
        match state.status() {
            GameStatus::Won => {
                self.show_success(&format!(
                    "🎉 You found '{}' with {} attempts to spare!",
                    state.secret_word, state.attempts_left
                ))?;
            }
            GameStatus::Lost => {
                self.show_error(&format!("😢 Out of attempts. The word was '{}'.", state.secret_word))?;
            }
            GameStatus::InProgress => {}
        }
        self.show_message(&format!("Time: {}", state.get_elapsed_formatted()), "info")?;
        self.show_separator()
    }

    pub fn show_statistics(&self, stats: &SessionStatistics) -> io::Result<()> {
        self.show_message("📊 Session Statistics", "title")?;
        let separator = "═".repeat(self.text_width);
        self.show_message(&separator, "separator")?;

        self.show_message(&format!("Games Played: {}", stats.games_played), "info")?;
        self.show_message(&format!("Won: {} | Lost: {}", stats.games_won, stats.games_lost), "info")?;
        self.show_message(&format!("Win Rate: {:.1}%", stats.win_rate()), "info")?;
        self.show_message(&format!("Current Streak: {} (best: {})", stats.current_streak, stats.best_streak), "info")?;
        self.show_message(&format!("Hints Used: {}", stats.hints_used), "info")?;
        self.show_message(&format!("Average Guesses: {:.1}", stats.average_guesses()), "info")?;

        if !stats.wins_by_attempts_left.is_empty() {
            self.show_message("Wins by attempts left:", "info")?;
            for (attempts, wins) in stats.wins_by_attempts_left.iter().rev() {
                let bar = "█".repeat(*wins as usize);
                self.show_message(&format!("  {} │ {} {}", attempts, bar, wins), "success")?;
            }
        }

        self.show_message(&separator, "separator")
    }

    pub fn show_events(&self, events: &[GameEvent]) -> io::Result<()> {
        for event in events {
            let line = format!("  {} {}", event.timestamp.format("%H:%M:%S"), describe_event(event));
            self.show_message(&line, "separator")?;
        }
        Ok(())
    }

    pub fn show_message(&self, message: &str, style: &str) -> io::Result<()> {
        let styled_message = self.theme_manager.apply_style(message, style);
        writeln!(io::stdout(), "{}", styled_message)?;
        Ok(())
    }

    pub fn show_error(&self, error: &str) -> io::Result<()> {
        self.show_message(&format!("❌ {}", error), "error")
    }

    pub fn show_success(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("✅ {}", message), "success")
    }

    pub fn show_warning(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("⚠️ {}", message), "warning")
    }

    pub fn show_info(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("ℹ️ {}", message), "info")
    }

    pub fn show_separator(&self) -> io::Result<()> {
        let separator = "━".repeat(self.text_width);
        let styled = self.theme_manager.apply_style(&separator, "separator");
        writeln!(io::stdout(), "{}", styled)?;
        Ok(())
    }

    pub fn wait_for_enter(&self) -> io::Result<()> {
        let styled_prompt = self.theme_manager.apply_style("Press Enter to continue...", "info");
        print!("{}", styled_prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(())
    }

    fn center(&self, text: &str) -> String {
        let width = text.chars().count();
        if width >= self.text_width {
            return text.to_string();
        }
        let padding = (self.text_width - width) / 2;
        format!("{}{}", " ".repeat(padding), text)
    }

    fn create_attempts_bar(&self, attempts_left: u32, max_attempts: u32) -> String {
        let used = max_attempts.saturating_sub(attempts_left) as usize;
        let left = attempts_left.min(max_attempts) as usize;

        format!("{}{}", "●".repeat(left), "○".repeat(used))
    }

    fn get_attempts_style(&self, attempts_left: u32, max_attempts: u32) -> &'static str {
        let ratio = if max_attempts == 0 {
            0.0
        } else {
            attempts_left as f32 / max_attempts as f32
        };

        if ratio > 0.6 {
            "attempts_high"
        } else if ratio > 0.3 {
            "attempts_medium"
        } else {
            "attempts_low"
        }
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        self.theme_manager.set_theme(theme_name)
    }

    pub fn get_available_themes(&self) -> Vec<String> {
        self.theme_manager.list_themes()
    }
}

fn describe_event(event: &GameEvent) -> String {
    match event.event_type {
        GameEventType::GameStarted => format!("game started ({} letters)", event.data["word_length"]),
        GameEventType::GuessSubmitted => format!(
            "guessed {} (+{} letters)",
            event.data["guess"], event.data["newly_revealed"]
        ),
        GameEventType::GuessRejected => format!("rejected {}", event.data["guess"]),
        GameEventType::HintUsed => format!("hint revealed position {}", event.data["position"]),
        GameEventType::HintRejected => format!("hint refused: {}", event.data["reason"]),
        GameEventType::GameWon => "game won".to_string(),
        GameEventType::GameLost => format!("game lost, word was {}", event.data["secret_word"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> Display {
        Display::new(ThemeManager::new(), 20, '_').unwrap()
    }

    #[test]
    fn test_attempts_bar() {
        let display = display();

        assert_eq!(display.create_attempts_bar(5, 5), "●●●●●");
        assert_eq!(display.create_attempts_bar(2, 5), "●●○○○");
        assert_eq!(display.create_attempts_bar(0, 5), "○○○○○");
    }

    #[test]
    fn test_attempts_style() {
        let display = display();

        assert_eq!(display.get_attempts_style(5, 5), "attempts_high");
        assert_eq!(display.get_attempts_style(2, 5), "attempts_medium");
        assert_eq!(display.get_attempts_style(1, 5), "attempts_low");
        assert_eq!(display.get_attempts_style(0, 0), "attempts_low");
    }

    #[test]
    fn test_center() {
        let display = display();

        assert_eq!(display.center("a _ _ l _"), "     a _ _ l _");
        let long = "x".repeat(30);
        assert_eq!(display.center(&long), long);
    }

    #[test]
    fn test_describe_event() {
        let event = GameEvent::guess_submitted("zpzzz", 1, 4);
        assert_eq!(describe_event(&event), "guessed \"zpzzz\" (+1 letters)");

        let event = GameEvent::hint_used(2, 3);
        assert_eq!(describe_event(&event), "hint revealed position 2");
    }
}
