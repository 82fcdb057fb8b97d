use dialoguer::{Confirm, Input, Select};
use std::time::Duration;
use tokio::time::sleep;

use crate::config::Config;
use crate::core::{GameEngine, GameState, SessionStatistics};
use crate::ui::{Display, ThemeManager};
use crate::utils::{GameError, GameResult};
use tracing::{error, info, warn};

pub struct GameInterface {
    engine: GameEngine,
    display: Display,
    statistics: SessionStatistics,
    config: Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnAction {
    Guess,
    Hint,
    GiveUp,
}

impl GameInterface {
    pub fn new(config: Config, engine: GameEngine) -> GameResult<Self> {
        info!("Initializing game interface");

        let mut display = Display::new(ThemeManager::new(), config.ui.text_width, config.ui.placeholder)
            .map_err(|e| GameError::configuration(format!("Failed to create display: {}", e)))?;

        if !display.set_theme(&config.ui.theme) {
            warn!("Unknown theme '{}', using default", config.ui.theme);
        }

        Ok(Self {
            engine,
            display,
            statistics: SessionStatistics::new(),
            config,
        })
    }

    pub async fn run(&mut self) -> GameResult<()> {
        info!("Starting game interface");

        loop {
            match self.show_main_menu().await {
                Ok(should_continue) => {
                    if !should_continue {
                        break;
                    }
                }
                Err(e) => {
                    error!("Main menu error: {}", e);
                    self.display.show_error(&format!("An error occurred: {}", e)).ok();
                    self.display.wait_for_enter().ok();
                }
            }
        }

        self.display.show_message("Thanks for playing!", "success").ok();
        Ok(())
    }

    pub async fn show_main_menu(&mut self) -> GameResult<bool> {
        self.display.clear_screen().ok();
        self.show_game_title()?;

        let choices = vec![
            "🎮 New Game",
            "📊 Statistics",
            "🎨 Change Theme",
            "🚪 Exit",
        ];

        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&choices)
            .default(0)
            .interact()
            .map_err(|e| GameError::input(format!("Menu selection error: {}", e)))?;

        match selection {
            0 => {
                self.engine.start_game();
                self.play().await?;
            }
            1 => self.statistics_menu()?,
            2 => self.change_theme()?,
            3 => return Ok(false),
            _ => unreachable!(),
        }

        Ok(true)
    }

    fn show_game_title(&self) -> GameResult<()> {
        let title = r#"
╦ ╦┌─┐┬─┐┌┬┐  ╦═╗┌─┐┬  ┬┌─┐┌─┐┬
║║║│ │├┬┘ ││  ╠╦╝├┤ └┐┌┘├┤ ├─┤│
╚╩╝└─┘┴└──┴┘  ╩╚═└─┘ └┘ └─┘┴ ┴┴─┘
"#;

        self.display.show_title(title)?;
        self.display.show_message(&format!("Version {}", crate::VERSION), "info")?;
        println!();

        Ok(())
    }

    /// Plays a practice game with a fixed secret word.
    pub async fn play_word(&mut self, word: &str) -> GameResult<()> {
        self.engine.start_game_with_word(word)?;
        self.play().await
    }

    /// Plays the current game, then offers new games until the player
    /// declines or gives up.
    pub async fn play(&mut self) -> GameResult<()> {
        loop {
            let finished = self.game_loop().await?;
            if !finished {
                return Ok(());
            }

            self.statistics.record(self.engine.state());

            let again = Confirm::new()
                .with_prompt("Play again?")
                .default(true)
                .interact()
                .map_err(|e| GameError::input(format!("Play again confirmation error: {}", e)))?;

            if !again {
                return Ok(());
            }
            self.engine.start_game();
        }
    }

    /// Returns true once the game reached a terminal state, false if the
    /// player gave up.
    async fn game_loop(&mut self) -> GameResult<bool> {
        while !self.engine.state().is_terminal() {
            self.render()?;

            match self.choose_action()? {
                TurnAction::Guess => {
                    let guess = self.read_guess()?;
                    self.engine.submit_guess(&guess);
                }
                TurnAction::Hint => {
                    self.engine.request_hint();
                }
                TurnAction::GiveUp => {
                    if self.confirm_give_up()? {
                        info!("Player gave up game {}", self.engine.state().id);
                        return Ok(false);
                    }
                }
            }

            self.pause().await;
        }

        self.render()?;
        self.display.show_outcome(self.engine.state())?;
        Ok(true)
    }

    fn render(&self) -> GameResult<()> {
        let state: &GameState = self.engine.state();

        self.display.clear_screen().ok();
        self.show_game_title()?;
        self.display.show_board(state)?;
        self.display.show_attempts(state, self.engine.rules().max_attempts)?;
        self.display.show_game_message(state)?;

        if self.config.ui.show_event_log {
            self.display.show_events(&self.engine.recent_events(5))?;
        }
        println!();

        Ok(())
    }

    fn choose_action(&self) -> GameResult<TurnAction> {
        let mut actions = vec![(TurnAction::Guess, "✏️ Submit Guess")];
        if !self.engine.hint_used() {
            actions.push((TurnAction::Hint, "💡 Reveal A Character"));
        }
        actions.push((TurnAction::GiveUp, "🏳️ Give Up"));

        let labels: Vec<&str> = actions.iter().map(|(_, label)| *label).collect();
        let selection = Select::new()
            .with_prompt("Your move")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| GameError::input(format!("Action selection error: {}", e)))?;

        Ok(actions[selection].0)
    }

    fn read_guess(&self) -> GameResult<String> {
        let guess: String = Input::new()
            .with_prompt("Enter your guess")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GameError::input(format!("Guess input error: {}", e)))?;

        Ok(guess)
    }

    fn confirm_give_up(&self) -> GameResult<bool> {
        if !self.config.game.confirm_give_up {
            return Ok(true);
        }

        Confirm::new()
            .with_prompt("Give up this game and return to the menu?")
            .default(false)
            .interact()
            .map_err(|e| GameError::input(format!("Give up confirmation error: {}", e)))
    }

    async fn pause(&self) {
        let delay = self.config.get_animation_delay_ms();
        if delay > 0 {
            sleep(Duration::from_millis(delay)).await;
        }
    }

    fn statistics_menu(&mut self) -> GameResult<()> {
        self.display.clear_screen().ok();

        if self.statistics.games_played == 0 {
            self.display.show_info("No finished games yet this session.")?;
        } else {
            self.display.show_statistics(&self.statistics)?;
        }

        self.display.wait_for_enter()?;
        Ok(())
    }

    fn change_theme(&mut self) -> GameResult<()> {
        let themes = self.display.get_available_themes();

        let selection = Select::new()
            .with_prompt("Choose theme")
            .items(&themes)
            .interact()
            .map_err(|e| GameError::input(format!("Theme selection error: {}", e)))?;

        let selected_theme = &themes[selection];

        if self.display.set_theme(selected_theme) {
            self.config.ui.theme = selected_theme.clone();
            self.display.show_success(&format!("Theme changed to '{}'", selected_theme))?;
        } else {
            self.display.show_warning(&format!("Theme '{}' is not available", selected_theme))?;
        }

        self.display.wait_for_enter()?;
        Ok(())
    }

    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }
}
