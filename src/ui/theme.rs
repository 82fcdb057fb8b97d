use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: HashMap<String, ColorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub foreground: Option<String>,
    pub style: Vec<String>,
}

impl ColorConfig {
    fn new(foreground: &str, style: &[&str]) -> Self {
        Self {
            foreground: Some(foreground.to_string()),
            style: style.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: "default".to_string(),
        };

        manager.load_default_themes();
        manager
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            true
        } else {
            false
        }
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme
    }

    /// Looks the style up in the current theme, falling back to the
    /// `default` theme's entry when the current one leaves it out.
    fn style_config(&self, style_name: &str) -> Option<&ColorConfig> {
        self.themes
            .get(&self.current_theme)
            .and_then(|theme| theme.colors.get(style_name))
            .or_else(|| self.themes.get("default").and_then(|theme| theme.colors.get(style_name)))
    }

    pub fn apply_style(&self, text: &str, style_name: &str) -> String {
        let Some(color_config) = self.style_config(style_name) else {
            return text.to_string();
        };

        let mut styled = text.normal();

        if let Some(color) = color_config.foreground.as_deref().and_then(parse_color) {
            styled = styled.color(color);
        }

        for style in &color_config.style {
            styled = match style.as_str() {
                "bold" => styled.bold(),
                "italic" => styled.italic(),
                "underline" => styled.underline(),
                "dimmed" => styled.dimmed(),
                _ => styled,
            };
        }

        styled.to_string()
    }

    pub fn list_themes(&self) -> Vec<String> {
        let mut themes: Vec<String> = self.themes.keys().cloned().collect();
        themes.sort();
        themes
    }

    fn load_default_themes(&mut self) {
        let default_colors = [
            ("title", ColorConfig::new("cyan", &["bold"])),
            ("board", ColorConfig::new("white", &["bold"])),
            ("board_won", ColorConfig::new("green", &["bold"])),
            ("board_lost", ColorConfig::new("red", &["bold"])),
            ("attempts_high", ColorConfig::new("green", &["bold"])),
            ("attempts_medium", ColorConfig::new("yellow", &["bold"])),
            ("attempts_low", ColorConfig::new("red", &["bold"])),
            ("hint", ColorConfig::new("yellow", &[])),
            ("error", ColorConfig::new("red", &["bold"])),
            ("success", ColorConfig::new("green", &["bold"])),
            ("warning", ColorConfig::new("yellow", &["bold"])),
            ("info", ColorConfig::new("blue", &[])),
            ("separator", ColorConfig::new("bright_black", &["dimmed"])),
        ];
        self.insert_theme("default", &default_colors);

        let dark_colors = [
            ("title", ColorConfig::new("bright_cyan", &["bold"])),
            ("board", ColorConfig::new("bright_white", &["bold"])),
            ("board_won", ColorConfig::new("bright_green", &["bold"])),
            ("board_lost", ColorConfig::new("bright_red", &["bold"])),
            ("attempts_high", ColorConfig::new("bright_green", &["bold"])),
            ("attempts_medium", ColorConfig::new("bright_yellow", &["bold"])),
            ("attempts_low", ColorConfig::new("bright_red", &["bold"])),
            ("hint", ColorConfig::new("bright_yellow", &["italic"])),
            ("error", ColorConfig::new("bright_red", &["bold"])),
            ("success", ColorConfig::new("bright_green", &["bold"])),
            ("info", ColorConfig::new("bright_blue", &[])),
        ];
        self.insert_theme("dark", &dark_colors);

        let light_colors = [
            ("title", ColorConfig::new("blue", &["bold"])),
            ("board", ColorConfig::new("black", &["bold"])),
            ("board_won", ColorConfig::new("green", &["bold", "underline"])),
            ("board_lost", ColorConfig::new("magenta", &["bold"])),
            ("info", ColorConfig::new("magenta", &[])),
        ];
        self.insert_theme("light", &light_colors);
    }

    fn insert_theme(&mut self, name: &str, colors: &[(&str, ColorConfig)]) {
        let colors = colors
            .iter()
            .map(|(style, config)| (style.to_string(), config.clone()))
            .collect();

        self.themes.insert(name.to_string(), Theme {
            name: name.to_string(),
            colors,
        });
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(color_name: &str) -> Option<Color> {
    match color_name.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "bright_black" => Some(Color::BrightBlack),
        "bright_red" => Some(Color::BrightRed),
        "bright_green" => Some(Color::BrightGreen),
        "bright_yellow" => Some(Color::BrightYellow),
        "bright_blue" => Some(Color::BrightBlue),
        "bright_magenta" => Some(Color::BrightMagenta),
        "bright_cyan" => Some(Color::BrightCyan),
        "bright_white" => Some(Color::BrightWhite),
        _ => None,
    }
}
