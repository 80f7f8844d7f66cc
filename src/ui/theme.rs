use ratatui::style::Color;

use crate::game::Player;

/// Cosmetic preset for the terminal UI. Presets differ only in colours
/// and wording; the game underneath is the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub title: &'static str,
    pub player_one: (&'static str, Color),
    pub player_two: (&'static str, Color),
    pub empty: Color,
    pub accent: Color,
}

impl Theme {
    pub const NAMES: [&'static str; 3] = ["classic", "ocean", "contrast"];

    pub const CLASSIC: Theme = Theme {
        name: "classic",
        title: "Connect Four",
        player_one: ("Red", Color::Red),
        player_two: ("Yellow", Color::Yellow),
        empty: Color::DarkGray,
        accent: Color::Cyan,
    };

    pub const OCEAN: Theme = Theme {
        name: "ocean",
        title: "Connect Four \u{2013} Ocean",
        player_one: ("Blue", Color::LightBlue),
        player_two: ("Green", Color::LightGreen),
        empty: Color::Blue,
        accent: Color::White,
    };

    pub const CONTRAST: Theme = Theme {
        name: "contrast",
        title: "CONNECT FOUR",
        player_one: ("White", Color::White),
        player_two: ("Magenta", Color::Magenta),
        empty: Color::Gray,
        accent: Color::LightYellow,
    };

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Theme> {
        [Theme::CLASSIC, Theme::OCEAN, Theme::CONTRAST]
            .into_iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
    }

    pub fn label(&self, player: Player) -> &'static str {
        match player {
            Player::One => self.player_one.0,
            Player::Two => self.player_two.0,
        }
    }

    pub fn color(&self, player: Player) -> Color {
        match player {
            Player::One => self.player_one.1,
            Player::Two => self.player_two.1,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::CLASSIC
    }
}
