//! Palette and semantic styles for the forum screens.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub secondary: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub hot: Color,
    pub pinned: Color,
    pub liked: Color,
    pub success: Color,
    pub error: Color,
    pub highlight_bg: Color,
}

impl Theme {
    /// Look up a theme by its config name. Unknown names get the default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "mono" => Self::mono(),
            _ => Self::default(),
        }
    }

    fn mono() -> Self {
        Self {
            accent: Color::White,
            secondary: Color::Gray,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            hot: Color::White,
            pinned: Color::Gray,
            liked: Color::White,
            success: Color::White,
            error: Color::White,
            highlight_bg: Color::DarkGray,
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn selected(&self) -> Style {
        Style::default().bg(self.highlight_bg).add_modifier(Modifier::BOLD)
    }

    pub fn tab_active(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn badge_hot(&self) -> Style {
        Style::default().fg(self.hot).add_modifier(Modifier::BOLD)
    }

    pub fn badge_pinned(&self) -> Style {
        Style::default().fg(self.pinned)
    }

    pub fn badge_category(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn like(&self, is_liked: bool) -> Style {
        if is_liked {
            Style::default().fg(self.liked).add_modifier(Modifier::BOLD)
        } else {
            self.muted()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(139, 92, 246),
            secondary: Color::Rgb(14, 165, 233),
            text: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            hot: Color::Rgb(249, 115, 22),
            pinned: Color::Yellow,
            liked: Color::Rgb(239, 68, 68),
            success: Color::Green,
            error: Color::Red,
            highlight_bg: Color::Rgb(40, 42, 54),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("default"), Theme::default());
        assert_eq!(Theme::from_name("mono").accent, Color::White);
        assert_eq!(Theme::from_name("solarized"), Theme::default());
    }
}
