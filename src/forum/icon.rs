use serde::Serialize;

/// Icons the screens can draw. Categories refer to theirs by name, so
/// [`Icon::from_name`] maps those names onto the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    Newspaper,
    Code2,
    Palette,
    GraduationCap,
    MessageSquare,
    MessageCircle,
    Grid3x3,
    Flame,
    Sparkles,
    TrendingUp,
    Pin,
    Eye,
    Heart,
    Reply,
    Search,
    User,
    AlertCircle,
    ArrowLeft,
    Unknown,
}

impl Icon {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Newspaper" => Self::Newspaper,
            "Code2" => Self::Code2,
            "Palette" => Self::Palette,
            "GraduationCap" => Self::GraduationCap,
            "MessageSquare" => Self::MessageSquare,
            "MessageCircle" => Self::MessageCircle,
            "Grid3x3" => Self::Grid3x3,
            "Flame" => Self::Flame,
            "Sparkles" => Self::Sparkles,
            "TrendingUp" => Self::TrendingUp,
            "Pin" => Self::Pin,
            "Eye" => Self::Eye,
            "Heart" => Self::Heart,
            "Reply" => Self::Reply,
            "Search" => Self::Search,
            "User" => Self::User,
            "AlertCircle" => Self::AlertCircle,
            "ArrowLeft" => Self::ArrowLeft,
            _ => Self::Unknown,
        }
    }

    /// Single-cell glyph drawn in place of the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Newspaper => "≡",
            Self::Code2 => "λ",
            Self::Palette => "◐",
            Self::GraduationCap => "◆",
            Self::MessageSquare => "▤",
            Self::MessageCircle => "○",
            Self::Grid3x3 => "▦",
            Self::Flame => "▲",
            Self::Sparkles => "✦",
            Self::TrendingUp => "↗",
            Self::Pin => "•",
            Self::Eye => "◉",
            Self::Heart => "♥",
            Self::Reply => "↩",
            Self::Search => "/",
            Self::User => "@",
            Self::AlertCircle => "!",
            Self::ArrowLeft => "←",
            Self::Unknown => "?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_icon_names() {
        assert_eq!(Icon::from_name("Newspaper"), Icon::Newspaper);
        assert_eq!(Icon::from_name("Code2"), Icon::Code2);
        assert_eq!(Icon::from_name("Palette"), Icon::Palette);
        assert_eq!(Icon::from_name("GraduationCap"), Icon::GraduationCap);
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(Icon::from_name("Rocket"), Icon::Unknown);
        assert_eq!(Icon::from_name("newspaper"), Icon::Unknown);
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&Icon::GraduationCap).unwrap();
        assert_eq!(json, "\"GraduationCap\"");
    }
}
