use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    DarkGray,
}

const NAMED_COLORS: &[(&str, NamedColor)] = &[
    ("black", NamedColor::Black),
    ("blue", NamedColor::Blue),
    ("cyan", NamedColor::Cyan),
    ("dark_gray", NamedColor::DarkGray),
    ("gray", NamedColor::Gray),
    ("green", NamedColor::Green),
    ("magenta", NamedColor::Magenta),
    ("red", NamedColor::Red),
    ("white", NamedColor::White),
    ("yellow", NamedColor::Yellow),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

impl ThemeColor {
    /// Accepts the names above (plus `grey`/`dark_grey`, any case) or `#rrggbb`.
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            return Some(Self::Rgb(channel(0)?, channel(2)?, channel(4)?));
        }
        let name = s.to_lowercase().replace("grey", "gray");
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, color)| Self::Named(*color))
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => {
                let name = NAMED_COLORS
                    .iter()
                    .find(|(_, color)| color == named)
                    .map_or("?", |(name, _)| *name);
                f.write_str(name)
            }
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl<'de> Deserialize<'de> for ThemeColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid color '{s}': expected a named color (black, red, green, yellow, blue, magenta, cyan, white, gray, dark_gray) or hex (#rrggbb)"
            ))
        })
    }
}

/// Colours for the wizard screens. Unset entries keep their defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Headers and the highlighted list row (default: "magenta").
    pub accent: ThemeColor,
    /// Generated branch name and search input (default: "cyan").
    pub secondary: ThemeColor,
    pub success: ThemeColor,
    pub error: ThemeColor,
    /// Lookup warnings (default: "yellow").
    pub warning: ThemeColor,
    pub muted: ThemeColor,
    pub border: ThemeColor,
    /// Footer key hints (default: "blue").
    pub hint: ThemeColor,
    pub highlight_fg: ThemeColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        use NamedColor::{Black, Blue, Cyan, DarkGray, Green, Magenta, Red, Yellow};
        Self {
            accent: ThemeColor::Named(Magenta),
            secondary: ThemeColor::Named(Cyan),
            success: ThemeColor::Named(Green),
            error: ThemeColor::Named(Red),
            warning: ThemeColor::Named(Yellow),
            muted: ThemeColor::Named(DarkGray),
            border: ThemeColor::Named(DarkGray),
            hint: ThemeColor::Named(Blue),
            highlight_fg: ThemeColor::Named(Black),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_color_parse() {
        assert_eq!(
            ThemeColor::parse("magenta"),
            Some(ThemeColor::Named(NamedColor::Magenta))
        );
        assert_eq!(ThemeColor::parse("RED"), Some(ThemeColor::Named(NamedColor::Red)));
        assert_eq!(ThemeColor::parse("grey"), Some(ThemeColor::Named(NamedColor::Gray)));
        assert_eq!(
            ThemeColor::parse("Dark_Grey"),
            Some(ThemeColor::Named(NamedColor::DarkGray))
        );
        assert_eq!(ThemeColor::parse("#ff8000"), Some(ThemeColor::Rgb(255, 128, 0)));
        assert_eq!(ThemeColor::parse("notacolor"), None);
        assert_eq!(ThemeColor::parse("#fff"), None);
        assert_eq!(ThemeColor::parse("#zzzzzz"), None);
        assert_eq!(ThemeColor::parse("#ééé"), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for color in [
            ThemeColor::Named(NamedColor::DarkGray),
            ThemeColor::Rgb(1, 2, 255),
        ] {
            assert_eq!(ThemeColor::parse(&color.to_string()), Some(color));
        }
    }

    #[test]
    fn test_partial_theme_keeps_defaults() {
        let theme: ThemeConfig = toml::from_str("accent = \"blue\"\nhint = \"#00ff00\"").unwrap();
        assert_eq!(theme.accent, ThemeColor::Named(NamedColor::Blue));
        assert_eq!(theme.hint, ThemeColor::Rgb(0, 255, 0));
        assert_eq!(theme.success, ThemeColor::Named(NamedColor::Green));
        assert_eq!(theme.muted, ThemeColor::Named(NamedColor::DarkGray));
    }

    #[test]
    fn test_invalid_theme_rejected() {
        let err = toml::from_str::<ThemeConfig>("accent = \"notacolor\"")
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid color"), "Error was: {err}");
        assert!(toml::from_str::<ThemeConfig>("title = \"blue\"").is_err());
    }
}
