use jiraflow_core::config::{NamedColor, ThemeColor, ThemeConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Resolved colours plus the handful of styles every screen shares.
pub struct Theme {
    pub accent: Color,
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub muted: Color,
    pub border: Color,
    pub hint: Color,
    pub highlight_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            accent: resolve(config.accent),
            secondary: resolve(config.secondary),
            success: resolve(config.success),
            error: resolve(config.error),
            warning: resolve(config.warning),
            muted: resolve(config.muted),
            border: resolve(config.border),
            hint: resolve(config.hint),
            highlight_fg: resolve(config.highlight_fg),
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Bold text in `color`
    pub fn emphasis(&self, color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style of the highlighted row in a list, on a `bg` background
    pub fn selection(&self, bg: Color) -> Style {
        Style::default()
            .bg(bg)
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// A bordered box in the border colour
    pub fn panel<'a>(&self, title: impl Into<Line<'a>>) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(self.border))
    }

    /// `⠋ Loading...` with the spinner frame in the accent colour
    pub fn spinner_line<'a>(&self, frame: &str, label: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{frame} "), self.emphasis(self.accent)),
            Span::raw(label),
        ])
    }
}

fn resolve(color: ThemeColor) -> Color {
    let named = match color {
        ThemeColor::Rgb(r, g, b) => return Color::Rgb(r, g, b),
        ThemeColor::Named(named) => named,
    };
    match named {
        NamedColor::Black => Color::Black,
        NamedColor::Red => Color::Red,
        NamedColor::Green => Color::Green,
        NamedColor::Yellow => Color::Yellow,
        NamedColor::Blue => Color::Blue,
        NamedColor::Magenta => Color::Magenta,
        NamedColor::Cyan => Color::Cyan,
        NamedColor::White => Color::White,
        NamedColor::Gray => Color::Gray,
        NamedColor::DarkGray => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(
            [theme.accent, theme.secondary, theme.success, theme.error],
            [Color::Magenta, Color::Cyan, Color::Green, Color::Red]
        );
        assert_eq!(theme.muted, Color::DarkGray);
        assert_eq!(theme.hint, Color::Blue);
    }

    #[test]
    fn test_overrides_keep_other_defaults() {
        let config = ThemeConfig {
            accent: ThemeColor::Named(NamedColor::Blue),
            secondary: ThemeColor::Rgb(255, 0, 255),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.accent, Color::Blue);
        assert_eq!(theme.secondary, Color::Rgb(255, 0, 255));
        assert_eq!(theme.success, Color::Green);
    }

    #[test]
    fn test_selection_uses_highlight_fg() {
        let theme = Theme::default();
        let style = theme.selection(theme.accent);
        assert_eq!(style.bg, Some(Color::Magenta));
        assert_eq!(style.fg, Some(Color::Black));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_spinner_line() {
        let theme = Theme::default();
        let line = theme.spinner_line("⠋", "Loading branches...");
        assert_eq!(line.spans[0].content, "⠋ ");
        assert_eq!(line.spans[1].content, "Loading branches...");
    }
}
