//! Colors and styles for the reader screens

use crossterm::style::Color as TermColor;

use crate::theme::Theme;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    White,
    BrightBlack,
    BrightRed,
    BrightWhite,
}

impl From<Color> for TermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Default => TermColor::Reset,
            Color::Black => TermColor::Black,
            Color::Red => TermColor::DarkRed,
            Color::White => TermColor::Grey,
            Color::BrightBlack => TermColor::DarkGrey,
            Color::BrightRed => TermColor::Red,
            Color::BrightWhite => TermColor::White,
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Reverse video (swap fg/bg)
    pub reverse: bool,
}

impl Style {
    /// Create a style with foreground and background colors
    pub fn colors(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set reverse
    pub fn with_reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

/// The styles used on screen for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Ordinary text
    pub text: Style,
    /// The focus character of the word being read
    pub focus: Style,
    /// Hints, guides and counters
    pub dim: Style,
    /// Title bar and selected row
    pub bar: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => {
                let text = Style::colors(Color::Black, Color::BrightWhite);
                Self {
                    text,
                    focus: Style::colors(Color::Red, Color::BrightWhite).with_bold(),
                    dim: Style::colors(Color::BrightBlack, Color::BrightWhite),
                    bar: text.with_reverse(),
                }
            }
            Theme::Dark => {
                let text = Style::colors(Color::White, Color::Black);
                Self {
                    text,
                    focus: Style::colors(Color::BrightRed, Color::Black).with_bold(),
                    dim: Style::colors(Color::BrightBlack, Color::Black),
                    bar: text.with_reverse(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builders() {
        let style = Style::colors(Color::Red, Color::Black).with_bold();
        assert_eq!(style.fg, Color::Red);
        assert_eq!(style.bg, Color::Black);
        assert!(style.bold);
        assert!(!style.reverse);
    }

    #[test]
    fn test_palettes_share_background() {
        for theme in [Theme::Light, Theme::Dark] {
            let palette = Palette::for_theme(theme);
            assert_eq!(palette.text.bg, palette.focus.bg);
            assert_eq!(palette.text.bg, palette.dim.bg);
            assert!(palette.focus.bold);
            assert!(palette.bar.reverse);
        }
        assert_ne!(
            Palette::for_theme(Theme::Light).text,
            Palette::for_theme(Theme::Dark).text
        );
    }
}
