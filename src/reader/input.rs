//! Key translation
//!
//! Maps crossterm key events to reader actions. The same key can mean
//! different things on the library and reading screens.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something the user asked the reader to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the library cursor up
    Up,
    /// Move the library cursor down
    Down,
    /// Start reading the set under the cursor
    Open,
    /// Delete the set under the cursor
    Delete,
    /// Rewind the set under the cursor to its first word
    ResetProgress,
    /// Start or stop automatic advance
    TogglePlay,
    /// Show the next word
    StepForward,
    /// Show the previous word
    StepBack,
    /// Raise the reading speed
    Faster,
    /// Lower the reading speed
    Slower,
    /// Rewind the set being read to its first word
    Restart,
    /// Leave the reading screen
    Back,
    ToggleTheme,
    Quit,
}

/// Which screen keys are being translated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Library,
    Reading,
}

/// Translate a crossterm KeyEvent to a reader action
pub fn translate_key(event: KeyEvent, context: KeyContext) -> Option<Action> {
    let KeyEvent {
        code, modifiers, kind, ..
    } = event;

    // Only process key press events, ignore release and repeat
    // (Windows reports all of them)
    if kind != KeyEventKind::Press {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('t') => return Some(Action::ToggleTheme),
        _ => {}
    }

    match context {
        KeyContext::Library => translate_library(code),
        KeyContext::Reading => translate_reading(code),
    }
}

fn translate_library(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Enter => Some(Action::Open),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::Delete),
        KeyCode::Char('r') => Some(Action::ResetProgress),
        _ => None,
    }
}

fn translate_reading(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(' ') => Some(Action::TogglePlay),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::StepForward),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::StepBack),
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Faster),
        KeyCode::Down | KeyCode::Char('-') => Some(Action::Slower),
        KeyCode::Char('0') | KeyCode::Home => Some(Action::Restart),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        _ => None,
    }
}
