//! Reader state and timing
//!
//! Everything the terminal front-end does to the stores goes through
//! here, so it can be driven without a terminal.

use std::time::{Duration, Instant};

use super::input::{Action, KeyContext};
use crate::highlight::{highlight_token, is_space_char};
use crate::storage::KeyValueStore;
use crate::store::{WordSet, WordSetStore};
use crate::theme::{Theme, ThemeStore};

/// How much one Faster/Slower press changes the speed
pub const WPM_STEP: f64 = 10.0;

/// How long to wait for input while nothing is playing
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// List of word sets with a cursor
    Library { cursor: usize },
    /// The active set, one word at a time
    Reading,
}

/// How long a word stays on screen
///
/// One minute divided by the speed, stretched by `sentence_pause` when
/// the word ends a sentence.
pub fn word_duration(wpm: u32, word: &str, sentence_pause: f64) -> Duration {
    let base = Duration::from_millis(60_000 / u64::from(wpm.max(1)));
    let last_token = word
        .split(is_space_char)
        .rfind(|token| !token.is_empty())
        .unwrap_or("");
    let trailing = highlight_token(last_token).trailing;
    if trailing.contains(|ch: char| matches!(ch, '.' | '!' | '?')) {
        base.mul_f64(sentence_pause.max(1.0))
    } else {
        base
    }
}

/// Reader state on top of the two stores
pub struct Session<S> {
    store: WordSetStore<S>,
    themes: ThemeStore<S>,
    screen: Screen,
    playing: bool,
    next_word_at: Option<Instant>,
    sentence_pause: f64,
    running: bool,
    message: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
    /// Start on the library screen with the active set under the cursor
    pub fn new(store: WordSetStore<S>, themes: ThemeStore<S>, sentence_pause: f64) -> Self {
        let cursor = store
            .active_set_id()
            .and_then(|id| store.sets().iter().position(|set| set.id() == id))
            .unwrap_or(0);

        Self {
            store,
            themes,
            screen: Screen::Library { cursor },
            playing: false,
            next_word_at: None,
            sentence_pause,
            running: true,
            message: None,
        }
    }

    pub fn store(&self) -> &WordSetStore<S> {
        &self.store
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn theme(&self) -> Theme {
        self.themes.theme()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Key bindings in effect for the current screen
    pub fn key_context(&self) -> KeyContext {
        match self.screen {
            Screen::Library { .. } => KeyContext::Library,
            Screen::Reading => KeyContext::Reading,
        }
    }

    /// The set being read
    pub fn reading_set(&self) -> Option<&WordSet> {
        self.store.active_set()
    }

    /// How long the front-end may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.next_word_at {
            Some(at) if self.playing => at.saturating_duration_since(now),
            _ => IDLE_POLL,
        }
    }

    /// Apply a user action
    pub fn handle(&mut self, action: Action, now: Instant) {
        self.message = None;

        match action {
            Action::Quit => self.running = false,
            Action::ToggleTheme => {
                let theme = self.themes.toggle_theme();
                self.message = Some(format!("Theme: {theme}"));
            }
            _ => match self.screen {
                Screen::Library { cursor } => self.handle_library(action, cursor),
                Screen::Reading => self.handle_reading(action, now),
            },
        }
    }

    fn handle_library(&mut self, action: Action, cursor: usize) {
        let count = self.store.sets().len();
        let selected = self.store.sets().get(cursor).map(|set| set.id().to_string());

        match action {
            Action::Up => self.set_cursor(cursor.saturating_sub(1)),
            Action::Down => self.set_cursor(cursor + 1),
            Action::Open => {
                let Some(id) = selected else {
                    self.message = Some("No word sets; pass a file to import one".to_string());
                    return;
                };
                self.store.select_set(&id);
                self.screen = Screen::Reading;
                self.playing = false;
                self.next_word_at = None;
            }
            Action::Delete => {
                let Some(id) = selected else { return };
                let name = self.store.get(&id).map(|set| set.name().to_string());
                self.store.delete_set(&id);
                self.set_cursor(cursor.min(count.saturating_sub(2)));
                if let Some(name) = name {
                    self.message = Some(format!("Deleted {name}"));
                }
            }
            Action::ResetProgress => {
                if let Some(id) = selected {
                    self.store.clear_progress(&id);
                }
            }
            _ => {}
        }
    }

    fn set_cursor(&mut self, cursor: usize) {
        let max = self.store.sets().len().saturating_sub(1);
        self.screen = Screen::Library {
            cursor: cursor.min(max),
        };
    }

    fn handle_reading(&mut self, action: Action, now: Instant) {
        let Some(set) = self.store.active_set() else {
            self.leave_reading();
            return;
        };
        let id = set.id().to_string();
        let index = i64::try_from(set.current_index()).unwrap_or(i64::MAX);
        let wpm = f64::from(set.wpm());
        let empty = set.is_empty();

        match action {
            Action::TogglePlay => {
                if empty {
                    self.message = Some("This set has no words".to_string());
                    return;
                }
                self.playing = !self.playing;
                if self.playing {
                    self.schedule_next(now);
                }
            }
            Action::StepForward => {
                self.store.set_index(&id, index.saturating_add(1));
                self.schedule_next(now);
            }
            Action::StepBack => {
                self.store.set_index(&id, index - 1);
                self.schedule_next(now);
            }
            Action::Faster => self.store.set_wpm(&id, wpm + WPM_STEP),
            Action::Slower => self.store.set_wpm(&id, wpm - WPM_STEP),
            Action::Restart => {
                self.store.clear_progress(&id);
                self.schedule_next(now);
            }
            Action::Back => self.leave_reading(),
            _ => {}
        }
    }

    fn leave_reading(&mut self) {
        self.playing = false;
        self.next_word_at = None;
        let cursor = self
            .store
            .active_set_id()
            .and_then(|id| self.store.sets().iter().position(|set| set.id() == id))
            .unwrap_or(0);
        self.screen = Screen::Library { cursor };
    }

    fn schedule_next(&mut self, now: Instant) {
        self.next_word_at = self.store.active_set().and_then(|set| {
            set.current_word()
                .map(|word| now + word_duration(set.wpm(), word, self.sentence_pause))
        });
    }

    /// Advance playback if the current word's time is up
    ///
    /// Returns whether anything changed on screen.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing || self.screen != Screen::Reading {
            return false;
        }
        match self.next_word_at {
            Some(at) if now < at => return false,
            _ => {}
        }

        let Some(set) = self.store.active_set() else {
            self.leave_reading();
            return true;
        };

        if set.at_last_word() {
            self.playing = false;
            self.next_word_at = None;
            self.message = Some(format!("Finished {}", set.name()));
            return true;
        }

        let id = set.id().to_string();
        let next = i64::try_from(set.current_index() + 1).unwrap_or(i64::MAX);
        self.store.set_index(&id, next);
        self.schedule_next(now);
        true
    }
}
