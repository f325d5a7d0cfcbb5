//! Terminal reader
//!
//! A crossterm front-end over the word set store: a library screen to
//! pick a set and a reading screen that flashes its words one at a time.

mod display;
mod input;
mod session;
mod style;
mod terminal;

use std::time::Instant;

pub use display::{focus_anchor, word_start_column};
pub use input::{translate_key, Action, KeyContext};
pub use session::{word_duration, Screen, Session, WPM_STEP};
pub use style::{Color, Palette, Style};
pub use terminal::{TermEvent, Terminal};

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Run the reader until the user quits
pub fn run<S: KeyValueStore>(terminal: &mut Terminal, session: &mut Session<S>) -> Result<()> {
    let mut dirty = true;

    while session.is_running() {
        if dirty {
            display::render(terminal, session)?;
            dirty = false;
        }

        let now = Instant::now();
        match terminal.next_event(session.poll_timeout(now))? {
            TermEvent::Key(event) => {
                if let Some(action) = translate_key(event, session.key_context()) {
                    tracing::trace!(?action, "key action");
                    session.handle(action, Instant::now());
                    dirty = true;
                }
            }
            TermEvent::Resize => dirty = true,
            TermEvent::Timeout => {}
        }

        if session.tick(Instant::now()) {
            dirty = true;
        }
    }

    Ok(())
}
