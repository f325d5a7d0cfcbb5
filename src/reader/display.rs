//! Screen rendering
//!
//! The reading screen keeps the focus character of every word on the
//! same column, with a guide mark above and below it, so the eye can
//! stay still while words change.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::session::{Screen, Session};
use super::style::Palette;
use super::terminal::Terminal;
use crate::error::Result;
use crate::highlight::{highlight_line, HighlightSegment};
use crate::storage::KeyValueStore;
use crate::store::WordSet;

const LIBRARY_HELP: &str = "Enter read  j/k move  d delete  r reset  t theme  q quit";
const READING_HELP: &str = "Space play/pause  Left/Right step  +/- speed  0 restart  t theme  Esc back";

/// Display column of the focus character within a highlighted line
///
/// Measured from the start of the line to the focus character of the
/// first token. `None` if the line has no tokens.
pub fn focus_anchor(segments: &[HighlightSegment]) -> Option<usize> {
    let mut width = 0;
    for segment in segments {
        match segment {
            HighlightSegment::Token(part) => return Some(width + part.focus_column()),
            HighlightSegment::Space(text) => width += text.width(),
        }
    }
    None
}

/// First column of a word so that its focus character lands on `center`
pub fn word_start_column(segments: &[HighlightSegment], center: usize) -> usize {
    center.saturating_sub(focus_anchor(segments).unwrap_or(0))
}

/// Draw the current screen
pub fn render<S: KeyValueStore>(terminal: &mut Terminal, session: &Session<S>) -> Result<()> {
    let palette = Palette::for_theme(session.theme());
    terminal.clear_screen(palette.text)?;

    match session.screen() {
        Screen::Library { cursor } => render_library(terminal, session, &palette, cursor)?,
        Screen::Reading => render_reading(terminal, session, &palette)?,
    }

    terminal.flush()
}

fn render_library<S: KeyValueStore>(
    terminal: &mut Terminal,
    session: &Session<S>,
    palette: &Palette,
    cursor: usize,
) -> Result<()> {
    let cols = usize::from(terminal.cols());
    let rows = terminal.rows();
    let store = session.store();
    let sets = store.sets();

    let title = format!(" rapid-recall: {} word sets", sets.len());
    render_bar(terminal, 0, &title, cols, palette)?;

    if sets.is_empty() {
        terminal.move_cursor(2, 1)?;
        terminal.write_styled("No word sets yet. Run `rapid-recall FILE` to import one.", palette.dim)?;
    }

    // Rows between the title bar and the message/help lines
    let list_rows = usize::from(rows.saturating_sub(4));
    let first = cursor.saturating_sub(list_rows.saturating_sub(1));
    for (offset, set) in sets.iter().enumerate().skip(first).take(list_rows) {
        let row = u16::try_from(offset - first + 2).unwrap_or(u16::MAX);
        let active = store.active_set_id() == Some(set.id());
        let line = truncate_to_width(&library_row(set, active), cols);
        let style = if offset == cursor { palette.bar } else { palette.text };

        terminal.move_cursor(row, 0)?;
        terminal.write_styled(&line, style)?;
    }

    render_footer(terminal, session, LIBRARY_HELP, cols, palette)
}

/// One line of the library listing
fn library_row(set: &WordSet, active: bool) -> String {
    let marker = if active { '*' } else { ' ' };
    let position = if set.is_empty() {
        "empty".to_string()
    } else {
        format!("{}/{}", set.current_index() + 1, set.len())
    };
    format!(
        " {} {}  ({} words, at {}, {} wpm)",
        marker,
        set.name(),
        set.len(),
        position,
        set.wpm()
    )
}

fn render_reading<S: KeyValueStore>(
    terminal: &mut Terminal,
    session: &Session<S>,
    palette: &Palette,
) -> Result<()> {
    let cols = usize::from(terminal.cols());
    let rows = terminal.rows();
    let Some(set) = session.reading_set() else {
        return render_footer(terminal, session, READING_HELP, cols, palette);
    };

    render_bar(terminal, 0, &format!(" {}", set.name()), cols, palette)?;

    let center = cols / 2;
    let word_row = rows / 2;

    match set.current_word() {
        Some(word) => {
            let center_col = u16::try_from(center).unwrap_or(u16::MAX);
            terminal.move_cursor(word_row.saturating_sub(1), center_col)?;
            terminal.write_styled("v", palette.dim)?;
            terminal.move_cursor(word_row.saturating_add(1), center_col)?;
            terminal.write_styled("^", palette.dim)?;
            render_word(terminal, word, word_row, center, cols, palette)?;
        }
        None => {
            let text = "(no words)";
            let col = center.saturating_sub(text.width() / 2);
            terminal.move_cursor(word_row, u16::try_from(col).unwrap_or(0))?;
            terminal.write_styled(text, palette.dim)?;
        }
    }

    let state = if session.is_playing() { "playing" } else { "paused" };
    let position = if set.is_empty() {
        "0/0".to_string()
    } else {
        format!("{}/{}", set.current_index() + 1, set.len())
    };
    let status = format!(" {}  {} wpm  {}", position, set.wpm(), state);
    terminal.move_cursor(word_row.saturating_add(3), 0)?;
    terminal.write_styled(&truncate_to_width(&status, cols), palette.dim)?;

    render_footer(terminal, session, READING_HELP, cols, palette)
}

/// Write a word with its focus character highlighted and on `center`
fn render_word(
    terminal: &mut Terminal,
    word: &str,
    row: u16,
    center: usize,
    cols: usize,
    palette: &Palette,
) -> Result<()> {
    let segments = highlight_line(word);
    let start = word_start_column(&segments, center);
    terminal.move_cursor(row, u16::try_from(start).unwrap_or(0))?;

    let mut room = cols.saturating_sub(start);
    let mut pieces = Vec::new();
    for segment in &segments {
        match segment {
            HighlightSegment::Token(part) => {
                pieces.push((part.leading.as_str(), palette.text));
                pieces.push((part.pre.as_str(), palette.text));
                pieces.push((part.focus.as_str(), palette.focus));
                pieces.push((part.post.as_str(), palette.text));
                pieces.push((part.trailing.as_str(), palette.text));
            }
            HighlightSegment::Space(text) => pieces.push((text.as_str(), palette.text)),
        }
    }

    for (text, style) in pieces {
        if room == 0 {
            break;
        }
        let clipped = truncate_to_width(text, room);
        room -= clipped.width();
        terminal.write_styled(&clipped, style)?;
    }
    Ok(())
}

fn render_bar(
    terminal: &mut Terminal,
    row: u16,
    text: &str,
    cols: usize,
    palette: &Palette,
) -> Result<()> {
    let text = truncate_to_width(text, cols);
    let padded = format!("{}{}", text, " ".repeat(cols.saturating_sub(text.width())));
    terminal.move_cursor(row, 0)?;
    terminal.write_styled(&padded, palette.bar)
}

/// Message line and key help at the bottom of the screen
fn render_footer<S: KeyValueStore>(
    terminal: &mut Terminal,
    session: &Session<S>,
    help: &str,
    cols: usize,
    palette: &Palette,
) -> Result<()> {
    let rows = terminal.rows();
    if let Some(message) = session.message() {
        terminal.move_cursor(rows.saturating_sub(2), 0)?;
        terminal.write_styled(&truncate_to_width(message, cols), palette.text)?;
    }
    terminal.move_cursor(rows.saturating_sub(1), 0)?;
    terminal.write_styled(&truncate_to_width(help, cols), palette.dim)?;
    terminal.clear_to_eol()
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_anchor() {
        assert_eq!(focus_anchor(&highlight_line("reading")), Some(2));
        assert_eq!(focus_anchor(&highlight_line("(hello)")), Some(2));
        assert_eq!(focus_anchor(&highlight_line("  a b")), Some(2));
        assert_eq!(focus_anchor(&highlight_line("   ")), None);
        assert_eq!(focus_anchor(&[]), None);
    }

    #[test]
    fn test_word_start_column() {
        let segments = highlight_line("characteristics");
        assert_eq!(word_start_column(&segments, 40), 36);
        // never left of the screen edge
        assert_eq!(word_start_column(&segments, 2), 0);
    }

    #[test]
    fn test_focus_lands_on_center() {
        for word in ["a", "to", "speed", "reading", "(quoted),", "ice cream"] {
            let segments = highlight_line(word);
            let start = word_start_column(&segments, 30);
            assert_eq!(start + focus_anchor(&segments).unwrap(), 30, "{word}");
        }
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hi", 10), "hi");
        assert_eq!(truncate_to_width("漢字", 3), "漢");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_library_row() {
        let mut store = crate::store::WordSetStore::new(crate::storage::MemoryStorage::new());
        let id = store.create_set("Vocab").unwrap().id().to_string();
        assert_eq!(
            library_row(store.get(&id).unwrap(), true),
            " * Vocab  (0 words, at empty, 100 wpm)"
        );

        store.import_words(&id, "a\nb\nc");
        store.set_index(&id, 1);
        assert_eq!(
            library_row(store.get(&id).unwrap(), false),
            "   Vocab  (3 words, at 2/3, 100 wpm)"
        );
    }
}
