//! Line segmentation
//!
//! A line is scanned once, left to right, and cut into maximal runs of
//! whitespace and non-whitespace. Whitespace runs are kept verbatim so
//! the segments always reassemble into the original line.

use super::token::{highlight_token, HighlightPart};

/// One piece of a highlighted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightSegment {
    /// A non-whitespace run, split around its focus character
    Token(HighlightPart),
    /// A whitespace run, exactly as it appeared
    Space(String),
}

impl HighlightSegment {
    /// Original text of this segment
    pub fn text(&self) -> String {
        match self {
            HighlightSegment::Token(part) => part.text(),
            HighlightSegment::Space(text) => text.clone(),
        }
    }

    /// The highlighted token, if this is not whitespace
    pub fn as_token(&self) -> Option<&HighlightPart> {
        match self {
            HighlightSegment::Token(part) => Some(part),
            HighlightSegment::Space(_) => None,
        }
    }

    /// Check if this segment is a whitespace run
    pub fn is_space(&self) -> bool {
        matches!(self, HighlightSegment::Space(_))
    }
}

/// Whitespace that separates tokens
///
/// The ECMAScript `\s` class: `char::is_whitespace` minus U+0085 and
/// plus U+FEFF.
pub fn is_space_char(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => ch.is_whitespace(),
    }
}

/// Highlight every token in a line
pub fn highlight_line(line: &str) -> Vec<HighlightSegment> {
    let mut segments = Vec::new();
    let mut run_start = 0;
    let mut run_is_space = false;

    for (pos, ch) in line.char_indices() {
        let is_space = is_space_char(ch);
        if pos > run_start && is_space != run_is_space {
            segments.push(make_segment(&line[run_start..pos], run_is_space));
            run_start = pos;
        }
        run_is_space = is_space;
    }

    if run_start < line.len() {
        segments.push(make_segment(&line[run_start..], run_is_space));
    }

    segments
}

fn make_segment(run: &str, is_space: bool) -> HighlightSegment {
    if is_space {
        HighlightSegment::Space(run.to_string())
    } else {
        HighlightSegment::Token(highlight_token(run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn focus(segment: &HighlightSegment) -> &str {
        segment.as_token().map_or("", |part| part.focus.as_str())
    }

    #[test]
    fn test_highlight_line_words() {
        let segments = highlight_line("This is fine");
        assert_eq!(segments.len(), 5);
        assert_eq!(focus(&segments[0]), "h");
        assert!(segments[1].is_space());
        assert_eq!(focus(&segments[2]), "s");
        assert!(segments[3].is_space());
        assert_eq!(focus(&segments[4]), "i");
    }

    #[test]
    fn test_highlight_line_punctuation() {
        let segments = highlight_line("Hello, world!");
        let shape: Vec<String> = segments
            .iter()
            .map(|s| if s.is_space() { s.text() } else { "token".to_string() })
            .collect();
        assert_eq!(shape, vec!["token", " ", "token"]);

        let hello = segments[0].as_token().unwrap();
        assert_eq!(hello.leading, "");
        assert_eq!(hello.trailing, ",");
        assert_eq!(segments[2].as_token().unwrap().trailing, "!");
    }

    #[test]
    fn test_highlight_line_empty() {
        assert!(highlight_line("").is_empty());
    }

    #[test]
    fn test_highlight_line_keeps_whitespace_runs() {
        let segments = highlight_line("  two\t\t words \n");
        let texts: Vec<String> = segments.iter().map(HighlightSegment::text).collect();
        assert_eq!(texts, vec!["  ", "two", "\t\t ", "words", " \n"]);
        assert!(segments[0].is_space());
        assert!(segments[4].is_space());
    }

    #[test]
    fn test_highlight_line_whitespace_only() {
        assert_eq!(
            highlight_line("   "),
            vec![HighlightSegment::Space("   ".to_string())]
        );
    }

    #[test]
    fn test_highlight_line_unicode_space() {
        // no-break space separates tokens too
        let segments = highlight_line("a\u{a0}b");
        assert_eq!(segments.len(), 3);
        assert!(segments[1].is_space());
    }

    #[test]
    fn test_space_class() {
        // next line is part of a token, byte order mark separates
        assert_eq!(highlight_line("a\u{85}b").len(), 1);
        let segments = highlight_line("a\u{feff}b");
        assert_eq!(segments.len(), 3);
        assert!(segments[1].is_space());

        let spaces = [
            '\t', '\n', '\u{b}', '\u{c}', '\r', ' ', '\u{a0}', '\u{1680}', '\u{2000}', '\u{200a}',
            '\u{2028}', '\u{2029}', '\u{202f}', '\u{205f}', '\u{3000}', '\u{feff}',
        ];
        for ch in spaces {
            assert!(is_space_char(ch), "{:?}", ch);
        }
        for ch in ['\u{85}', '\u{200b}', '\u{180e}', 'a', '.'] {
            assert!(!is_space_char(ch), "{:?}", ch);
        }
    }

    proptest! {
        #[test]
        fn test_highlight_line_reconstructs(line in "[a-z.,!? \t\u{a0}\u{85}\u{feff}—]{0,40}") {
            let segments = highlight_line(&line);
            let rebuilt: String = segments.iter().map(HighlightSegment::text).collect();
            prop_assert_eq!(rebuilt, line);

            for pair in segments.windows(2) {
                prop_assert!(pair[0].is_space() != pair[1].is_space());
            }
        }

        #[test]
        fn test_highlight_line_any_text_reconstructs(line in "\\PC{0,40}") {
            let rebuilt: String = highlight_line(&line).iter().map(HighlightSegment::text).collect();
            prop_assert_eq!(rebuilt, line);
        }
    }
}
