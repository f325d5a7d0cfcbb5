//! Token highlighting
//!
//! A token is a run of non-whitespace. Its leading and trailing
//! punctuation is kept aside so the focus character lands inside the
//! word itself: `"(hello)"` focuses on the `e`, not on the `h`.

use unicode_width::UnicodeWidthStr;

use super::orp::{split_by_orp, OrpSplit};

/// Check if a character counts as part of a word
///
/// Only ASCII letters and digits qualify; every other character,
/// including non-ASCII letters, is treated as punctuation.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// A token split into punctuation and the parts around its focus character
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightPart {
    /// Punctuation before the word
    pub leading: String,
    /// Word text before the focus character
    pub pre: String,
    /// The focus character
    pub focus: String,
    /// Word text after the focus character
    pub post: String,
    /// Punctuation after the word
    pub trailing: String,
}

impl HighlightPart {
    /// Reassemble the original token
    pub fn text(&self) -> String {
        [
            self.leading.as_str(),
            self.pre.as_str(),
            self.focus.as_str(),
            self.post.as_str(),
            self.trailing.as_str(),
        ]
        .concat()
    }

    /// Display column of the focus character, relative to the token start
    pub fn focus_column(&self) -> usize {
        self.leading.width() + self.pre.width()
    }
}

/// Highlight a single token
///
/// Tokens with no word characters at all (`"..."`, `"—"`, `""`) are split
/// by ORP as a whole, with empty leading and trailing punctuation, so they
/// still get a focus character.
pub fn highlight_token(token: &str) -> HighlightPart {
    let rest = token.trim_start_matches(|ch: char| !is_word_char(ch));
    if rest.is_empty() {
        let OrpSplit { pre, focus, post } = split_by_orp(token);
        return HighlightPart {
            pre,
            focus,
            post,
            ..Default::default()
        };
    }

    let core_start = token.len() - rest.len();
    let core_end = token.trim_end_matches(|ch: char| !is_word_char(ch)).len();
    let OrpSplit { pre, focus, post } = split_by_orp(&token[core_start..core_end]);

    HighlightPart {
        leading: token[..core_start].to_string(),
        pre,
        focus,
        post,
        trailing: token[core_end..].to_string(),
    }
}
