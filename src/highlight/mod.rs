//! ORP highlighting
//!
//! This module decides, for any token, which single character is the
//! focus character (the "optimal recognition point") and how the
//! punctuation around it is separated out. Everything here is pure:
//! - `orp` maps a word to its focus offset and splits it there
//! - `token` peels punctuation off a token before splitting
//! - `line` segments a whole line into tokens and whitespace runs

mod line;
mod orp;
mod token;

pub use line::{highlight_line, is_space_char, HighlightSegment};
pub use orp::{orp_index, split_by_orp, OrpSplit};
pub use token::{highlight_token, is_word_char, HighlightPart};
