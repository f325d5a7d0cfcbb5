//! Optimal recognition point
//!
//! The recognition point shifts right as words get longer and
//! saturates at the fifth character.

/// Focus offsets by word length, as `(max_len, offset)` bands.
const ORP_BANDS: [(usize, usize); 4] = [(1, 0), (5, 1), (9, 2), (13, 3)];

/// Offset used for words longer than every band
const ORP_MAX: usize = 4;

/// Get the focus offset (in characters) for a word
///
/// Defined for every length including zero; never decreases as the
/// word grows and never exceeds 4.
pub fn orp_index(word: &str) -> usize {
    let len = word.chars().count();
    ORP_BANDS
        .iter()
        .find(|(max_len, _)| len <= *max_len)
        .map_or(ORP_MAX, |(_, offset)| *offset)
}

/// A word split around its focus character
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrpSplit {
    /// Text before the focus character
    pub pre: String,
    /// The focus character (empty only for empty input)
    pub focus: String,
    /// Text after the focus character
    pub post: String,
}

/// Split a word into the text before, at and after its focus character
pub fn split_by_orp(word: &str) -> OrpSplit {
    let len = word.chars().count();
    if len == 0 {
        return OrpSplit::default();
    }

    let index = orp_index(word).min(len - 1);
    let Some((focus_start, focus)) = word.char_indices().nth(index) else {
        return OrpSplit::default();
    };
    let focus_end = focus_start + focus.len_utf8();

    OrpSplit {
        pre: word[..focus_start].to_string(),
        focus: word[focus_start..focus_end].to_string(),
        post: word[focus_end..].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn split(pre: &str, focus: &str, post: &str) -> OrpSplit {
        OrpSplit {
            pre: pre.to_string(),
            focus: focus.to_string(),
            post: post.to_string(),
        }
    }

    #[test]
    fn test_orp_index_bands() {
        assert_eq!(orp_index(""), 0);
        assert_eq!(orp_index("a"), 0);
        assert_eq!(orp_index("word"), 1);
        assert_eq!(orp_index("speed"), 1);
        assert_eq!(orp_index("longer"), 2);
        assert_eq!(orp_index("incredible"), 3);
        assert_eq!(orp_index("thirteenchars"), 3);
        assert_eq!(orp_index("characteristics"), 4);
    }

    #[test]
    fn test_orp_index_counts_chars_not_bytes() {
        // five characters, ten bytes
        assert_eq!(orp_index("ééééé"), 1);
    }

    #[test]
    fn test_split_by_orp() {
        assert_eq!(split_by_orp("speed"), split("s", "p", "eed"));
        assert_eq!(split_by_orp("reading"), split("re", "a", "ding"));
        assert_eq!(split_by_orp("a"), split("", "a", ""));
    }

    #[test]
    fn test_split_by_orp_empty() {
        assert_eq!(split_by_orp(""), OrpSplit::default());
    }

    #[test]
    fn test_split_by_orp_multibyte() {
        assert_eq!(split_by_orp("naïve"), split("n", "a", "ïve"));
        assert_eq!(split_by_orp("über"), split("ü", "b", "er"));
    }

    proptest! {
        #[test]
        fn test_orp_index_monotonic_and_bounded(a in 0usize..40, b in 0usize..40) {
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            let short_word = "x".repeat(short);
            let long_word = "x".repeat(long);
            prop_assert!(orp_index(&short_word) <= orp_index(&long_word));
            prop_assert!(orp_index(&long_word) <= 4);
        }

        #[test]
        fn test_split_by_orp_reconstructs(word in "\\PC{1,30}") {
            let parts = split_by_orp(&word);
            prop_assert_eq!(parts.focus.chars().count(), 1);
            prop_assert_eq!(format!("{}{}{}", parts.pre, parts.focus, parts.post), word);
        }
    }
}
