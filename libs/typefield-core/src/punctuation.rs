//! Punctuation handling for edit scripts.
//!
//! When punctuation is ignored, an edit-script entry mixing letters and
//! punctuation is split so each mark can be judged apart from the word it
//! is attached to.

use crate::types::EditOp;

/// ASCII punctuation recognized by the comparison.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Check whether `ch` is a punctuation mark.
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(ch)
}

/// Check whether `text` contains any punctuation mark.
pub fn has_punctuation(text: &str) -> bool {
    text.chars().any(is_punctuation)
}

/// Check whether `text` is non-empty and made only of punctuation marks.
pub fn is_all_punctuation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_punctuation)
}

/// Split text into maximal runs of punctuation and non-punctuation.
///
/// `"Hello, world!"` becomes `["Hello", ",", " world", "!"]`.
pub fn split_words_and_symbols(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let punct = is_punctuation(ch);
        if current.is_some_and(|run| run != punct) {
            parts.push(&text[start..idx]);
            start = idx;
        }
        current = Some(punct);
    }
    if start < text.len() {
        parts.push(&text[start..]);
    }

    parts
}

/// Split every mixed entry of `script` into homogeneous entries of the same kind.
///
/// Homogeneous entries pass through untouched; empty entries are dropped.
pub fn split_punctuation(script: Vec<EditOp>) -> Vec<EditOp> {
    let mut refined = Vec::with_capacity(script.len());

    for op in script {
        if op.value.is_empty() {
            continue;
        }
        if !has_punctuation(&op.value) || is_all_punctuation(&op.value) {
            refined.push(op);
            continue;
        }
        refined.extend(
            split_words_and_symbols(&op.value)
                .into_iter()
                .map(|part| EditOp::new(op.kind, part)),
        );
    }

    refined
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recognizes_ascii_punctuation() {
        for ch in PUNCTUATION.chars() {
            assert!(is_punctuation(ch), "{ch:?}");
        }
        assert!(!is_punctuation('a'));
        assert!(!is_punctuation(' '));
        assert!(!is_punctuation('¿'));
    }

    #[test]
    fn all_punctuation_requires_content() {
        assert!(is_all_punctuation("?!"));
        assert!(!is_all_punctuation(""));
        assert!(!is_all_punctuation("a!"));
    }

    #[test]
    fn split_words_and_symbols_groups_runs() {
        assert_eq!(
            split_words_and_symbols("Hello, world!"),
            vec!["Hello", ",", " world", "!"]
        );
        assert_eq!(split_words_and_symbols("Hello"), vec!["Hello"]);
        assert_eq!(split_words_and_symbols("Hello?!"), vec!["Hello", "?!"]);
        assert_eq!(split_words_and_symbols("...ça"), vec!["...", "ça"]);
        assert!(split_words_and_symbols("").is_empty());
    }

    #[test]
    fn split_mixed_ops_keeps_kind_and_order() {
        let script = vec![
            EditOp::common("well"),
            EditOp::expected_only(", then."),
            EditOp::typed_only("!!"),
        ];
        assert_eq!(
            split_punctuation(script),
            vec![
                EditOp::common("well"),
                EditOp::expected_only(","),
                EditOp::expected_only(" then"),
                EditOp::expected_only("."),
                EditOp::typed_only("!!"),
            ]
        );
    }

    #[test]
    fn split_drops_empty_ops() {
        let script = vec![EditOp::common(""), EditOp::common("a-b")];
        assert_eq!(
            split_punctuation(script),
            vec![
                EditOp::common("a"),
                EditOp::common("-"),
                EditOp::common("b"),
            ]
        );
    }
}
