//! Comparison strings derived from typed and expected text.
//!
//! Accent stripping keeps a map from every comparison character back to the
//! original character it came from, so display can always show what was
//! actually typed or expected.

use unicode_normalization::char::{canonical_combining_class, is_combining_mark};
use unicode_normalization::UnicodeNormalization;

/// Text paired with its comparison form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparableText {
    original: Vec<char>,
    comparable: String,
    /// Index into `original` for each character of `comparable`.
    origins: Vec<usize>,
}

impl ComparableText {
    /// Build the comparison form of `text`.
    ///
    /// Case is left alone; case folding happens inside the diff comparison.
    pub fn new(text: &str, ignore_accents: bool) -> Self {
        let original: Vec<char> = text.chars().collect();

        if !ignore_accents {
            return Self {
                origins: (0..original.len()).collect(),
                comparable: text.to_string(),
                original,
            };
        }

        let mut comparable = String::with_capacity(text.len());
        let mut origins = Vec::with_capacity(original.len());
        for (idx, &ch) in original.iter().enumerate() {
            for stripped in strip_char(ch) {
                comparable.push(stripped);
                origins.push(idx);
            }
        }

        Self {
            original,
            comparable,
            origins,
        }
    }

    /// The string fed to the diff.
    pub fn as_str(&self) -> &str {
        &self.comparable
    }

    /// Length of the comparison form in characters.
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Original text behind comparison characters `start..end`.
    ///
    /// Marks stripped from the original stay attached to the preceding
    /// base character; leading marks go with the first one.
    pub fn original_slice(&self, start: usize, end: usize) -> String {
        let from = self.original_index(start);
        let to = self.original_index(end).max(from);
        self.original[from..to].iter().collect()
    }

    fn original_index(&self, pos: usize) -> usize {
        if pos == 0 {
            0
        } else if pos >= self.origins.len() {
            self.original.len()
        } else {
            self.origins[pos]
        }
    }
}

/// Remove diacritics from `text`.
pub fn strip_accents(text: &str) -> String {
    text.chars().flat_map(strip_char).collect()
}

/// Decompose one character, drop its diacritics and recompose the rest.
fn strip_char(ch: char) -> impl Iterator<Item = char> {
    std::iter::once(ch)
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .nfc()
}

/// Combining marks with a non-zero canonical combining class.
///
/// This covers U+0300..=U+036F except U+034F (combining grapheme joiner,
/// class 0) and the diacritics of other blocks that canonical
/// decomposition splits off a base letter. Class-0 marks, such as Indic
/// vowel signs, belong to their letter and are kept.
fn is_diacritic(ch: char) -> bool {
    is_combining_mark(ch) && canonical_combining_class(ch) != 0
}
