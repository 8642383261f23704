//! Rebuild typed-side and expected-side fragments from an edit script.

use crate::normalize::ComparableText;
use crate::punctuation::is_all_punctuation;
use crate::types::{CharFragment, Classification, CompareOptions, EditKind, EditOp};

/// Placeholder shown on the typed side for every missed character.
pub const GAP_PLACEHOLDER: &str = "-";

/// Fragments for both sides of the comparison area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconstruction {
    pub typed: Vec<CharFragment>,
    pub expected: Vec<CharFragment>,
}

impl Reconstruction {
    /// True when no expected-side fragment is marked as an error.
    pub fn expected_all_correct(&self) -> bool {
        self.expected
            .iter()
            .all(|fragment| fragment.class == Classification::Correct)
    }
}

/// Walk `script` and classify both sides.
///
/// `typed` and `expected` must be the texts the script was computed from.
/// Typed-side text is always taken from the original typed input, so the
/// user's casing and accents are shown as typed.
pub fn reconstruct(
    script: &[EditOp],
    typed: &ComparableText,
    expected: &ComparableText,
    options: &CompareOptions,
) -> Reconstruction {
    let mut builder = Builder {
        typed,
        expected,
        options,
        typed_pos: 0,
        expected_pos: 0,
        out: Reconstruction::default(),
    };

    for op in script {
        builder.step(op);
    }

    builder.out
}

struct Builder<'a> {
    typed: &'a ComparableText,
    expected: &'a ComparableText,
    options: &'a CompareOptions,
    typed_pos: usize,
    expected_pos: usize,
    out: Reconstruction,
}

impl Builder<'_> {
    fn step(&mut self, op: &EditOp) {
        let len = op.char_len();
        let ignored_punctuation =
            self.options.ignore_punctuation && is_all_punctuation(&op.value);

        match op.kind {
            EditKind::Common => {
                let text = self.take_typed(len);
                self.out.typed.push(CharFragment::correct(text));
                self.push_expected(op, len, Classification::Correct);
            }
            EditKind::TypedOnly => {
                let text = self.take_typed(len);
                self.out.typed.push(CharFragment::wrong(text));
            }
            EditKind::ExpectedOnly => {
                if !ignored_punctuation && !self.follows_wrong() {
                    self.out
                        .typed
                        .extend((0..len).map(|_| CharFragment::gap(GAP_PLACEHOLDER)));
                }
                let class = if ignored_punctuation {
                    Classification::Correct
                } else {
                    Classification::Wrong
                };
                self.push_expected(op, len, class);
            }
        }
    }

    /// Consume the next `len` comparison characters of typed input.
    fn take_typed(&mut self, len: usize) -> String {
        let end = self.typed_pos + len;
        let text = self.typed.original_slice(self.typed_pos, end);
        self.typed_pos = end;
        text
    }

    fn push_expected(&mut self, op: &EditOp, len: usize, class: Classification) {
        let end = self.expected_pos + len;
        let text = if self.options.ignore_accents {
            self.expected.original_slice(self.expected_pos, end)
        } else {
            op.value.clone()
        };
        self.expected_pos = end;
        self.out.expected.push(CharFragment::new(text, class));
    }

    /// A run of gap markers right after a wrong run would be redundant.
    fn follows_wrong(&self) -> bool {
        self.out
            .typed
            .last()
            .is_some_and(|fragment| fragment.class == Classification::Wrong)
    }
}
