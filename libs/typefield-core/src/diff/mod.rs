//! Character-level edit scripts between typed and expected text.

pub mod myers;

pub use myers::Myers;

use crate::types::{EditKind, EditOp};

/// Trait for edit-script algorithms.
///
/// Implementations must produce a minimal script: concatenating `Common`
/// and `TypedOnly` values yields `typed`, concatenating `Common` and
/// `ExpectedOnly` values yields `expected` (up to case when `ignore_case`
/// is set). `Common` values carry the expected text's characters. Adjacent
/// entries never share a kind and no entry is empty.
pub trait DiffAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Align `typed` (the old sequence) against `expected` (the new one).
    fn diff(&self, typed: &str, expected: &str, ignore_case: bool) -> Vec<EditOp>;
}

/// Get algorithm by name.
pub fn get_algorithm(name: &str) -> Option<Box<dyn DiffAlgorithm>> {
    match name {
        "myers" => Some(Box::new(Myers)),
        _ => None,
    }
}

/// Append `chars` to the script, merging with a trailing entry of the same kind.
pub(crate) fn push_op(script: &mut Vec<EditOp>, kind: EditKind, chars: &[char]) {
    if chars.is_empty() {
        return;
    }
    match script.last_mut() {
        Some(last) if last.kind == kind => last.value.extend(chars),
        _ => script.push(EditOp::new(kind, chars.iter().collect::<String>())),
    }
}
