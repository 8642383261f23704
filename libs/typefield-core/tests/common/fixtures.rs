//! Factory functions for building comparison areas.

use typefield_core::{CharFragment, Classification, TypeAnswerNode};

/// Build a comparison area from host-classified typed and expected fragments.
pub fn area(
    typed: &[(&str, Classification)],
    expected: &[(&str, Classification)],
) -> Vec<TypeAnswerNode> {
    let fragment = |&(text, class): &(&str, Classification)| {
        TypeAnswerNode::Fragment(CharFragment::new(text, class))
    };

    typed
        .iter()
        .map(fragment)
        .chain(std::iter::once(TypeAnswerNode::Delimiter))
        .chain(expected.iter().map(fragment))
        .collect()
}

/// Build a comparison area where each side is a single fragment.
///
/// The host's own classification is irrelevant to the result, except that
/// typed-side gaps are dropped, so plain `Correct` runs are enough.
pub fn plain_area(typed: &str, expected: &str) -> Vec<TypeAnswerNode> {
    area(
        &[(typed, Classification::Correct)],
        &[(expected, Classification::Correct)],
    )
}
