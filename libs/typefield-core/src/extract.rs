//! Recovery of typed and expected text from the host's comparison area.

use crate::types::{CharFragment, Classification, TypeAnswerNode};

/// Plain texts recovered from one comparison area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAnswer {
    /// What the user typed, without host-inserted gap placeholders, trimmed.
    pub typed_text: String,
    /// The expected answer, trimmed.
    pub expected_text: String,
    /// Expected-group fragments exactly as the host classified them.
    pub expected_fragments: Vec<CharFragment>,
}

/// Split the comparison area at its delimiter and rebuild both texts.
///
/// Returns `None` when there is no delimiter: the host made no comparison,
/// so there is nothing to classify.
pub fn extract(nodes: &[TypeAnswerNode]) -> Option<ExtractedAnswer> {
    let split = nodes
        .iter()
        .position(|node| matches!(node, TypeAnswerNode::Delimiter))?;
    let (typed_group, rest) = nodes.split_at(split);

    let typed_text = construct_text(
        fragments(typed_group).filter(|fragment| fragment.class != Classification::Gap),
    );

    let expected_fragments: Vec<CharFragment> = fragments(&rest[1..]).cloned().collect();
    let expected_text = construct_text(expected_fragments.iter());

    Some(ExtractedAnswer {
        typed_text,
        expected_text,
        expected_fragments,
    })
}

fn fragments(nodes: &[TypeAnswerNode]) -> impl Iterator<Item = &CharFragment> {
    nodes.iter().filter_map(|node| match node {
        TypeAnswerNode::Fragment(fragment) => Some(fragment),
        TypeAnswerNode::Delimiter => None,
    })
}

/// Concatenate fragment texts and trim the result.
fn construct_text<'a>(fragments: impl Iterator<Item = &'a CharFragment>) -> String {
    fragments
        .map(|fragment| fragment.text.as_str())
        .collect::<String>()
        .trim()
        .to_string()
}
