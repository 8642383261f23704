//! Classification of a typed answer against the expected answer.
//!
//! One call is one independent pass: extract both texts from the host's
//! comparison area, normalize them, diff them, optionally split punctuation
//! out of the script, then rebuild the fragments for display.

use crate::config::AddonConfig;
use crate::diff::{DiffAlgorithm, Myers};
use crate::extract::extract;
use crate::normalize::ComparableText;
use crate::punctuation::split_punctuation;
use crate::reconstruct::{reconstruct, Reconstruction};
use crate::types::{CharFragment, CompareOptions, EditKind, EditOp, TypeAnswerNode};

/// Outcome of one classification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Typed side, delimiter, expected side.
    Full {
        typed: Vec<CharFragment>,
        expected: Vec<CharFragment>,
    },
    /// Expected side only; showing the typed side would be redundant.
    ///
    /// Never produced for typed input against an empty expected text, even
    /// though every (absent) expected fragment is then correct.
    Collapsed { expected: Vec<CharFragment> },
}

impl Classified {
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Self::Collapsed { .. })
    }

    /// Expected-side fragments.
    pub fn expected(&self) -> &[CharFragment] {
        match self {
            Self::Full { expected, .. } | Self::Collapsed { expected } => expected,
        }
    }

    /// Typed-side fragments; empty when collapsed.
    pub fn typed(&self) -> &[CharFragment] {
        match self {
            Self::Full { typed, .. } => typed,
            Self::Collapsed { .. } => &[],
        }
    }

    /// Replacement content for the host's comparison area.
    pub fn into_nodes(self) -> Vec<TypeAnswerNode> {
        match self {
            Self::Full { typed, expected } => typed
                .into_iter()
                .map(TypeAnswerNode::Fragment)
                .chain(std::iter::once(TypeAnswerNode::Delimiter))
                .chain(expected.into_iter().map(TypeAnswerNode::Fragment))
                .collect(),
            Self::Collapsed { expected } => {
                expected.into_iter().map(TypeAnswerNode::Fragment).collect()
            }
        }
    }
}

/// Classify the comparison area with the Myers diff.
///
/// Returns `None` when the area has no delimiter. The result collapses to
/// the expected side when the texts match or every expected fragment is
/// correct; an empty expected text with something typed stays `Full`.
pub fn classify(nodes: &[TypeAnswerNode], options: &CompareOptions) -> Option<Classified> {
    classify_with(nodes, options, &Myers)
}

/// Classify the comparison area with a specific diff algorithm.
pub fn classify_with(
    nodes: &[TypeAnswerNode],
    options: &CompareOptions,
    algorithm: &dyn DiffAlgorithm,
) -> Option<Classified> {
    let answer = extract(nodes)?;

    let typed = ComparableText::new(&answer.typed_text, options.ignore_accents);
    let expected = ComparableText::new(&answer.expected_text, options.ignore_accents);
    let script = algorithm.diff(typed.as_str(), expected.as_str(), options.ignore_case);

    if is_exact_match(&script) {
        tracing::debug!(
            algorithm = algorithm.name(),
            "Answer matches, collapsing to expected side"
        );
        let expected = answer
            .expected_fragments
            .into_iter()
            .map(|fragment| CharFragment::correct(fragment.text))
            .collect();
        return Some(Classified::Collapsed { expected });
    }

    let script = if options.ignore_punctuation {
        split_punctuation(script)
    } else {
        script
    };

    let reconstruction = reconstruct(&script, &typed, &expected, options);
    let classified = collapse(reconstruction);

    tracing::debug!(
        algorithm = algorithm.name(),
        ops = script.len(),
        collapsed = classified.is_collapsed(),
        "Classified typed answer"
    );

    Some(classified)
}

/// Classify the comparison area as configured by the add-on.
///
/// Returns `None` when the add-on is disabled or there is nothing to
/// classify; the host then keeps its own rendering.
pub fn compare_input_to_answer(
    nodes: &[TypeAnswerNode],
    config: &AddonConfig,
) -> Option<Vec<TypeAnswerNode>> {
    if !config.enabled {
        tracing::debug!("Typed answer comparison disabled");
        return None;
    }

    classify(nodes, &config.options()).map(Classified::into_nodes)
}

/// A single common entry means the texts are equal under normalization.
fn is_exact_match(script: &[EditOp]) -> bool {
    matches!(script, [op] if op.kind == EditKind::Common)
}

/// Drop the typed side when every expected fragment is correct.
///
/// Typed input with no expected text at all is never collapsed away.
fn collapse(reconstruction: Reconstruction) -> Classified {
    let nothing_expected =
        reconstruction.expected.is_empty() && !reconstruction.typed.is_empty();

    if !nothing_expected && reconstruction.expected_all_correct() {
        Classified::Collapsed {
            expected: reconstruction.expected,
        }
    } else {
        let Reconstruction { typed, expected } = reconstruction;
        Classified::Full { typed, expected }
    }
}
