//! Typed-answer classification for flashcard review.
//!
//! Provides:
//! - Recovery of typed and expected text from the host's comparison area
//! - Case, accent and punctuation tolerant character diffing (Myers)
//! - Reconstruction of Correct / Wrong / Gap fragments for display
//! - Add-on configuration and host markup rendering

pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod markup;
pub mod normalize;
pub mod punctuation;
pub mod reconstruct;
pub mod types;

pub use compare::{classify, classify_with, compare_input_to_answer, Classified};
pub use config::AddonConfig;
pub use diff::{get_algorithm, DiffAlgorithm, Myers};
pub use error::{ConfigError, Result};
pub use markup::render_html;
pub use types::{
    CharFragment, Classification, CompareOptions, EditKind, EditOp, TypeAnswerNode,
};
