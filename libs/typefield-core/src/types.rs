//! Core types for typed-answer classification.

use serde::{Deserialize, Serialize};

/// Classification of a run of characters in the comparison area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Matches the expected answer.
    #[serde(rename = "typeGood")]
    Correct,
    /// Typed wrong, or expected but not matched.
    #[serde(rename = "typeBad")]
    Wrong,
    /// Expected character that was never typed.
    #[serde(rename = "typeMissed")]
    Gap,
}

impl Classification {
    /// Get the host class name for this classification.
    pub fn as_class(&self) -> &'static str {
        match self {
            Self::Correct => "typeGood",
            Self::Wrong => "typeBad",
            Self::Gap => "typeMissed",
        }
    }

    /// Parse from a host class name.
    pub fn from_class(s: &str) -> Option<Self> {
        match s {
            "typeGood" => Some(Self::Correct),
            "typeBad" => Some(Self::Wrong),
            "typeMissed" => Some(Self::Gap),
            _ => None,
        }
    }
}

/// A contiguous run of characters sharing one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharFragment {
    pub text: String,
    pub class: Classification,
}

impl CharFragment {
    pub fn new(text: impl Into<String>, class: Classification) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }

    pub fn correct(text: impl Into<String>) -> Self {
        Self::new(text, Classification::Correct)
    }

    pub fn wrong(text: impl Into<String>) -> Self {
        Self::new(text, Classification::Wrong)
    }

    pub fn gap(text: impl Into<String>) -> Self {
        Self::new(text, Classification::Gap)
    }
}

/// One element of the host's comparison area.
///
/// The host supplies typed-group fragments, a single delimiter, then
/// expected-group fragments. Classification output uses the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeAnswerNode {
    Fragment(CharFragment),
    Delimiter,
}

impl From<CharFragment> for TypeAnswerNode {
    fn from(fragment: CharFragment) -> Self {
        Self::Fragment(fragment)
    }
}

/// Kind of an edit-script entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// Present in both texts at this alignment point.
    Common,
    /// Typed but absent from the expected text.
    TypedOnly,
    /// Expected but never typed.
    ExpectedOnly,
}

/// One entry of an edit script aligning typed text against expected text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp {
    pub kind: EditKind,
    pub value: String,
}

impl EditOp {
    pub fn new(kind: EditKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn common(value: impl Into<String>) -> Self {
        Self::new(EditKind::Common, value)
    }

    pub fn typed_only(value: impl Into<String>) -> Self {
        Self::new(EditKind::TypedOnly, value)
    }

    pub fn expected_only(value: impl Into<String>) -> Self {
        Self::new(EditKind::ExpectedOnly, value)
    }

    /// Length of the value in characters.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Normalization flags for a single classification pass.
///
/// Unset flags are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareOptions {
    pub ignore_case: bool,
    pub ignore_accents: bool,
    pub ignore_punctuation: bool,
}

impl CompareOptions {
    pub fn with_ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = value;
        self
    }

    pub fn with_ignore_accents(mut self, value: bool) -> Self {
        self.ignore_accents = value;
        self
    }

    pub fn with_ignore_punctuation(mut self, value: bool) -> Self {
        self.ignore_punctuation = value;
        self
    }
}
