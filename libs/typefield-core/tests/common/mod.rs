//! Shared helpers for classification tests.

pub mod fixtures;
