//! Noise filtering for raw step lists.
//!
//! Upstream document extraction returns genuine action steps mixed with
//! navigational text, copyright lines and whole prose paragraphs. The
//! [`StepFilter`] keeps the short, action-like entries in their original
//! order and caps the result so it fits a fixed-width horizontal layout.

mod filter;

pub use filter::{StepFilter, filter_steps};

use std::fmt;

/// An ordered, bounded sequence of steps that survived filtering.
///
/// Only [`StepFilter`] produces values of this type, so holders can rely on
/// the order matching the raw input and on the length respecting the cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredSteps {
    steps: Vec<String>,
}

impl FilteredSteps {
    pub(crate) fn new(steps: Vec<String>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.steps
    }

    pub fn into_inner(self) -> Vec<String> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a FilteredSteps {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Why a single raw step was discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    TooLong { length: usize, limit: usize },
    Denylisted { term: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty step"),
            Rejection::TooLong { length, limit } => {
                write!(f, "{} characters (limit {})", length, limit)
            }
            Rejection::Denylisted { term } => write!(f, "contains '{}'", term),
        }
    }
}
