//! Assertion failure type shared across the toolkit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder used when a failure is raised without a message.
pub const UNSPECIFIED_MESSAGE: &str = "(unspecified)";

/// Single error kind raised by every assertion helper.
///
/// A failure is constructed exactly at the point of a failed assertion and
/// propagates unchanged to the caller. Helpers that annotate a propagating
/// failure wrap it in a new value and keep the original as the [`cause`],
/// so the causal chain survives.
///
/// [`cause`]: Failure::cause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Assertion Failed: {message}")]
pub struct Failure {
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (direction, example index, error codes).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Failure that triggered this one, when annotated during propagation.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[source]
    pub cause: Option<Box<Failure>>,
}

impl Failure {
    /// Creates a failure with the provided message, or the placeholder when empty.
    pub fn new(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = UNSPECIFIED_MESSAGE.to_string();
        }
        Self {
            message,
            context: BTreeMap::new(),
            cause: None,
        }
    }

    /// Adds a context entry to the failure.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Wraps this failure in a new one recording which example triggered it.
    ///
    /// The annotated message gains a trailing `{direction} example {index}`
    /// line and the original failure is preserved as the cause. Indices are
    /// 1-based.
    pub fn with_example(self, direction: &str, index: usize) -> Self {
        let mut context = self.context.clone();
        context.insert("direction".to_string(), direction.to_string());
        context.insert("example".to_string(), index.to_string());
        Self {
            message: format!("{}\n{direction} example {index}", self.message),
            context,
            cause: Some(Box::new(self)),
        }
    }
}
