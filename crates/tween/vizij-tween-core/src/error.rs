//! Error types for tween registration and dispatch

use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// Every failure the registry can observe.
///
/// None of these escape the total entry points (`create_by_name`,
/// `create_by_path`, `rebuild`); they are logged there and surface only
/// through the `try_*` variants and the scan report.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// A second factory claimed an existing `(target, name)` pair
    #[error("Tween factory already defined - skipping {name} from {provider} for type {target}")]
    DuplicateFactory {
        target: String,
        name: String,
        provider: String,
    },

    /// No factory answers to the selector on the target's type
    #[error("No tween factory '{selector}' for type {target}")]
    UnresolvedSelector { target: String, selector: String },

    /// Declared arity does not fit the invocation shape
    #[error("Shape mismatch for {name}: {shape} expects {expected} parameters, found {actual}")]
    ShapeMismatch {
        name: String,
        shape: String,
        expected: usize,
        actual: usize,
    },

    /// The value source could not produce the kind the factory accepts
    #[error("Cannot produce a {expected:?} value for {name}")]
    CoercionFailed { name: String, expected: ValueKind },

    /// The live target is not (and does not embed) the factory's target type
    #[error("Target mismatch: expected {expected}, got {actual}")]
    TargetMismatch { expected: String, actual: String },

    /// A provider function that returns a tween but cannot be indexed
    #[error("Malformed tween provider {provider}::{member}: {reason}")]
    MalformedProvider {
        provider: String,
        member: String,
        reason: String,
    },

    /// Configuration could not be loaded
    #[error("Config error: {reason}")]
    Config { reason: String },
}

impl TweenError {
    /// Check if the registry stays usable after this error
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config { .. })
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::DuplicateFactory { .. } | Self::MalformedProvider { .. } => "registry",
            Self::UnresolvedSelector { .. }
            | Self::ShapeMismatch { .. }
            | Self::TargetMismatch { .. } => "dispatch",
            Self::CoercionFailed { .. } => "value",
            Self::Config { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}
