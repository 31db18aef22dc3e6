//! Structured error types shared across the mayer crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload carried by every [`MayerError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable kebab-case code, e.g. `invalid-denominator`.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Operands, node indices and limits involved in the failure.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested remedy, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a payload without context or hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `key = value`, replacing an earlier entry with the same key.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets the remedy hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " | context: [{}]", pairs.join(", "))?;
        }
        match &self.hint {
            Some(hint) => write!(f, " | hint: {hint}"),
            None => Ok(()),
        }
    }
}

/// Error type for coefficient arithmetic and diagram processing.
///
/// Failures are reported synchronously to the caller; nothing in the workspace
/// retries or swallows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MayerError {
    /// Invalid rational state or arithmetic that does not fit the representation.
    #[error("coefficient error: {0}")]
    Coefficient(ErrorInfo),
    /// Structural diagram errors (unknown nodes, duplicate bonds, bad permutations).
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Failures raised while deciding whether two diagrams are isomorphic.
    #[error("isomorphism error: {0}")]
    Isomorphism(ErrorInfo),
}

impl MayerError {
    /// Builds a coefficient error.
    pub fn coefficient(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Coefficient(ErrorInfo::new(code, message))
    }

    /// Builds a graph error.
    pub fn graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Graph(ErrorInfo::new(code, message))
    }

    /// Builds an isomorphism error.
    pub fn isomorphism(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Isomorphism(ErrorInfo::new(code, message))
    }

    /// Returns the payload.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            Self::Coefficient(info) | Self::Graph(info) | Self::Isomorphism(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry whatever the family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.map_info(|info| info.with_context(key, value))
    }

    /// Attaches a remedy hint whatever the family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        self.map_info(|info| info.with_hint(hint))
    }

    fn map_info(self, f: impl FnOnce(ErrorInfo) -> ErrorInfo) -> Self {
        match self {
            Self::Coefficient(info) => Self::Coefficient(f(info)),
            Self::Graph(info) => Self::Graph(f(info)),
            Self::Isomorphism(info) => Self::Isomorphism(f(info)),
        }
    }
}
