// ABOUTME: Error types for the blockmill engine including ErrorCode enum and EngineError struct.
// ABOUTME: Covers rule-set loading failures; the extraction pipeline itself is total and never errors.

use std::fmt;

/// Error codes representing the categories of engine failures.
///
/// Extraction never fails (unrecognized fragments degrade to an empty
/// table), so every code here belongs to rule-set configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Rule-set JSON could not be deserialized.
    Config,
    /// A rule-set entry carries a CSS selector that does not compile.
    Selector,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::Config => "invalid rule config",
            ErrorCode::Selector => "invalid selector",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for engine operations.
#[derive(Debug, thiserror::Error)]
pub struct EngineError {
    pub code: ErrorCode,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blockmill: {}: {}", self.op, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl EngineError {
    /// Create a Config error.
    pub fn config(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::Config,
            op: op.into(),
            source,
        }
    }

    /// Create a Selector error for a selector string that failed to compile.
    pub fn selector(op: impl Into<String>, css: &str) -> Self {
        Self {
            code: ErrorCode::Selector,
            op: op.into(),
            source: Some(anyhow::anyhow!("selector {:?} does not compile", css)),
        }
    }

    /// Returns true if this is a Config error.
    pub fn is_config(&self) -> bool {
        self.code == ErrorCode::Config
    }

    /// Returns true if this is a Selector error.
    pub fn is_selector(&self) -> bool {
        self.code == ErrorCode::Selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_op_and_code() {
        let err = EngineError::config("load_rules", None);
        let msg = err.to_string();
        assert!(msg.contains("load_rules"));
        assert!(msg.contains("invalid rule config"));
    }

    #[test]
    fn test_selector_error_names_selector() {
        let err = EngineError::selector("validate", "[[[bad");
        assert!(err.is_selector());
        assert!(err.to_string().contains("[[[bad"));
    }
}
