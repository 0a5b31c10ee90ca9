//! Structured diagnostics for reporting collaborators.
//!
//! A generation pass either succeeds or surfaces exactly one error
//! diagnostic; the core never reports warnings or partial successes.

use crate::error::GenerateError;

/// Diagnostic severity. Generation itself only produces [`Severity::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One structured diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable error code, e.g. `WS0001`.
    pub code: &'static str,
    /// Human-readable message naming the offending contract and operation.
    pub message: String,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }
}

impl From<&GenerateError> for Diagnostic {
    fn from(err: &GenerateError) -> Self {
        Self::error(err.code(), err.to_string())
    }
}

/// Receives diagnostics from a generation pass.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_from_error() {
        let err = GenerateError::ShapeConflict {
            contract: "IBar".to_owned(),
            operation: "GetString".to_owned(),
        };
        let diagnostic = Diagnostic::from(&err);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.code, "WS0002");
        assert!(diagnostic.message.contains("GetString"));
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::error("WS0001", "missing method"));
        assert_eq!(sink.len(), 1);
    }
}
