//! Diagnostics collected while building declarations.

use std::fmt;

/// How a diagnostic affects the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Output was produced but lost precision (a member typed `any`, a
    /// dropped record).
    Warning,
    /// A record was ignored without changing the output.
    Info,
}

impl Severity {
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    pub fn is_info(&self) -> bool {
        matches!(self, Severity::Info)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Info => "info",
        })
    }
}

/// A non-fatal finding of one pipeline phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub phase: &'static str,
    pub message: String,
    /// Id of the Entity or Attribute record concerned.
    pub record: Option<String>,
}

impl Diagnostic {
    pub fn warning(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            phase,
            message: message.into(),
            record: None,
        }
    }

    pub fn info(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            ..Self::warning(phase, message)
        }
    }

    pub fn about(mut self, record: impl Into<String>) -> Self {
        self.record = Some(record.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.severity, self.phase, self.message)?;
        match &self.record {
            Some(record) => write!(f, ": {}", record),
            None => Ok(()),
        }
    }
}
