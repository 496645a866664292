//! Structured configuration issues.
//!
//! Configuration sources are validated once at startup; each problem is
//! reported as a [`ConfigIssue`] with a severity. Errors prevent startup,
//! warnings are logged and the offending value is ignored.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the value is ignored or replaced.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `min_domains` must be at least 1.
    ZeroMinDomains,
    /// `task_timeout_seconds` must be positive.
    ZeroTimeout { field: String },
    /// A model identifier is blank.
    EmptyModelName { field: String },
    /// A routing key names no known domain.
    UnknownDomain { key: String },
    /// A keyword list contains a blank entry.
    EmptyKeyword { domain: String },
    /// A keyword override list is empty, so the domain could never match.
    EmptyKeywordList { domain: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = ConfigIssue::error(
            ConfigIssueCode::ZeroMinDomains,
            "parallel.min_domains must be at least 1",
        );
        assert!(issue.is_error());
        assert_eq!(
            issue.to_string(),
            "error: parallel.min_domains must be at least 1"
        );
    }
}
