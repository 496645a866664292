//! Structured log settings from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ```toml
/// [logging]
/// timeline_file = "~/.local/state/rutobot/timeline.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one record per orchestration event
    pub timeline_file: Option<String>,
}

impl FileLoggingConfig {
    /// Timeline path with a leading `~` expanded
    pub fn timeline_path(&self) -> Option<PathBuf> {
        let raw = self.timeline_file.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_path() {
        let config = FileLoggingConfig {
            timeline_file: Some("/tmp/timeline.jsonl".to_string()),
        };
        assert_eq!(
            config.timeline_path(),
            Some(PathBuf::from("/tmp/timeline.jsonl"))
        );
        assert!(FileLoggingConfig::default().timeline_path().is_none());
    }
}
