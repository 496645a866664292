//! Domain labels and the toolsets scoped to them

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A topical domain a query can be routed to (Value Object)
///
/// The set is closed: adding a domain means adding a variant here and a row
/// to each table below, never a new responder type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainLabel {
    Experiences,
    Lodging,
    Transportation,
    Database,
    General,
}

impl DomainLabel {
    /// Domains that have a dedicated specialist, in detection order
    pub const SPECIALISTS: [DomainLabel; 4] = [
        DomainLabel::Experiences,
        DomainLabel::Lodging,
        DomainLabel::Transportation,
        DomainLabel::Database,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainLabel::Experiences => "experiences",
            DomainLabel::Lodging => "lodging",
            DomainLabel::Transportation => "transportation",
            DomainLabel::Database => "database",
            DomainLabel::General => "general",
        }
    }

    /// Name of the responder serving this domain, used as a section label
    pub fn agent_name(&self) -> &'static str {
        match self {
            DomainLabel::Experiences => "Experiences Agent",
            DomainLabel::Lodging => "Lodging Agent",
            DomainLabel::Transportation => "Transportation Agent",
            DomainLabel::Database => "Database Agent",
            DomainLabel::General => "General Agent",
        }
    }

    pub fn is_specialist(&self) -> bool {
        !matches!(self, DomainLabel::General)
    }

    /// Knowledge-base tools a responder for this domain may use
    pub fn toolset(&self) -> Toolset {
        match self {
            DomainLabel::Experiences => Toolset(&["get_experiences"]),
            DomainLabel::Lodging => Toolset(&["get_lodging"]),
            DomainLabel::Transportation => Toolset(&["get_transportation"]),
            DomainLabel::Database => Toolset(&["lookup_catalog"]),
            DomainLabel::General => Toolset(&[
                "get_experiences",
                "get_lodging",
                "get_transportation",
                "lookup_catalog",
            ]),
        }
    }
}

impl std::fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DomainLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "experiences" | "experience" => Ok(DomainLabel::Experiences),
            "lodging" => Ok(DomainLabel::Lodging),
            "transportation" | "transport" => Ok(DomainLabel::Transportation),
            "database" | "database-lookup" | "database_lookup" => Ok(DomainLabel::Database),
            "general" => Ok(DomainLabel::General),
            other => Err(DomainError::UnknownDomain(other.to_string())),
        }
    }
}

/// Named tools handed to the completion capability alongside a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolset(&'static [&'static str]);

impl Toolset {
    pub const EMPTY: Toolset = Toolset(&[]);

    pub fn names(&self) -> &'static [&'static str] {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tool: &str) -> bool {
        self.0.iter().any(|t| *t == tool)
    }
}

impl std::fmt::Display for Toolset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "database-lookup".parse::<DomainLabel>().unwrap(),
            DomainLabel::Database
        );
        assert_eq!(
            " Lodging ".parse::<DomainLabel>().unwrap(),
            DomainLabel::Lodging
        );
        assert!(matches!(
            "weather".parse::<DomainLabel>(),
            Err(DomainError::UnknownDomain(_))
        ));
    }

    #[test]
    fn test_specialists_exclude_general() {
        assert!(!DomainLabel::SPECIALISTS.contains(&DomainLabel::General));
        assert!(DomainLabel::SPECIALISTS.iter().all(|d| d.is_specialist()));
        assert!(!DomainLabel::General.is_specialist());
    }

    #[test]
    fn test_general_toolset_covers_every_specialist() {
        let general = DomainLabel::General.toolset();
        for domain in DomainLabel::SPECIALISTS {
            for tool in domain.toolset().names() {
                assert!(general.contains(tool), "general is missing {tool}");
            }
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&DomainLabel::Transportation).unwrap();
        assert_eq!(json, "\"transportation\"");
    }
}
