//! Domain routing settings from TOML (`[routing]` section)

use rutobot_domain::{ConfigIssue, ConfigIssueCode, DomainLabel, KeywordTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Domain routing settings
///
/// # Example
///
/// ```toml
/// [routing.agents]
/// database = false           # never detect the database domain
///
/// [routing.keywords]
/// lodging = ["hotel", "hostal", "glamping"]   # replaces the built-in list
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoutingConfig {
    pub agents: FileAgentToggles,
    /// Keyword overrides keyed by domain name
    pub keywords: BTreeMap<String, Vec<String>>,
}

/// Per-domain on/off switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentToggles {
    pub experiences: bool,
    pub lodging: bool,
    pub transportation: bool,
    pub database: bool,
}

impl Default for FileAgentToggles {
    fn default() -> Self {
        Self {
            experiences: true,
            lodging: true,
            transportation: true,
            database: true,
        }
    }
}

impl FileAgentToggles {
    pub fn is_enabled(&self, domain: DomainLabel) -> bool {
        match domain {
            DomainLabel::Experiences => self.experiences,
            DomainLabel::Lodging => self.lodging,
            DomainLabel::Transportation => self.transportation,
            DomainLabel::Database => self.database,
            DomainLabel::General => true,
        }
    }

    pub fn enabled_domains(&self) -> Vec<DomainLabel> {
        DomainLabel::SPECIALISTS
            .into_iter()
            .filter(|d| self.is_enabled(*d))
            .collect()
    }
}

impl FileRoutingConfig {
    fn parse_key(key: &str) -> Option<DomainLabel> {
        key.parse::<DomainLabel>()
            .ok()
            .filter(DomainLabel::is_specialist)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (key, words) in &self.keywords {
            if Self::parse_key(key).is_none() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownDomain { key: key.clone() },
                    format!("routing.keywords.{}: unknown domain, ignored", key),
                ));
                continue;
            }

            if words.is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyKeywordList {
                        domain: key.clone(),
                    },
                    format!(
                        "routing.keywords.{}: empty list; disable the domain under [routing.agents] instead",
                        key
                    ),
                ));
            } else if words.iter().any(|w| w.trim().is_empty()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyKeyword {
                        domain: key.clone(),
                    },
                    format!("routing.keywords.{}: blank keyword dropped", key),
                ));
            }
        }

        issues
    }

    /// Built-in table with overrides applied and disabled domains removed
    pub fn to_keyword_table(&self) -> KeywordTable {
        let mut table = KeywordTable::builtin();

        for (key, words) in &self.keywords {
            if let Some(domain) = Self::parse_key(key) {
                table = table.with_keywords(domain, words);
            }
        }

        for domain in DomainLabel::SPECIALISTS {
            if !self.agents.is_enabled(domain) {
                table = table.without(domain);
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_agent_is_never_detected() {
        let config = FileRoutingConfig {
            agents: FileAgentToggles {
                lodging: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let table = config.to_keyword_table();
        assert!(!table.domains().any(|d| d == DomainLabel::Lodging));
        assert!(table.detect("hotel en tulum").is_empty());
        assert_eq!(config.agents.enabled_domains().len(), 3);
    }

    #[test]
    fn test_keyword_override_replaces_builtin() {
        let mut keywords = BTreeMap::new();
        keywords.insert("lodging".to_string(), vec!["Glamping".to_string()]);
        let config = FileRoutingConfig {
            keywords,
            ..Default::default()
        };

        let table = config.to_keyword_table();
        assert_eq!(table.keywords(DomainLabel::Lodging), &["glamping".to_string()]);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_keyword_issues() {
        let mut keywords = BTreeMap::new();
        keywords.insert("weather".to_string(), vec!["lluvia".to_string()]);
        keywords.insert("lodging".to_string(), vec![]);
        keywords.insert("experiences".to_string(), vec!["tour".to_string(), " ".to_string()]);
        let config = FileRoutingConfig {
            keywords,
            ..Default::default()
        };

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| i.is_error()
            && i.code
                == ConfigIssueCode::EmptyKeywordList {
                    domain: "lodging".to_string()
                }));
        assert!(issues.iter().any(|i| !i.is_error()
            && i.code
                == ConfigIssueCode::UnknownDomain {
                    key: "weather".to_string()
                }));
        assert!(issues.iter().any(|i| !i.is_error()
            && i.code
                == ConfigIssueCode::EmptyKeyword {
                    domain: "experiences".to_string()
                }));
    }
}
