//! Classification output

use super::classifier::ParallelPolicy;
use super::domain_label::DomainLabel;
use serde::{Deserialize, Serialize};

/// Rough size of a query, derived from how many domains it touches
///
/// Informational only; control flow uses the parallel threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub fn from_domain_count(count: usize) -> Self {
        match count {
            0 | 1 => Complexity::Simple,
            2 => Complexity::Moderate,
            _ => Complexity::Complex,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying one query (Value Object)
///
/// `domains` is never empty and holds no duplicates. When nothing matched
/// it is exactly `[General]` and `should_parallelize` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    domains: Vec<DomainLabel>,
    complexity: Complexity,
    should_parallelize: bool,
}

impl QueryAnalysis {
    /// Build an analysis from detected domains, applying the parallel policy
    pub fn from_detected(detected: Vec<DomainLabel>, policy: &ParallelPolicy) -> Self {
        let mut domains: Vec<DomainLabel> = Vec::with_capacity(detected.len());
        for domain in detected {
            if domain.is_specialist() && !domains.contains(&domain) {
                domains.push(domain);
            }
        }

        if domains.is_empty() {
            return Self::general();
        }

        Self {
            complexity: Complexity::from_domain_count(domains.len()),
            should_parallelize: policy.allows(domains.len()),
            domains,
        }
    }

    /// The analysis of a query that matched no domain
    pub fn general() -> Self {
        Self {
            domains: vec![DomainLabel::General],
            complexity: Complexity::Simple,
            should_parallelize: false,
        }
    }

    pub fn domains(&self) -> &[DomainLabel] {
        &self.domains
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn should_parallelize(&self) -> bool {
        self.should_parallelize
    }

    /// True when nothing matched and the query defaulted to `General`
    pub fn is_general(&self) -> bool {
        self.domains == [DomainLabel::General]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_tiers() {
        assert_eq!(Complexity::from_domain_count(0), Complexity::Simple);
        assert_eq!(Complexity::from_domain_count(1), Complexity::Simple);
        assert_eq!(Complexity::from_domain_count(2), Complexity::Moderate);
        assert_eq!(Complexity::from_domain_count(4), Complexity::Complex);
    }

    #[test]
    fn test_empty_detection_defaults_to_general() {
        let analysis = QueryAnalysis::from_detected(vec![], &ParallelPolicy::default());
        assert!(analysis.is_general());
        assert!(!analysis.should_parallelize());
        assert_eq!(analysis.complexity(), Complexity::Simple);
    }

    #[test]
    fn test_duplicates_removed_in_order() {
        let analysis = QueryAnalysis::from_detected(
            vec![
                DomainLabel::Lodging,
                DomainLabel::Experiences,
                DomainLabel::Lodging,
            ],
            &ParallelPolicy::default(),
        );
        assert_eq!(
            analysis.domains(),
            &[DomainLabel::Lodging, DomainLabel::Experiences]
        );
        assert!(analysis.should_parallelize());
        assert_eq!(analysis.complexity(), Complexity::Moderate);
    }

    #[test]
    fn test_general_mixed_with_specialists_is_dropped() {
        let analysis = QueryAnalysis::from_detected(
            vec![DomainLabel::General, DomainLabel::Database],
            &ParallelPolicy::default(),
        );
        assert_eq!(analysis.domains(), &[DomainLabel::Database]);
        assert!(!analysis.is_general());
    }
}
