//! Deterministic keyword classifier
//!
//! Maps query text to the set of domains it mentions. Pure function of the
//! normalized text and the configured keyword table; never fails.

use super::analysis::QueryAnalysis;
use super::keywords::KeywordTable;
use crate::core::query::{Query, normalize};
use serde::{Deserialize, Serialize};

/// Default minimum number of detected domains for the parallel path
pub const DEFAULT_MIN_DOMAINS_FOR_PARALLEL: usize = 2;

/// When a query is worth fanning out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelPolicy {
    enabled: bool,
    min_domains: usize,
}

impl Default for ParallelPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            min_domains: DEFAULT_MIN_DOMAINS_FOR_PARALLEL,
        }
    }
}

impl ParallelPolicy {
    /// Create a policy. A threshold of zero is raised to one.
    pub fn new(enabled: bool, min_domains: usize) -> Self {
        Self {
            enabled,
            min_domains: min_domains.max(1),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn min_domains(&self) -> usize {
        self.min_domains
    }

    /// Whether `domain_count` detected domains should run in parallel
    pub fn allows(&self, domain_count: usize) -> bool {
        self.enabled && domain_count >= self.min_domains
    }
}

/// Keyword-based domain classifier
#[derive(Debug, Clone, Default)]
pub struct DomainClassifier {
    keywords: KeywordTable,
    policy: ParallelPolicy,
}

impl DomainClassifier {
    pub fn new(keywords: KeywordTable, policy: ParallelPolicy) -> Self {
        Self { keywords, policy }
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn policy(&self) -> &ParallelPolicy {
        &self.policy
    }

    pub fn classify(&self, query: &Query) -> QueryAnalysis {
        self.classify_normalized(&query.normalized())
    }

    /// Classify raw text (normalized here)
    pub fn classify_text(&self, text: &str) -> QueryAnalysis {
        self.classify_normalized(&normalize(text))
    }

    fn classify_normalized(&self, normalized: &str) -> QueryAnalysis {
        let detected = self.keywords.detect(normalized);
        QueryAnalysis::from_detected(detected, &self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::analysis::Complexity;
    use crate::routing::domain_label::DomainLabel;

    #[test]
    fn test_multi_domain_query_parallelizes() {
        let classifier = DomainClassifier::default();
        let analysis = classifier.classify_text("Dame hotel en Cancún y tours de buceo");
        assert_eq!(
            analysis.domains(),
            &[DomainLabel::Experiences, DomainLabel::Lodging]
        );
        assert!(analysis.should_parallelize());
        assert_eq!(analysis.complexity(), Complexity::Moderate);
    }

    #[test]
    fn test_single_domain_query_stays_sequential() {
        let classifier = DomainClassifier::default();
        let analysis = classifier.classify_text("¿Hoteles en Playa del Carmen?");
        assert_eq!(analysis.domains(), &[DomainLabel::Lodging]);
        assert!(!analysis.should_parallelize());
    }

    #[test]
    fn test_single_domain_never_parallel_even_when_enabled() {
        let classifier =
            DomainClassifier::new(KeywordTable::builtin(), ParallelPolicy::new(true, 2));
        let analysis = classifier.classify_text("quiero un hotel");
        assert_eq!(analysis.domains(), &[DomainLabel::Lodging]);
        assert!(!analysis.should_parallelize());
    }

    #[test]
    fn test_disabled_policy_blocks_parallel() {
        let classifier = DomainClassifier::new(KeywordTable::builtin(), ParallelPolicy::disabled());
        let analysis = classifier.classify_text("hotel y tours");
        assert_eq!(analysis.domains().len(), 2);
        assert!(!analysis.should_parallelize());
    }

    #[test]
    fn test_no_match_is_general() {
        let classifier = DomainClassifier::default();
        let analysis = classifier.classify_text("¿Cuál es el clima hoy?");
        assert!(analysis.is_general());
        assert!(!analysis.should_parallelize());
    }

    #[test]
    fn test_classification_is_deterministic_over_normalization() {
        let classifier = DomainClassifier::default();
        let a = classifier.classify_text("HOTEL y Transfer");
        let b = classifier.classify_text("  hotel   y transfer ");
        assert_eq!(a, b);
    }

    #[test]
    fn test_threshold_one_and_zero_clamped() {
        let policy = ParallelPolicy::new(true, 0);
        assert_eq!(policy.min_domains(), 1);
        let classifier = DomainClassifier::new(KeywordTable::builtin(), policy);
        assert!(classifier.classify_text("un taxi").should_parallelize());
        assert!(!classifier.classify_text("hola").should_parallelize());
    }

    #[test]
    fn test_complex_query() {
        let classifier = DomainClassifier::default();
        let analysis = classifier.classify_text(
            "Dame opciones de alojamiento en Tulum, experiencias de yoga y disponibilidad para julio",
        );
        assert_eq!(
            analysis.domains(),
            &[
                DomainLabel::Experiences,
                DomainLabel::Lodging,
                DomainLabel::Database
            ]
        );
        assert_eq!(analysis.complexity(), Complexity::Complex);
    }
}
