//! Query routing domain
//!
//! Maps query text onto the closed set of topical domains and decides
//! whether the query is worth fanning out.
//!
//! - [`domain_label::DomainLabel`]: the fixed domain set
//! - [`keywords::KeywordTable`]: domain → keyword mapping
//! - [`classifier::DomainClassifier`]: deterministic keyword classifier
//! - [`analysis::QueryAnalysis`]: classification output

pub mod analysis;
pub mod classifier;
pub mod domain_label;
pub mod keywords;
