//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Language used for user-facing texts produced by the orchestrator itself.
///
/// Responder output is whatever the model writes; the locale only selects
/// built-in messages such as the final error reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = std::convert::Infallible;

    /// Accepts language tags like `es`, `es-MX` or `en_US`; anything
    /// unrecognized falls back to Spanish.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Ok(match lang.as_str() {
            "en" => Locale::En,
            _ => Locale::Es,
        })
    }
}

/// An inbound natural-language request (Value Object)
///
/// Created once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locale: Option<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conversation_id: Option<String>,
}

impl Query {
    /// Create a new query, rejecting empty or whitespace-only text
    pub fn try_new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self {
            text,
            locale: None,
            conversation_id: None,
        })
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_conversation_id(mut self, id: impl Into<String>) -> Self {
        self.conversation_id = Some(id.into());
        self
    }

    /// The raw text as received
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-folded text with collapsed whitespace, used for classification
    pub fn normalized(&self) -> String {
        normalize(&self.text)
    }

    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    /// Locale to use for built-in messages
    pub fn effective_locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Lowercase `text`, trim it and collapse internal whitespace runs.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
