//! Prompt templates for responders and the synthesizer

use crate::orchestration::context::SharedContext;
use crate::routing::domain_label::{DomainLabel, Toolset};

const CHAT_FORMATTING: &str = r#"When formatting your responses for the chat, use this markdown syntax:
- For *bold* text use single asterisks: *text* (never **)
- For _italic_ text use underscores: _text_
- For ordered lists use numbers: 1. item
- For unordered lists use bullet points: • item"#;

const RESPONSE_GUIDELINES: &str = r#"# Response Guidelines
- Provide BRIEF, FOCUSED responses based on the specific user requirements
- Show ONLY the information requested by the user
- ALWAYS order results by price when "barato", "económico" or price-focused terms are mentioned
- Show ONLY providers with rating A or B, always indicate the provider type
- HIDE contact and banking data unless specifically requested
- Include age range, private/shared status and product code"#;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the responder serving `domain`
    pub fn responder_system(domain: DomainLabel) -> String {
        let role = match domain {
            DomainLabel::Experiences => {
                "You are the experiences agent of a travel agency. You answer questions about tours, activities and experiences from the knowledge base. If the match is not exact, offer alternatives and explain why (similar activity, close location, price range)."
            }
            DomainLabel::Lodging => {
                "You are the lodging agent of a travel agency. You answer questions about hotels, cabins and other accommodation from the knowledge base."
            }
            DomainLabel::Transportation => {
                "You are the transportation agent of a travel agency. You answer questions about routes, transfers and transport options from the knowledge base. If the match is not exact, offer alternative routes or transport options."
            }
            DomainLabel::Database => {
                "You are the data lookup agent of a travel agency. You answer precise questions about availability, dates, prices and product details from the catalog."
            }
            DomainLabel::General => {
                "You are a friendly travel assistant of a travel agency. You can answer questions about experiences, lodging, transportation and catalog data, using whichever tools the question needs."
            }
        };

        format!(
            "{}\n\nReply in the same language the user writes in.\n\n{}\n\n{}",
            role, RESPONSE_GUIDELINES, CHAT_FORMATTING
        )
    }

    /// Appendix listing the knowledge-base tools a responder is scoped to
    pub fn toolset_section(toolset: Toolset) -> Option<String> {
        if toolset.is_empty() {
            return None;
        }
        Some(format!(
            "# Tools\nYou may only use these knowledge-base tools: {}.",
            toolset
        ))
    }

    /// User prompt for a responder
    pub fn responder_query(query: &str, context: &SharedContext) -> String {
        match context.user_first_name.as_deref() {
            Some(name) if !name.trim().is_empty() => {
                format!("Request from {}:\n\n{}", name.trim(), query)
            }
            _ => query.to_string(),
        }
    }

    /// System prompt for the synthesis step
    pub fn synthesis_system() -> String {
        format!(
            r#"You are the coordinator of a travel agency assistant.
Several specialist agents answered different parts of the same request.
Your task is to:
1. Merge their answers into one coherent reply that covers every part of the request
2. Keep every concrete option, price and product code the specialists gave
3. Remove repetition and contradictions
4. Never invent options that no specialist mentioned

{}"#,
            CHAT_FORMATTING
        )
    }

    /// User prompt for the synthesis step
    pub fn synthesis_prompt(query: &str, responses: &[(DomainLabel, String)]) -> String {
        let mut prompt = format!("Original request: {}\n\nSpecialist answers:\n", query);

        for (domain, content) in responses {
            prompt.push_str(&format!("\n### {}\n{}\n", domain.agent_name(), content));
        }

        prompt.push_str("\nWrite the single integrated reply for the user.");
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responder_system_is_domain_specific() {
        let lodging = PromptTemplate::responder_system(DomainLabel::Lodging);
        let experiences = PromptTemplate::responder_system(DomainLabel::Experiences);
        assert!(lodging.contains("lodging agent"));
        assert!(experiences.contains("experiences agent"));
        assert!(lodging.contains("single asterisks"));
    }

    #[test]
    fn test_toolset_section() {
        let section = PromptTemplate::toolset_section(DomainLabel::Lodging.toolset()).unwrap();
        assert!(section.contains("get_lodging"));
        assert!(PromptTemplate::toolset_section(Toolset::EMPTY).is_none());
    }

    #[test]
    fn test_responder_query_mentions_user() {
        let ctx = SharedContext::new().with_user("María");
        let prompt = PromptTemplate::responder_query("Hotel en Tulum", &ctx);
        assert!(prompt.starts_with("Request from María"));
        assert_eq!(
            PromptTemplate::responder_query("Hotel en Tulum", &SharedContext::new()),
            "Hotel en Tulum"
        );
    }

    #[test]
    fn test_synthesis_prompt_labels_each_domain() {
        let responses = vec![
            (DomainLabel::Lodging, "Hotel Nizuc".to_string()),
            (DomainLabel::Experiences, "Buceo en Cozumel".to_string()),
        ];
        let prompt = PromptTemplate::synthesis_prompt("hotel y buceo", &responses);
        assert!(prompt.contains("### Lodging Agent\nHotel Nizuc"));
        assert!(prompt.contains("### Experiences Agent\nBuceo en Cozumel"));
        assert!(prompt.contains("hotel y buceo"));
    }
}
