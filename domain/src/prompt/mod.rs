//! Prompt domain
//!
//! Templates for the specialist, general and synthesis completion calls.

mod template;

pub use template::PromptTemplate;
