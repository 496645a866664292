//! Read-only context shared by every concurrently running responder

use serde::{Deserialize, Serialize};

/// Who is asking and where the answer goes
///
/// Built once per request by the caller and only ever read afterwards; it is
/// the single object visible to more than one concurrent task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

impl SharedContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, first_name: impl Into<String>) -> Self {
        self.user_first_name = Some(first_name.into());
        self
    }

    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    pub fn with_thread(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    /// Identifier of the conversation, `"{channel}_{thread}"` or `"default"`
    pub fn conversation_id(&self) -> String {
        match (&self.channel_id, &self.thread_id) {
            (Some(channel), Some(thread)) => format!("{}_{}", channel, thread),
            _ => "default".to_string(),
        }
    }
}
