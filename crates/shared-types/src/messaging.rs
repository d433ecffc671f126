use serde::{Deserialize, Serialize};

use crate::{CaseSummary, Role};

/// Longest message body the composer accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: String,
    pub body: String,
    /// ISO-8601 timestamp.
    pub sent_at: String,
    /// True when the signed-in user wrote it.
    pub outgoing: bool,
}

/// A thread with one counterpart, held locally by the messages view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: String,
    pub participant: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub unread: u32,
}

impl Conversation {
    pub fn new(id: impl Into<String>, participant: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            participant: participant.into(),
            messages: Vec::new(),
            unread: 0,
        }
    }

    /// Append a message typed by the signed-in user.
    ///
    /// Whitespace is trimmed. Blank bodies and bodies over
    /// `MAX_MESSAGE_CHARS` are ignored and return `None`.
    pub fn push_outgoing(&mut self, sender: &str, body: &str, sent_at: &str) -> Option<&ChatMessage> {
        let body = body.trim();
        if body.is_empty() || body.chars().count() > MAX_MESSAGE_CHARS {
            return None;
        }
        let id = self.messages.last().map(|m| m.id + 1).unwrap_or(1);
        self.messages.push(ChatMessage {
            id,
            sender: sender.to_string(),
            body: body.to_string(),
            sent_at: sent_at.to_string(),
            outgoing: true,
        });
        self.messages.last()
    }

    /// Text of the newest message, for the conversation list.
    pub fn preview(&self) -> &str {
        self.messages.last().map(|m| m.body.as_str()).unwrap_or("")
    }

    pub fn mark_read(&mut self) {
        self.unread = 0;
    }
}

/// One thread per case counterpart: clients talk to the assigned lawyer,
/// lawyers to the client. Cases without a counterpart are skipped and a
/// counterpart shared by several cases gets a single thread.
pub fn conversations_for(role: Role, cases: &[CaseSummary]) -> Vec<Conversation> {
    let mut threads: Vec<Conversation> = Vec::new();
    for case in cases {
        let counterpart = match role {
            Role::Client => case.lawyer_name.as_deref(),
            Role::Lawyer => case.client_name.as_deref(),
            Role::Admin => None,
        };
        let Some(name) = counterpart.map(str::trim).filter(|n| !n.is_empty()) else {
            continue;
        };
        if threads.iter().all(|t| t.participant != name) {
            threads.push(Conversation::new(case.id.clone(), name));
        }
    }
    threads
}
