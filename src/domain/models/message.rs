#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::Local;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::PersonaId;
use super::Sender;

fn display_timestamp() -> String {
    return Local::now().format("%H:%M").to_string();
}

/// One exchanged message. The identifier is assigned by the message log on
/// append; the timestamp is frozen at creation and never recomputed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: String,
    pub confidence: Option<u8>,
    pub thoughts: Vec<String>,
}

impl Message {
    pub fn user(text: &str) -> Message {
        return Message {
            id: 0,
            sender: Sender::User,
            text: text.to_string(),
            timestamp: display_timestamp(),
            confidence: None,
            thoughts: vec![],
        };
    }

    pub fn reply(persona: PersonaId, text: &str, confidence: u8, thoughts: Vec<String>) -> Message {
        return Message {
            id: 0,
            sender: Sender::Persona(persona),
            text: text.to_string(),
            timestamp: display_timestamp(),
            confidence: Some(confidence),
            thoughts,
        };
    }

    pub fn is_reply(&self) -> bool {
        return !self.thoughts.is_empty();
    }
}
