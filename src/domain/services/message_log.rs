#[cfg(test)]
#[path = "message_log_test.rs"]
mod tests;

use crate::domain::models::Message;

const FIRST_MESSAGE_ID: u64 = 1;

/// Append-only record of the conversation. The log owns identifier
/// assignment: ids strictly increase and are never reused within a process,
/// even after a clear, so two appends can never collide no matter how close
/// together they land.
#[derive(Debug)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for MessageLog {
    fn default() -> MessageLog {
        return MessageLog {
            messages: vec![],
            next_id: FIRST_MESSAGE_ID,
        };
    }
}

impl MessageLog {
    pub fn append(&mut self, mut message: Message) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        message.id = id;
        self.messages.push(message);

        return id;
    }

    pub fn all(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.messages.is_empty();
    }

    /// Empties the log. The id counter is left alone on purpose.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
