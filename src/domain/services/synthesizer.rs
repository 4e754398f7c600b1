#[cfg(test)]
#[path = "synthesizer_test.rs"]
mod tests;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::time;
use tokio::time::Duration;

use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::PersonaId;
use crate::infrastructure::personas::PersonaRegistry;

pub const THINKING_DELAY: Duration = Duration::from_secs(1);

const THOUGHT_TRACE: [&str; 3] = [
    "Analyzing user request...",
    "Considering context and tone...",
    "Formulating helpful response...",
];

/// Produces persona replies off the UI task. Each submission gets its own
/// task, so overlapping submissions synthesize independently and deliver in
/// completion order. A spawned synthesis is never cancelled; it always
/// eventually delivers, even if the persona or overlay changed in flight.
pub struct Synthesizer {
    delay: Duration,
    tx: mpsc::UnboundedSender<Event>,
}

impl Synthesizer {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> Synthesizer {
        return Synthesizer {
            delay: THINKING_DELAY,
            tx,
        };
    }

    pub fn spawn(&self, persona: PersonaId, user_text: &str) {
        let delay = self.delay;
        let tx = self.tx.clone();
        let text = user_text.to_string();

        tracing::debug!(persona = %persona, "spawning synthesis");

        tokio::spawn(async move {
            time::sleep(delay).await;

            let reply_text = PersonaRegistry::generate_reply(persona, &text);
            let confidence = rand::thread_rng().gen_range(80..=99);
            let thoughts = THOUGHT_TRACE
                .iter()
                .map(|e| return e.to_string())
                .collect::<Vec<String>>();

            let message = Message::reply(persona, &reply_text, confidence, thoughts);

            // The UI loop is the only writer of the log; a send can only
            // fail during shutdown when the receiver is gone.
            let _ = tx.send(Event::ReplyReady(message));
        });
    }
}
