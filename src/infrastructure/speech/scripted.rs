#[cfg(test)]
#[path = "scripted_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time;
use tokio::time::Duration;

use crate::config::Config;
use crate::config::ConfigKey;
use crate::domain::models::Event;
use crate::domain::models::SpeechInput;
use crate::domain::models::SpeechInputName;

const CAPTURE_DELAY: Duration = Duration::from_millis(250);
const DEFAULT_TRANSCRIPT: &str = "What can you do?";

/// Plays back a configured transcript as if a recognizer heard it. Single
/// shot: one started event, one final transcript, one ended event.
pub struct ScriptedSpeech {
    delay: Duration,
}

impl Default for ScriptedSpeech {
    fn default() -> ScriptedSpeech {
        return ScriptedSpeech {
            delay: CAPTURE_DELAY,
        };
    }
}

#[async_trait]
impl SpeechInput for ScriptedSpeech {
    fn name(&self) -> SpeechInputName {
        return SpeechInputName::Scripted;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn start_capture<'a>(&self, tx: &'a mpsc::UnboundedSender<Event>) -> Result<()> {
        let mut transcript = Config::get(ConfigKey::SpeechTranscript);
        if transcript.is_empty() {
            transcript = DEFAULT_TRANSCRIPT.to_string();
        }

        tx.send(Event::SpeechCaptureStarted())?;
        time::sleep(self.delay).await;
        tx.send(Event::SpeechTranscript(transcript))?;
        tx.send(Event::SpeechCaptureEnded())?;

        return Ok(());
    }
}
