#[cfg(test)]
#[path = "noop_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::models::Event;
use crate::domain::models::SpeechInput;
use crate::domain::models::SpeechInputName;

/// Stands in when no capture capability exists on the runtime. Starting a
/// capture succeeds and emits nothing, so the microphone affordance simply
/// has no effect.
#[derive(Default)]
pub struct NoopSpeech {}

#[async_trait]
impl SpeechInput for NoopSpeech {
    fn name(&self) -> SpeechInputName {
        return SpeechInputName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn start_capture<'a>(&self, _tx: &'a mpsc::UnboundedSender<Event>) -> Result<()> {
        return Ok(());
    }
}
