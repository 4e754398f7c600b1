use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;

use super::Event;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SpeechInputName {
    None,
    Scripted,
}

impl SpeechInputName {
    pub fn parse(text: &str) -> Option<SpeechInputName> {
        return SpeechInputName::iter().find(|e| return e.to_string() == text);
    }
}

/// A single-shot voice capture capability. A capture emits at most one
/// started / transcript / ended event triple on the provided channel; there
/// are no interim results and no continuous mode.
#[async_trait]
pub trait SpeechInput {
    /// Returns the name of the speech input source.
    fn name(&self) -> SpeechInputName;

    /// Used at startup to verify the capture capability can run.
    async fn health_check(&self) -> Result<()>;

    /// Begins a capture. Sources without a usable device must return Ok
    /// without emitting any events, so the session state stays untouched.
    async fn start_capture<'a>(&self, tx: &'a mpsc::UnboundedSender<Event>) -> Result<()>;
}

pub type SpeechInputBox = Box<dyn SpeechInput + Send + Sync>;
