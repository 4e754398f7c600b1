pub mod noop;
pub mod scripted;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::SpeechInputBox;
use crate::domain::models::SpeechInputName;

pub struct SpeechInputManager {}

impl SpeechInputManager {
    pub fn get(name: SpeechInputName) -> Result<SpeechInputBox> {
        if name == SpeechInputName::None {
            return Ok(Box::<noop::NoopSpeech>::default());
        }

        if name == SpeechInputName::Scripted {
            return Ok(Box::<scripted::ScriptedSpeech>::default());
        }

        bail!(format!("No speech input implemented for {name}"))
    }
}
