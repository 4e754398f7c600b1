#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use tokio::sync::mpsc;

use super::MessageLog;
use super::OverlayController;
use super::Synthesizer;
use crate::config::Config;
use crate::config::ConfigKey;
use crate::domain::models::Event;
use crate::domain::models::MenuBehavior;
use crate::domain::models::MenuEntry;
use crate::domain::models::Message;
use crate::domain::models::Overlay;
use crate::domain::models::PersonaId;

// "instellingen" is the Dutch spelling the original UI also intercepted.
const SETTINGS_KEYWORDS: [&str; 2] = ["settings", "instellingen"];

fn is_settings_command(text: &str) -> bool {
    let lowered = text.to_lowercase();
    return SETTINGS_KEYWORDS.iter().any(|e| return lowered.contains(e));
}

/// The conversation session. Owns every mutable cell of the UI state and is
/// only ever touched from the UI task; async work reaches it exclusively
/// through the event channel.
pub struct Session {
    pub log: MessageLog,
    pub overlays: OverlayController,
    pub active_persona: PersonaId,
    pub composer: String,
    pub listening: bool,
    pub dev_mode: bool,
    synthesizer: Synthesizer,
}

impl Session {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> Session {
        let active_persona = PersonaId::parse(&Config::get(ConfigKey::Persona))
            .unwrap_or_else(PersonaId::default_persona);

        return Session {
            log: MessageLog::default(),
            overlays: OverlayController::default(),
            active_persona,
            composer: String::new(),
            listening: false,
            dev_mode: false,
            synthesizer: Synthesizer::new(tx),
        };
    }

    /// Submits the composer. Blank input is a silent no-op. A settings
    /// keyword anywhere in the text opens the Settings overlay instead of
    /// appending anything, taking precedence over the active persona.
    pub fn submit(&mut self) {
        let text = self.composer.trim().to_string();
        if text.is_empty() {
            return;
        }

        if is_settings_command(&text) {
            self.overlays.open(Overlay::Settings);
            self.composer.clear();
            return;
        }

        self.log.append(Message::user(&text));
        self.composer.clear();
        self.synthesizer.spawn(self.active_persona, &text);
    }

    pub fn switch_persona(&mut self, persona: PersonaId) {
        self.active_persona = persona;
        self.overlays.close(Overlay::PersonaPicker);
    }

    /// String-boundary variant. Unrecognized names fall back to the default
    /// persona rather than erroring.
    pub fn switch_persona_by_name(&mut self, name: &str) {
        let persona = PersonaId::parse(name).unwrap_or_else(|| {
            tracing::warn!(name, "unknown persona, falling back to default");
            return PersonaId::default_persona();
        });

        self.switch_persona(persona);
    }

    /// Applies a menu row from the overlay named by `source`. Composer
    /// mutation and overlay close happen here in one synchronous step, so
    /// the next render never sees one without the other.
    pub fn run_menu_entry(&mut self, source: Overlay, entry: &MenuEntry) {
        match entry.behavior {
            MenuBehavior::StageComposer(text) => {
                self.composer = text.to_string();
                self.overlays.close(source);
            }
            MenuBehavior::StageAndSubmit(text) => {
                self.composer = text.to_string();
                self.overlays.close(source);
                self.submit();
            }
            MenuBehavior::OpenOverlay(overlay) => {
                self.overlays.open(overlay);
            }
            MenuBehavior::SwitchPersona(persona) => {
                self.switch_persona(persona);
            }
        }
    }

    /// Turns the staged Cooking query into a recipe prompt and submits it.
    pub fn submit_cooking_search(&mut self) {
        let query = self.overlays.cooking_query.trim().to_string();
        if query.is_empty() {
            return;
        }

        self.composer = format!("Find me a recipe for {query}");
        self.overlays.close(Overlay::Cooking);
        self.submit();
    }

    pub fn handle_reply(&mut self, message: Message) {
        self.log.append(message);
    }

    pub fn handle_speech_capture_started(&mut self) {
        self.listening = true;
    }

    pub fn handle_speech_transcript(&mut self, transcript: String) {
        self.composer = transcript;
        self.listening = false;
    }

    pub fn handle_speech_capture_ended(&mut self) {
        self.listening = false;
    }

    pub fn toggle_dev_mode(&mut self) {
        self.dev_mode = !self.dev_mode;
    }

    /// Starts the conversation over. Message ids keep counting up.
    pub fn reset(&mut self) {
        self.log.clear();
        self.composer.clear();
    }
}
