#[cfg(test)]
#[path = "persona_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    EnumIter,
    EnumVariantNames,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum PersonaId {
    Samantha,
    ChatGPT,
    Claude,
    Gemini,
    Llama,
    Mistral,
}

impl PersonaId {
    pub fn parse(text: &str) -> Option<PersonaId> {
        return PersonaId::iter().find(|e| return e.to_string() == text.to_lowercase());
    }

    /// The persona a fresh session starts with, and the one unrecognized
    /// identifiers fall back to.
    pub fn default_persona() -> PersonaId {
        return PersonaId::Samantha;
    }
}

/// A selectable reply-generation profile. The catalog is fixed at process
/// start and owned by the persona registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Persona {
    pub id: PersonaId,
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}
