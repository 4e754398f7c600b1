#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

use crate::domain::models::Persona;
use crate::domain::models::PersonaId;

/// Static catalog of selectable personas and their reply rules. Reply
/// generation is pure: the same persona always answers with the same canned
/// text, and Samantha ignores the user text entirely.
pub struct PersonaRegistry {}

impl PersonaRegistry {
    pub fn list() -> Vec<Persona> {
        return vec![
            Persona {
                id: PersonaId::Samantha,
                icon: "∞",
                name: "Samantha",
                description: "Your personal AI companion",
            },
            Persona {
                id: PersonaId::ChatGPT,
                icon: "🤖",
                name: "ChatGPT",
                description: "OpenAI - General purpose",
            },
            Persona {
                id: PersonaId::Claude,
                icon: "🎭",
                name: "Claude",
                description: "Anthropic - Thoughtful AI",
            },
            Persona {
                id: PersonaId::Gemini,
                icon: "💎",
                name: "Gemini",
                description: "Google - Multimodal AI",
            },
            Persona {
                id: PersonaId::Llama,
                icon: "🦙",
                name: "LLaMA",
                description: "Meta - Open source",
            },
            Persona {
                id: PersonaId::Mistral,
                icon: "🌬️",
                name: "Mistral",
                description: "Mistral AI - Efficient",
            },
        ];
    }

    pub fn get(id: PersonaId) -> Persona {
        // The catalog covers every PersonaId variant, so the lookup always
        // lands.
        return PersonaRegistry::list()
            .into_iter()
            .find(|e| return e.id == id)
            .unwrap_or(PersonaRegistry::list()[0]);
    }

    pub fn generate_reply(id: PersonaId, _user_text: &str) -> String {
        match id {
            PersonaId::Samantha => {
                return String::from(
                    "Hello! I'm Samantha, your AI companion. From my perspective as an AI, I find our conversation fascinating. I'm here to help you with whatever you need, whether it's creative projects, problem-solving, or just having a thoughtful discussion. What would you like to explore together?",
                );
            }
            PersonaId::ChatGPT => {
                return String::from(
                    "Hello! I'm ChatGPT, an AI assistant created by OpenAI. I'm designed to be helpful, harmless, and honest. How can I assist you today?",
                );
            }
            PersonaId::Claude => {
                return String::from(
                    "Hi there! I'm Claude, an AI assistant made by Anthropic. I aim to be helpful, harmless, and honest in our conversations. What can I help you with?",
                );
            }
            PersonaId::Gemini => {
                return String::from(
                    "Hello! I'm Gemini, Google's AI assistant. I'm here to help with a wide range of tasks and questions. How can I assist you today?",
                );
            }
            PersonaId::Llama => {
                return String::from(
                    "Hi! I'm LLaMA, Meta's open-source language model. I'm here to help with various tasks and conversations. What can I do for you?",
                );
            }
            PersonaId::Mistral => {
                return String::from(
                    "Hello! I'm Mistral, a high-performance AI assistant. I'm designed to be efficient and helpful. How can I assist you today?",
                );
            }
        }
    }
}
