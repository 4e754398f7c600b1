#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use dashmap::DashMap;
use once_cell::sync::Lazy;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(PartialEq, Eq)]
pub enum ConfigKey {
    Persona,
    SpeechInput,
    SpeechTranscript,
    Username,
}

impl ToString for ConfigKey {
    fn to_string(&self) -> String {
        match self {
            ConfigKey::Persona => return String::from("persona"),
            ConfigKey::SpeechInput => return String::from("speech-input"),
            ConfigKey::SpeechTranscript => return String::from("speech-transcript"),
            ConfigKey::Username => return String::from("username"),
        }
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }
}
