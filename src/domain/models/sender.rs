use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::PersonaId;
use crate::config::Config;
use crate::config::ConfigKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Persona(PersonaId),
}

impl ToString for Sender {
    fn to_string(&self) -> String {
        match self {
            Sender::User => {
                let username = Config::get(ConfigKey::Username);
                if username.is_empty() {
                    return String::from("user");
                }
                return username;
            }
            Sender::Persona(id) => return id.to_string(),
        }
    }
}
