use super::PersonaId;

#[test]
fn it_parses_known_ids() {
    assert_eq!(PersonaId::parse("samantha"), Some(PersonaId::Samantha));
    assert_eq!(PersonaId::parse("claude"), Some(PersonaId::Claude));
    assert_eq!(PersonaId::parse("mistral"), Some(PersonaId::Mistral));
}

#[test]
fn it_parses_case_insensitively() {
    assert_eq!(PersonaId::parse("ChatGPT"), Some(PersonaId::ChatGPT));
    assert_eq!(PersonaId::parse("GEMINI"), Some(PersonaId::Gemini));
}

#[test]
fn it_rejects_unknown_ids() {
    assert!(PersonaId::parse("hal9000").is_none());
    assert!(PersonaId::parse("").is_none());
}

#[test]
fn it_displays_lowercase() {
    assert_eq!(PersonaId::Llama.to_string(), "llama");
}

#[test]
fn it_defaults_to_samantha() {
    assert_eq!(PersonaId::default_persona(), PersonaId::Samantha);
}
