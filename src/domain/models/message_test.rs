use super::Message;
use super::PersonaId;
use super::Sender;

#[test]
fn it_creates_a_user_message() {
    let msg = Message::user("Hello there");
    assert_eq!(msg.sender, Sender::User);
    assert_eq!(msg.text, "Hello there");
    assert_eq!(msg.confidence, None);
    assert!(msg.thoughts.is_empty());
    assert!(!msg.is_reply());
}

#[test]
fn it_creates_a_reply_message() {
    let thoughts = vec!["Analyzing user request...".to_string()];
    let msg = Message::reply(PersonaId::Claude, "Hi there!", 92, thoughts);
    assert_eq!(msg.sender, Sender::Persona(PersonaId::Claude));
    assert_eq!(msg.text, "Hi there!");
    assert_eq!(msg.confidence, Some(92));
    assert_eq!(msg.thoughts.len(), 1);
    assert!(msg.is_reply());
}

#[test]
fn it_freezes_a_short_timestamp_at_creation() {
    let msg = Message::user("Hello");
    let parts = msg.timestamp.split(':').collect::<Vec<&str>>();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].len(), 2);
    assert_eq!(parts[1].len(), 2);
}
