use super::MessageLog;
use crate::domain::models::Message;
use crate::domain::models::Sender;

#[test]
fn it_assigns_ids_starting_at_one() {
    let mut log = MessageLog::default();
    let id = log.append(Message::user("Hello"));
    assert_eq!(id, 1);
    assert_eq!(log.all()[0].id, 1);
}

#[test]
fn it_assigns_strictly_increasing_ids() {
    let mut log = MessageLog::default();
    let first = log.append(Message::user("one"));
    let second = log.append(Message::user("two"));
    let third = log.append(Message::user("three"));

    assert!(first < second && second < third);

    let ids = log.all().iter().map(|m| return m.id).collect::<Vec<u64>>();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn it_preserves_append_order() {
    let mut log = MessageLog::default();
    log.append(Message::user("first"));
    log.append(Message::user("second"));

    assert_eq!(log.len(), 2);
    assert_eq!(log.all()[0].text, "first");
    assert_eq!(log.all()[1].text, "second");
    assert_eq!(log.all()[0].sender, Sender::User);
}

#[test]
fn it_never_reuses_ids_after_clear() {
    let mut log = MessageLog::default();
    log.append(Message::user("one"));
    log.append(Message::user("two"));
    log.clear();

    assert!(log.is_empty());

    let id = log.append(Message::user("three"));
    assert_eq!(id, 3);
}
