use tokio::sync::mpsc;

use super::NoopSpeech;
use crate::domain::models::Event;
use crate::domain::models::SpeechInput;
use crate::domain::models::SpeechInputName;

#[tokio::test]
async fn it_reports_its_name() {
    let speech = NoopSpeech::default();
    assert_eq!(speech.name(), SpeechInputName::None);
}

#[tokio::test]
async fn it_passes_health_check() {
    let speech = NoopSpeech::default();
    assert!(speech.health_check().await.is_ok());
}

#[tokio::test]
async fn it_emits_no_events_on_capture() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let speech = NoopSpeech::default();

    speech.start_capture(&tx).await.unwrap();

    assert!(rx.try_recv().is_err());
}
