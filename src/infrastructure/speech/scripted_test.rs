use tokio::sync::mpsc;

use super::ScriptedSpeech;
use crate::domain::models::Event;
use crate::domain::models::SpeechInput;
use crate::domain::models::SpeechInputName;

#[tokio::test(start_paused = true)]
async fn it_emits_started_transcript_ended_in_order() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let speech = ScriptedSpeech::default();

    speech.start_capture(&tx).await.unwrap();

    assert!(matches!(
        rx.recv().await.unwrap(),
        Event::SpeechCaptureStarted()
    ));
    match rx.recv().await.unwrap() {
        Event::SpeechTranscript(transcript) => assert!(!transcript.is_empty()),
        _ => panic!("Wrong enum"),
    }
    assert!(matches!(
        rx.recv().await.unwrap(),
        Event::SpeechCaptureEnded()
    ));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn it_reports_its_name() {
    let speech = ScriptedSpeech::default();
    assert_eq!(speech.name(), SpeechInputName::Scripted);
}
