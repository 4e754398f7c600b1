use super::Message;

pub enum Event {
    ReplyReady(Message),
    SpeechCaptureStarted(),
    SpeechTranscript(String),
    SpeechCaptureEnded(),
    KeyboardCharInput(char),
    KeyboardBackspace(),
    KeyboardCTRLC(),
    KeyboardCTRLL(),
    KeyboardCTRLP(),
    KeyboardCTRLQ(),
    KeyboardCTRLR(),
    KeyboardCTRLT(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    KeyboardSpace(),
    KeyboardTab(),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UITick(),
}
