use crate::log;

/// Consumer of instruction strings to vocalize. The engine decides *what*
/// and *when* to speak, playback mechanics live behind this trait.
pub trait SpeechSink: Send + Sync {
    fn speak(&self, instruction: &str);
}

/// Speech sink that only logs, used when no TTS backend is attached.
pub struct LogSpeech;

impl SpeechSink for LogSpeech {
    fn speak(&self, instruction: &str) {
        log!("[TTS] {instruction}");
    }
}
