//! Spoken confirmation via a text-to-speech service.

mod azure;
mod ssml;

pub use azure::AzureSpeech;
pub use ssml::{build_ssml, escape_xml};

use anyhow::Result;

/// Audio returned by a synthesizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthesizedAudio {
    /// Encoded audio exactly as the service produced it.
    pub bytes: Vec<u8>,
    /// Service-specific name of the encoding, e.g. `riff-24khz-16bit-mono-pcm`.
    pub format: String,
}

/// Text-to-speech backend.
///
/// Calls are blocking and single-shot; failures surface to the caller as-is.
pub trait SpeechSynthesizer {
    fn speak_text(&self, text: &str) -> Result<SynthesizedAudio>;
}

impl<S: SpeechSynthesizer + ?Sized> SpeechSynthesizer for Box<S> {
    fn speak_text(&self, text: &str) -> Result<SynthesizedAudio> {
        (**self).speak_text(text)
    }
}
