use anyhow::{anyhow, Context, Result};
use std::io::Read;

use super::ssml::build_ssml;
use super::{SpeechSynthesizer, SynthesizedAudio};
use crate::config::SpeechSettings;

const USER_AGENT: &str = concat!("voice-vision/", env!("CARGO_PKG_VERSION"));

/// Azure Cognitive Services text-to-speech over its REST endpoint.
pub struct AzureSpeech {
    agent: ureq::Agent,
    url: String,
    key: String,
    voice: String,
    language: String,
    output_format: String,
}

impl AzureSpeech {
    /// Build a synthesizer; fails when the subscription key or region is missing.
    pub fn new(settings: &SpeechSettings) -> Result<Self> {
        let key = settings
            .key
            .clone()
            .ok_or_else(|| anyhow!("SPEECH_KEY must be set to synthesize speech"))?;
        let url = settings.synthesis_url()?;
        Ok(Self {
            agent: ureq::agent(),
            url,
            key,
            voice: settings.voice.clone(),
            language: settings.language.clone(),
            output_format: settings.output_format.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SpeechSynthesizer for AzureSpeech {
    fn speak_text(&self, text: &str) -> Result<SynthesizedAudio> {
        let ssml = build_ssml(text, &self.voice, &self.language);
        log::info!(
            "speech: synthesizing {} chars with voice {}",
            text.chars().count(),
            self.voice
        );

        let response = self
            .agent
            .post(&self.url)
            .set("Ocp-Apim-Subscription-Key", &self.key)
            .set("Content-Type", "application/ssml+xml")
            .set("X-Microsoft-OutputFormat", &self.output_format)
            .set("User-Agent", USER_AGENT)
            .send_string(&ssml)
            .map_err(|err| match err {
                ureq::Error::Status(code, response) => anyhow!(
                    "speech service returned {} {}",
                    code,
                    response.status_text()
                ),
                other => anyhow::Error::new(other).context("send speech request"),
            })?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .context("read synthesized audio")?;
        log::info!("speech: received {} bytes of {}", bytes.len(), self.output_format);

        Ok(SynthesizedAudio {
            bytes,
            format: self.output_format.clone(),
        })
    }
}
