use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

const DEFAULT_ASSET_DIR: &str = "data/luis";
const DEFAULT_VOICE: &str = "en-US-JennyNeural";
const DEFAULT_LANGUAGE: &str = "en-US";
const DEFAULT_OUTPUT_FORMAT: &str = "riff-24khz-16bit-mono-pcm";

#[derive(Debug, Deserialize, Default)]
struct DemoConfigFile {
    assets: Option<AssetsConfigFile>,
    speech: Option<SpeechConfigFile>,
}

#[derive(Debug, Deserialize, Default)]
struct AssetsConfigFile {
    dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct SpeechConfigFile {
    key: Option<String>,
    region: Option<String>,
    voice: Option<String>,
    language: Option<String>,
    output_format: Option<String>,
    endpoint: Option<String>,
}

/// Runtime settings shared by the demo binaries.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub asset_dir: PathBuf,
    pub speech: SpeechSettings,
}

/// Text-to-speech service settings.
///
/// Credentials are optional here; they are only required once speech is
/// actually requested.
#[derive(Clone)]
pub struct SpeechSettings {
    pub key: Option<String>,
    pub region: Option<String>,
    pub voice: String,
    pub language: String,
    pub output_format: String,
    /// Overrides the region-derived endpoint.
    pub endpoint: Option<String>,
}

impl std::fmt::Debug for SpeechSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechSettings")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("region", &self.region)
            .field("voice", &self.voice)
            .field("language", &self.language)
            .field("output_format", &self.output_format)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            key: None,
            region: None,
            voice: DEFAULT_VOICE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            endpoint: None,
        }
    }
}

impl SpeechSettings {
    /// Synthesis URL: the explicit endpoint, or the regional Azure TTS endpoint.
    pub fn synthesis_url(&self) -> Result<String> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        let region = self
            .region
            .as_deref()
            .ok_or_else(|| anyhow!("SPEECH_REGION must be set to synthesize speech"))?;
        Ok(format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            region
        ))
    }
}

impl DemoConfig {
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("VOICE_VISION_CONFIG").ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) => Some(read_config_file(Path::new(path))?),
            None => None,
        };
        let mut cfg = Self::from_file(file_cfg.unwrap_or_default());
        cfg.apply_env();
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: DemoConfigFile) -> Self {
        let asset_dir = file
            .assets
            .and_then(|assets| assets.dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));
        let speech_file = file.speech.unwrap_or_default();
        let defaults = SpeechSettings::default();
        let speech = SpeechSettings {
            key: speech_file.key,
            region: speech_file.region,
            voice: speech_file.voice.unwrap_or(defaults.voice),
            language: speech_file.language.unwrap_or(defaults.language),
            output_format: speech_file.output_format.unwrap_or(defaults.output_format),
            endpoint: speech_file.endpoint,
        };
        Self { asset_dir, speech }
    }

    fn apply_env(&mut self) {
        if let Some(dir) = non_empty_env("VOICE_VISION_ASSET_DIR") {
            self.asset_dir = PathBuf::from(dir);
        }
        if let Some(key) = non_empty_env("SPEECH_KEY") {
            self.speech.key = Some(key);
        }
        if let Some(region) = non_empty_env("SPEECH_REGION") {
            self.speech.region = Some(region);
        }
        if let Some(voice) = non_empty_env("SPEECH_VOICE") {
            self.speech.voice = voice;
        }
        if let Some(format) = non_empty_env("SPEECH_OUTPUT_FORMAT") {
            self.speech.output_format = format;
        }
        if let Some(endpoint) = non_empty_env("SPEECH_ENDPOINT") {
            self.speech.endpoint = Some(endpoint);
        }
    }

    fn validate(&mut self) -> Result<()> {
        if self.asset_dir.as_os_str().is_empty() {
            return Err(anyhow!("asset directory must not be empty"));
        }
        if self.speech.voice.trim().is_empty() {
            return Err(anyhow!("speech voice must not be empty"));
        }
        if let Some(region) = &self.speech.region {
            self.speech.region = Some(region.trim().to_lowercase());
        }
        if let Some(endpoint) = &self.speech.endpoint {
            let url = Url::parse(endpoint)
                .map_err(|e| anyhow!("invalid speech endpoint {}: {}", endpoint, e))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(anyhow!(
                    "unsupported speech endpoint scheme '{}'; expected http(s)",
                    url.scheme()
                ));
            }
        }
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<DemoConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let cfg = toml::from_str(&raw)
        .map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?;
    Ok(cfg)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
