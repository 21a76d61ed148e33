//! Shows the outcome of a recognized command: the action's illustrative
//! image and, for spoken commands, an audible confirmation.

use anyhow::{anyhow, Result};
use image::DynamicImage;

use crate::assets::AssetStore;
use crate::intent::{confirmation_text, resolve_action, Action, DeviceEntities, Intent};
use crate::speech::{SpeechSynthesizer, SynthesizedAudio};

/// What a presenter produced for one command.
pub struct Presentation {
    pub action: Action,
    pub image: DynamicImage,
    /// Sentence spoken back to the user, when one was synthesized.
    pub confirmation: Option<String>,
    pub audio: Option<SynthesizedAudio>,
}

pub struct ActionPresenter<A> {
    assets: A,
    speech: Option<Box<dyn SpeechSynthesizer>>,
}

impl<A: AssetStore> ActionPresenter<A> {
    pub fn new(assets: A) -> Self {
        Self {
            assets,
            speech: None,
        }
    }

    pub fn with_speech(mut self, speech: Box<dyn SpeechSynthesizer>) -> Self {
        self.speech = Some(speech);
        self
    }

    /// Attach a synthesizer only when `intent` will be spoken back.
    ///
    /// `build` is not called for other intents, so missing speech credentials
    /// only matter for control commands.
    pub fn with_speech_for<F>(self, intent: &Intent, build: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Box<dyn SpeechSynthesizer>>,
    {
        if intent.is_control() {
            Ok(self.with_speech(build()?))
        } else {
            Ok(self)
        }
    }

    /// Resolve the command and load its image.
    pub fn show_action<E>(&self, intent: &Intent, entities: &E) -> Result<Presentation>
    where
        E: DeviceEntities + ?Sized,
    {
        let action = self.resolve(intent, entities);
        let image = self.assets.load(&action.asset_key())?;
        Ok(Presentation {
            action,
            image,
            confirmation: None,
            audio: None,
        })
    }

    /// Like [`show_action`](Self::show_action), but control intents are also
    /// confirmed aloud before the image is loaded.
    pub fn show_action_from_speech<E>(&self, intent: &Intent, entities: &E) -> Result<Presentation>
    where
        E: DeviceEntities + ?Sized,
    {
        let action = self.resolve(intent, entities);

        let (confirmation, audio) = if intent.is_control() {
            let speech = self
                .speech
                .as_ref()
                .ok_or_else(|| anyhow!("no speech synthesizer configured"))?;
            let text = confirmation_text(intent, &action.device);
            log::info!("Response: {}", text);
            let audio = speech.speak_text(&text)?;
            (Some(text), Some(audio))
        } else {
            (None, None)
        };

        let image = self.assets.load(&action.asset_key())?;
        Ok(Presentation {
            action,
            image,
            confirmation,
            audio,
        })
    }

    fn resolve<E>(&self, intent: &Intent, entities: &E) -> Action
    where
        E: DeviceEntities + ?Sized,
    {
        let action = resolve_action(intent, entities);
        log::info!("Intent: {}", intent);
        log::info!("Device: {}", action.device);
        action
    }
}
