//! show_action - display the illustration for a recognized intent, optionally
//! confirming it aloud.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use voice_vision::{
    parse_entities, ActionPresenter, AzureSpeech, DemoConfig, DirAssetStore, Intent,
    SpeechSynthesizer,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Show the action image for a recognized intent")]
struct Args {
    /// Intent label from the language service (e.g. switch_on).
    #[arg(long)]
    intent: String,

    /// Entities as JSON, or @path to a JSON file.
    /// An object is read as type -> candidates; an array as [{type, entity}] records.
    #[arg(long, default_value = "{}")]
    entities: String,

    /// Speak a confirmation through the speech service.
    #[arg(long)]
    speak: bool,

    /// Override the asset directory.
    #[arg(long, env = "VOICE_VISION_ASSET_DIR")]
    asset_dir: Option<PathBuf>,

    /// Where to write the displayed image.
    #[arg(long, default_value = "action.png")]
    out: PathBuf,

    /// Where to write synthesized confirmation audio.
    #[arg(long, default_value = "confirmation.wav")]
    audio_out: PathBuf,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = DemoConfig::load()?;
    let asset_dir = args.asset_dir.clone().unwrap_or(cfg.asset_dir.clone());
    let intent = Intent::parse(args.intent.trim());
    let entities = parse_entities(&args.entities)?;

    let presenter = ActionPresenter::new(DirAssetStore::new(asset_dir));
    let shown = if args.speak {
        presenter
            .with_speech_for(&intent, || {
                let speech = AzureSpeech::new(&cfg.speech)?;
                Ok(Box::new(speech) as Box<dyn SpeechSynthesizer>)
            })?
            .show_action_from_speech(&intent, entities.as_ref())?
    } else {
        presenter.show_action(&intent, entities.as_ref())?
    };

    shown
        .image
        .to_rgb8()
        .save(&args.out)
        .with_context(|| format!("save {}", args.out.display()))?;
    log::info!("Action: {} -> {}", shown.action.action, args.out.display());

    if let Some(audio) = &shown.audio {
        std::fs::write(&args.audio_out, &audio.bytes)
            .with_context(|| format!("write {}", args.audio_out.display()))?;
        log::info!(
            "Confirmation audio ({}) -> {}",
            audio.format,
            args.audio_out.display()
        );
    }
    Ok(())
}
