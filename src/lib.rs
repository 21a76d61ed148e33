//! Voice/vision assistant demo helpers.
//!
//! Two independent pieces of glue for an assistant tutorial:
//!
//! 1. **Action display**: a language-understanding intent plus its entities
//!    resolve to an action (`switch_on_light`, or `unknown`) whose cached
//!    illustration is loaded, optionally with a spoken confirmation.
//! 2. **Detection overlay**: object-detection predictions above 50%
//!    confidence become outlined, color-coded, annotated boxes on the image.
//!
//! # Module Structure
//!
//! - `intent`: intent parsing, entity shapes, action resolution
//! - `detect`: detection input and render-spec computation
//! - `render`: drawing surfaces for overlays
//! - `speech`: text-to-speech collaborator
//! - `assets`: action image lookup
//! - `present`: wiring of resolver, assets and speech
//! - `config`: file + environment configuration
//!
//! Resolution and overlay computation are pure; every effect (files, HTTP,
//! pixels) sits behind a trait the caller supplies.

pub mod assets;
pub mod config;
pub mod detect;
pub mod intent;
pub mod present;
pub mod render;
pub mod speech;

pub use assets::{AssetStore, DirAssetStore};
pub use config::{DemoConfig, SpeechSettings};
pub use detect::{
    line_width, parse_detections, render_specs, BoundingBox, Color, Detection, PixelPoint,
    RenderSpec,
};
pub use intent::{
    confirmation_text, parse_entities, resolve_action, Action, DeviceEntities, EntityList,
    EntityMap, EntityRecord, Intent,
};
pub use present::{ActionPresenter, Presentation};
pub use render::{draw_overlay, ImageSurface, OverlayReport, OverlaySurface};
pub use speech::{AzureSpeech, SpeechSynthesizer, SynthesizedAudio};
