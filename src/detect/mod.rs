//! Object-detection results and the overlay computed from them.

mod overlay;
mod palette;
mod result;

pub use overlay::{
    annotation, is_accepted, line_width, render_specs, PixelPoint, RenderSpec, MIN_PROBABILITY,
};
pub use palette::Color;
pub use result::{parse_detections, BoundingBox, Detection};
