use serde::Serialize;

use super::palette::Color;
use super::result::Detection;

/// Detections at or below this probability are not drawn.
pub const MIN_PROBABILITY: f64 = 0.5;

/// A point in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing instruction for one accepted detection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderSpec {
    pub label: String,
    /// Closed outline: top-left, top-right, bottom-right, bottom-left, top-left.
    pub polygon: [PixelPoint; 5],
    pub color: Color,
    pub annotation: String,
}

impl RenderSpec {
    pub fn from_detection(image_dims: (u32, u32), detection: &Detection) -> Self {
        let (image_w, image_h) = image_dims;
        let bbox = &detection.bounding_box;
        let left = bbox.left * f64::from(image_w);
        let top = bbox.top * f64::from(image_h);
        let width = bbox.width * f64::from(image_w);
        let height = bbox.height * f64::from(image_h);

        let top_left = PixelPoint::new(left, top);
        let polygon = [
            top_left,
            PixelPoint::new(left + width, top),
            PixelPoint::new(left + width, top + height),
            PixelPoint::new(left, top + height),
            top_left,
        ];

        Self {
            label: detection.tag_name.clone(),
            polygon,
            color: Color::for_label(&detection.tag_name),
            annotation: annotation(&detection.tag_name, detection.probability),
        }
    }

    /// Where the annotation is placed: the box's top-left corner.
    pub fn anchor(&self) -> PixelPoint {
        self.polygon[0]
    }
}

/// True when a detection is confident enough to be drawn.
pub fn is_accepted(detection: &Detection) -> bool {
    detection.probability > MIN_PROBABILITY
}

/// `"{label}: {percent:.2}%"`.
pub fn annotation(label: &str, probability: f64) -> String {
    format!("{}: {:.2}%", label, probability * 100.0)
}

/// Stroke width for an image of the given pixel width.
///
/// Images narrower than 100 pixels yield 0; surfaces decide how to draw that.
pub fn line_width(image_width: u32) -> u32 {
    image_width / 100
}

/// Drawing instructions for every accepted detection, in input order.
///
/// Box components are not validated; out-of-range values flow straight into
/// pixel coordinates.
pub fn render_specs<'a>(
    image_dims: (u32, u32),
    detections: &'a [Detection],
) -> impl Iterator<Item = RenderSpec> + 'a {
    detections
        .iter()
        .filter(|detection| is_accepted(detection))
        .map(move |detection| RenderSpec::from_detection(image_dims, detection))
}
