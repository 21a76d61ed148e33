//! Drawing surfaces for detection overlays.

mod canvas;

pub use canvas::{Annotation, ImageSurface};

use serde::Serialize;

use crate::detect::{line_width, render_specs, Color, Detection, PixelPoint, RenderSpec};

/// Something an overlay can be drawn onto.
pub trait OverlaySurface {
    /// Pixel dimensions as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Stroke a connected line through `points`.
    fn draw_polygon(&mut self, points: &[PixelPoint], color: Color, width: u32);

    /// Place a text annotation at `at` on a `background` colored label.
    fn annotate(&mut self, text: &str, at: PixelPoint, background: Color);
}

/// Draw every accepted detection onto `surface`, returning what was drawn.
pub fn draw_overlay<S>(surface: &mut S, detections: &[Detection]) -> Vec<RenderSpec>
where
    S: OverlaySurface + ?Sized,
{
    let dims = surface.dimensions();
    let stroke = line_width(dims.0);
    let mut drawn = Vec::new();
    for spec in render_specs(dims, detections) {
        surface.draw_polygon(&spec.polygon, spec.color, stroke);
        surface.annotate(&spec.annotation, spec.anchor(), spec.color);
        log::debug!("drew {} as {}", spec.annotation, spec.color.name());
        drawn.push(spec);
    }
    log::info!(
        "overlay: {} of {} detections drawn",
        drawn.len(),
        detections.len()
    );
    drawn
}

/// Export of what an overlay pass drew onto an [`ImageSurface`].
#[derive(Debug, Serialize)]
pub struct OverlayReport<'a> {
    pub width: u32,
    pub height: u32,
    pub line_width: u32,
    pub specs: &'a [RenderSpec],
    pub annotations: &'a [Annotation],
}

impl<'a> OverlayReport<'a> {
    pub fn new(surface: &'a ImageSurface, specs: &'a [RenderSpec]) -> Self {
        let (width, height) = surface.dimensions();
        Self {
            width,
            height,
            line_width: line_width(width),
            specs,
            annotations: surface.annotations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::BoundingBox;

    #[derive(Default)]
    struct Recorder {
        polygons: Vec<(Vec<PixelPoint>, Color, u32)>,
        annotations: Vec<(String, Color)>,
    }

    impl OverlaySurface for Recorder {
        fn dimensions(&self) -> (u32, u32) {
            (640, 480)
        }

        fn draw_polygon(&mut self, points: &[PixelPoint], color: Color, width: u32) {
            self.polygons.push((points.to_vec(), color, width));
        }

        fn annotate(&mut self, text: &str, _at: PixelPoint, background: Color) {
            self.annotations.push((text.to_string(), background));
        }
    }

    #[test]
    fn draws_one_polygon_and_annotation_per_accepted_detection() {
        let bbox = BoundingBox::new(0.25, 0.25, 0.5, 0.5);
        let detections = vec![
            Detection::new("orange", 0.75, bbox),
            Detection::new("banana", 0.3, bbox),
        ];
        let mut surface = Recorder::default();
        let drawn = draw_overlay(&mut surface, &detections);

        assert_eq!(drawn.len(), 1);
        assert_eq!(surface.polygons.len(), 1);
        let (points, color, width) = &surface.polygons[0];
        assert_eq!(points.len(), 5);
        assert_eq!(points.first(), points.last());
        assert_eq!(*color, Color::Orange);
        assert_eq!(*width, 6);
        assert_eq!(
            surface.annotations,
            vec![("orange: 75.00%".to_string(), Color::Orange)]
        );
    }
}
