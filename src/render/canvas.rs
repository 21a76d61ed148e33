use anyhow::{Context, Result};
use image::{DynamicImage, Rgba, RgbaImage};
use serde::Serialize;
use std::path::Path;

use super::OverlaySurface;
use crate::detect::{Color, PixelPoint};

/// Height of the label banner painted behind each annotation.
const BANNER_HEIGHT: u32 = 12;
/// Approximate advance per annotation character.
const BANNER_CHAR_WIDTH: u32 = 6;

/// An annotation placed on an [`ImageSurface`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub at: PixelPoint,
    pub background: Color,
}

/// Overlay surface backed by an in-memory RGBA image.
///
/// Polygons are stroked directly into the pixels. Text has no font to
/// rasterize with, so each annotation paints a label banner sized to the text
/// and is recorded for export alongside the image.
pub struct ImageSurface {
    image: RgbaImage,
    annotations: Vec<Annotation>,
}

impl ImageSurface {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            annotations: Vec::new(),
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("open image {}", path.display()))?;
        Ok(Self::from(image))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Save the composed image; the format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        DynamicImage::ImageRgba8(self.image.clone())
            .to_rgb8()
            .save(path)
            .with_context(|| format!("save overlay {}", path.display()))
    }

    /// Paint `[x, x + width) x [y, y + height)`, clipped to the image.
    fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Rgba<u8>) {
        let (w, h) = self.image.dimensions();
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width).min(i64::from(w));
        let y1 = y.saturating_add(height).min(i64::from(h));
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    fn stroke_segment(&mut self, from: PixelPoint, to: PixelPoint, color: Rgba<u8>, width: u32) {
        // A zero width still leaves a hairline.
        let side = i64::from(width.max(1));
        let half = side as f64 / 2.0;
        let (w, h) = self.image.dimensions();
        let pad = side as f64;
        let bounds = (
            PixelPoint::new(-pad, -pad),
            PixelPoint::new(f64::from(w) + pad, f64::from(h) + pad),
        );
        let Some((from, to)) = clip_segment(from, to, bounds) else {
            return;
        };
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let steps = (dx.abs().max(dy.abs()) * 2.0).ceil().max(1.0) as u64;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let x = (from.x + dx * t - half).round() as i64;
            let y = (from.y + dy * t - half).round() as i64;
            self.fill_rect(x, y, side, side, color);
        }
    }
}

/// Coordinates beyond this magnitude are pulled in before clipping.
const COORD_LIMIT: f64 = 1e12;

/// Clip a segment to an axis-aligned rectangle (Liang-Barsky).
///
/// Returns `None` when nothing of the segment lies inside or a coordinate is NaN.
fn clip_segment(
    from: PixelPoint,
    to: PixelPoint,
    (min, max): (PixelPoint, PixelPoint),
) -> Option<(PixelPoint, PixelPoint)> {
    if [from.x, from.y, to.x, to.y].iter().any(|v| v.is_nan()) {
        return None;
    }
    let limit = |v: f64| v.clamp(-COORD_LIMIT, COORD_LIMIT);
    let from = PixelPoint::new(limit(from.x), limit(from.y));
    let to = PixelPoint::new(limit(to.x), limit(to.y));
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, from.x - min.x),
        (dx, max.x - from.x),
        (-dy, from.y - min.y),
        (dy, max.y - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let at = |t: f64| PixelPoint::new(from.x + dx * t, from.y + dy * t);
    Some((at(t0), at(t1)))
}

impl From<DynamicImage> for ImageSurface {
    fn from(image: DynamicImage) -> Self {
        Self::new(image.into_rgba8())
    }
}

impl OverlaySurface for ImageSurface {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn draw_polygon(&mut self, points: &[PixelPoint], color: Color, width: u32) {
        let rgba = Rgba(color.rgba());
        for pair in points.windows(2) {
            self.stroke_segment(pair[0], pair[1], rgba, width);
        }
    }

    fn annotate(&mut self, text: &str, at: PixelPoint, background: Color) {
        let banner_w = BANNER_CHAR_WIDTH.saturating_mul(text.chars().count() as u32);
        if !at.x.is_nan() && !at.y.is_nan() {
            self.fill_rect(
                at.x.round() as i64,
                at.y.round() as i64,
                i64::from(banner_w),
                i64::from(BANNER_HEIGHT),
                Rgba(background.rgba()),
            );
        }
        self.annotations.push(Annotation {
            text: text.to_string(),
            at,
            background,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{BoundingBox, Detection};
    use crate::render::draw_overlay;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn blank(width: u32, height: u32) -> ImageSurface {
        ImageSurface::new(RgbaImage::from_pixel(width, height, BLACK))
    }

    #[test]
    fn strokes_box_corners_and_leaves_interior() {
        let mut surface = blank(200, 100);
        let detections = vec![Detection::new(
            "apple",
            0.51,
            BoundingBox::new(0.1, 0.2, 0.3, 0.4),
        )];
        draw_overlay(&mut surface, &detections);

        let green = Rgba(Color::LightGreen.rgba());
        for (x, y) in [(20, 20), (80, 20), (80, 60), (20, 60), (50, 60), (80, 40)] {
            assert_eq!(surface.image().get_pixel(x, y), &green, "pixel ({x}, {y})");
        }
        assert_eq!(surface.image().get_pixel(50, 40), &BLACK);
        assert_eq!(surface.image().get_pixel(150, 90), &BLACK);
        assert_eq!(surface.annotations().len(), 1);
        assert_eq!(surface.annotations()[0].text, "apple: 51.00%");
    }

    #[test]
    fn zero_width_draws_hairline() {
        let mut surface = blank(50, 50);
        let points = [PixelPoint::new(10.0, 10.0), PixelPoint::new(30.0, 10.0)];
        surface.draw_polygon(&points, Color::Yellow, 0);

        let yellow = Rgba(Color::Yellow.rgba());
        assert_eq!(surface.image().get_pixel(20, 10), &yellow);
        assert_eq!(surface.image().get_pixel(20, 12), &BLACK);
    }

    #[test]
    fn off_image_geometry_is_clipped() {
        let mut surface = blank(20, 20);
        let points = [PixelPoint::new(-40.0, 5.0), PixelPoint::new(60.0, 5.0)];
        surface.draw_polygon(&points, Color::White, 2);
        surface.annotate("pear: 99.00%", PixelPoint::new(15.0, 15.0), Color::White);
        assert_eq!(surface.image().get_pixel(0, 5), &Rgba(Color::White.rgba()));
        assert_eq!(surface.image().get_pixel(19, 19), &Rgba(Color::White.rgba()));
    }

    #[test]
    fn far_off_image_box_draws_nothing() {
        let mut surface = blank(200, 100);
        let detections = vec![Detection::new(
            "apple",
            0.9,
            BoundingBox::new(1e300, 0.1, 0.1, 0.1),
        )];
        draw_overlay(&mut surface, &detections);

        assert!(surface.image().pixels().all(|p| *p == BLACK));
        assert_eq!(surface.annotations().len(), 1);
    }

    #[test]
    fn unbounded_box_width_is_stroked_to_the_edge() {
        let mut surface = blank(200, 100);
        let detections = vec![Detection::new(
            "apple",
            0.9,
            BoundingBox::new(0.1, 0.1, 1e308, 0.1),
        )];
        draw_overlay(&mut surface, &detections);

        let green = Rgba(Color::LightGreen.rgba());
        assert_eq!(surface.image().get_pixel(199, 10), &green);
        assert_eq!(surface.image().get_pixel(199, 20), &green);
        assert_eq!(surface.image().get_pixel(20, 15), &green);
        assert_eq!(surface.image().get_pixel(150, 15), &BLACK);
    }

    #[test]
    fn clipping_rejects_nan_and_outside_segments() {
        let bounds = (PixelPoint::new(0.0, 0.0), PixelPoint::new(10.0, 10.0));
        let nan = PixelPoint::new(f64::NAN, 1.0);
        assert!(clip_segment(nan, PixelPoint::new(5.0, 5.0), bounds).is_none());
        let outside = (PixelPoint::new(20.0, 1.0), PixelPoint::new(30.0, 1.0));
        assert!(clip_segment(outside.0, outside.1, bounds).is_none());

        let (a, b) = clip_segment(
            PixelPoint::new(-5.0, 5.0),
            PixelPoint::new(15.0, 5.0),
            bounds,
        )
        .unwrap();
        assert_eq!((a.x, a.y, b.x, b.y), (0.0, 5.0, 10.0, 5.0));
    }
}
