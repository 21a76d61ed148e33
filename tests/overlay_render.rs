use anyhow::Result;
use image::{Rgb, RgbImage};

use voice_vision::{draw_overlay, line_width, parse_detections, Color, ImageSurface, OverlayReport};

const FRUIT_PREDICTIONS: &str = r#"{
    "predictions": [
        {"tagName": "apple", "probability": 0.9132,
         "boundingBox": {"left": 0.05, "top": 0.1, "width": 0.3, "height": 0.4}},
        {"tagName": "banana", "probability": 0.49,
         "boundingBox": {"left": 0.5, "top": 0.5, "width": 0.2, "height": 0.2}},
        {"tagName": "orange", "probability": 0.77,
         "boundingBox": {"left": 0.6, "top": 0.1, "width": 0.3, "height": 0.3}}
    ]
}"#;

#[test]
fn renders_prediction_file_onto_saved_image() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("fruit.png");
    let output = dir.path().join("fruit_overlay.png");
    RgbImage::from_pixel(400, 200, Rgb([0, 0, 0])).save(&input)?;

    let detections = parse_detections(FRUIT_PREDICTIONS)?;
    let mut surface = ImageSurface::open(&input)?;
    let specs = draw_overlay(&mut surface, &detections);
    surface.save(&output)?;

    let annotations: Vec<_> = specs.iter().map(|s| s.annotation.as_str()).collect();
    assert_eq!(annotations, ["apple: 91.32%", "orange: 77.00%"]);

    let saved = image::open(&output)?.to_rgb8();
    let [r, g, b, _] = Color::LightGreen.rgba();
    // apple box right edge at x = 0.35 * 400 = 140
    assert_eq!(saved.get_pixel(140, 60), &Rgb([r, g, b]));
    let [r, g, b, _] = Color::Orange.rgba();
    // orange box bottom edge at y = 0.4 * 200 = 80
    assert_eq!(saved.get_pixel(300, 80), &Rgb([r, g, b]));
    // rejected banana box stays untouched
    assert_eq!(saved.get_pixel(240, 100), &Rgb([0, 0, 0]));
    Ok(())
}

#[test]
fn report_lists_drawn_specs_and_annotations() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("fruit.png");
    RgbImage::from_pixel(400, 200, Rgb([0, 0, 0])).save(&input)?;

    let detections = parse_detections(FRUIT_PREDICTIONS)?;
    let mut surface = ImageSurface::open(&input)?;
    let specs = draw_overlay(&mut surface, &detections);
    let report = serde_json::to_value(OverlayReport::new(&surface, &specs))?;

    assert_eq!(report["width"], 400);
    assert_eq!(report["height"], 200);
    assert_eq!(report["line_width"], line_width(400));

    let drawn = report["specs"].as_array().expect("specs array");
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0]["label"], "apple");
    assert_eq!(drawn[0]["color"], "lightgreen");
    assert_eq!(drawn[0]["polygon"][0]["x"], 20.0);
    assert_eq!(drawn[1]["annotation"], "orange: 77.00%");

    let annotations = report["annotations"].as_array().expect("annotations array");
    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0]["text"], "apple: 91.32%");
    assert_eq!(annotations[1]["background"], "orange");
    Ok(())
}
