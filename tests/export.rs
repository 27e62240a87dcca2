mod common;

use common::*;
use neutropath::export::save_png;
use neutropath::prelude::*;
use std::fs;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Records every image it is handed.
#[derive(Default)]
struct RecordingClipboard {
    copied: Vec<(u32, u32)>,
}

impl ClipboardSink for RecordingClipboard {
    fn copy_image(&mut self, image: &RasterImage) -> std::result::Result<(), ExportError> {
        self.copied.push((image.width, image.height));
        Ok(())
    }
}

/// Behaves like a headless session with no clipboard.
struct UnavailableClipboard;

impl ClipboardSink for UnavailableClipboard {
    fn copy_image(&mut self, _image: &RasterImage) -> std::result::Result<(), ExportError> {
        Err(ExportError::ClipboardUnavailable("no display".to_string()))
    }
}

fn diagram() -> VectorDiagram {
    render(&resolve(&stop_antibiotics_case()), &standard_layout())
}

#[test]
fn test_rasterize_dimensions() {
    let image = rasterize(diagram().as_svg(), 1.0).unwrap();
    assert_eq!((image.width, image.height), (1000, 700));
    assert_eq!(image.rgba.len(), 1000 * 700 * 4);
    assert!(image.png.starts_with(PNG_MAGIC));

    let scaled = rasterize(diagram().as_svg(), 2.0).unwrap();
    assert_eq!((scaled.width, scaled.height), (2000, 1400));
}

#[test]
fn test_rasterize_is_opaque() {
    let image = rasterize(diagram().as_svg(), 0.5).unwrap();
    assert!(image.rgba.chunks(4).all(|px| px[3] == 255));
    // Top-left corner is background.
    assert_eq!(&image.rgba[0..4], &[255, 255, 255, 255]);
}

#[test]
fn test_rasterize_rejects_bad_scale() {
    for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert!(matches!(
            rasterize(diagram().as_svg(), scale),
            Err(ExportError::InvalidScale(_))
        ));
    }
}

#[test]
fn test_rasterize_rejects_bad_svg() {
    assert!(matches!(
        rasterize("this is not svg", 1.0),
        Err(ExportError::SvgParse(_))
    ));
}

#[test]
fn test_export_copies_to_clipboard() {
    let fallback = temp_path("copied.png");
    let mut clipboard = RecordingClipboard::default();

    let outcome = export_diagram(&diagram(), &mut clipboard, &fallback, 1.0);

    assert!(matches!(outcome, ExportOutcome::Copied));
    assert_eq!(outcome.tone(), Tone::Success);
    assert!(outcome.is_success());
    assert!(outcome.message().contains("copied to clipboard"));
    assert_eq!(clipboard.copied, vec![(1000, 700)]);
    assert!(!fallback.exists());
}

#[test]
fn test_export_falls_back_to_file() {
    let fallback = temp_path("fallback.png");
    let outcome = export_diagram(&diagram(), &mut UnavailableClipboard, &fallback, 1.0);

    match &outcome {
        ExportOutcome::SavedToFile(path) => assert_eq!(path, &fallback),
        other => panic!("Expected SavedToFile, got {:?}", other),
    }
    assert_eq!(outcome.tone(), Tone::Info);
    assert!(outcome.is_success());
    assert!(outcome.message().contains(&*fallback.to_string_lossy()));

    let bytes = fs::read(&fallback).unwrap();
    fs::remove_file(&fallback).unwrap();
    assert!(bytes.starts_with(PNG_MAGIC));
}

#[test]
fn test_export_fails_when_fallback_unwritable() {
    let fallback = std::path::Path::new("/definitely/not/here/pathway.png");
    let outcome = export_diagram(&diagram(), &mut UnavailableClipboard, fallback, 1.0);

    assert!(matches!(outcome, ExportOutcome::Failed(ExportError::Io { .. })));
    assert_eq!(outcome.tone(), Tone::Error);
    assert!(!outcome.is_success());
    assert!(outcome.message().starts_with("Could not export flowchart"));
}

#[test]
fn test_export_fails_on_invalid_scale() {
    let fallback = temp_path("never-written.png");
    let mut clipboard = RecordingClipboard::default();
    let outcome = export_diagram(&diagram(), &mut clipboard, &fallback, 0.0);

    assert!(matches!(outcome, ExportOutcome::Failed(ExportError::InvalidScale(_))));
    assert!(clipboard.copied.is_empty());
    assert!(!fallback.exists());
}

#[test]
fn test_save_png() {
    let path = temp_path("saved.png");
    save_png(&diagram(), &path, 1.0).unwrap();
    let bytes = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert!(bytes.starts_with(PNG_MAGIC));
}
