//! Raster export of a rendered diagram, to the clipboard or to a file.
//!
//! Exporting is a single user action with three terminal outcomes: the image
//! reached the clipboard, the clipboard refused it and the image was written
//! to a fallback file instead, or the image could not be produced at all.
//! None of them is retried.

use crate::error::ExportError;
use crate::render::VectorDiagram;
use log::{info, warn};
use resvg::tiny_skia::{Color, Pixmap, Transform};
use std::fs;
use std::path::{Path, PathBuf};

/// A rasterized diagram, as straight (non-premultiplied) RGBA plus PNG bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub png: Vec<u8>,
}

/// Rasterizes SVG markup at `scale` onto an opaque white surface.
pub fn rasterize(svg: &str, scale: f32) -> Result<RasterImage, ExportError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ExportError::InvalidScale(scale));
    }

    let mut options = resvg::usvg::Options::default();
    options.font_family = "Arial".to_string();
    options.fontdb_mut().load_system_fonts();

    let tree = resvg::usvg::Tree::from_str(svg, &options)
        .map_err(|err| ExportError::SvgParse(err.to_string()))?;

    let size = tree.size().to_int_size();
    let width = ((size.width() as f32) * scale).ceil() as u32;
    let height = ((size.height() as f32) * scale).ceil() as u32;

    let mut pixmap =
        Pixmap::new(width, height).ok_or(ExportError::Allocation { width, height })?;
    pixmap.fill(Color::WHITE);
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|err| ExportError::PngEncode(err.to_string()))?;

    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok(RasterImage {
        width,
        height,
        rgba,
        png,
    })
}

/// Writes the diagram as a PNG file.
pub fn save_png(diagram: &VectorDiagram, path: &Path, scale: f32) -> Result<(), ExportError> {
    let image = rasterize(diagram.as_svg(), scale)?;
    write_file(path, &image.png)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Somewhere an image can be copied for pasting into other documents.
pub trait ClipboardSink {
    fn copy_image(&mut self, image: &RasterImage) -> Result<(), ExportError>;
}

/// The operating system clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    fn copy_image(&mut self, image: &RasterImage) -> Result<(), ExportError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ExportError::ClipboardUnavailable(e.to_string()))?;
        clipboard
            .set_image(arboard::ImageData {
                width: image.width as usize,
                height: image.height as usize,
                bytes: std::borrow::Cow::Borrowed(&image.rgba),
            })
            .map_err(|e| ExportError::ClipboardUnavailable(e.to_string()))
    }
}

#[cfg(not(feature = "clipboard"))]
impl ClipboardSink for SystemClipboard {
    fn copy_image(&mut self, _image: &RasterImage) -> Result<(), ExportError> {
        Err(ExportError::ClipboardUnavailable(
            "built without clipboard support".to_string(),
        ))
    }
}

/// How a status message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Error,
}

/// Terminal result of one export action.
#[derive(Debug)]
pub enum ExportOutcome {
    Copied,
    SavedToFile(PathBuf),
    Failed(ExportError),
}

impl ExportOutcome {
    pub fn tone(&self) -> Tone {
        match self {
            ExportOutcome::Copied => Tone::Success,
            ExportOutcome::SavedToFile(_) => Tone::Info,
            ExportOutcome::Failed(_) => Tone::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ExportOutcome::Copied => {
                "Flowchart copied to clipboard. Paste it into your document.".to_string()
            }
            ExportOutcome::SavedToFile(path) => format!(
                "Clipboard not available; flowchart saved as '{}' instead.",
                path.display()
            ),
            ExportOutcome::Failed(err) => format!("Could not export flowchart: {}", err),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, ExportOutcome::Failed(_))
    }
}

/// Copies the diagram to `sink`, falling back to a PNG at `fallback`.
pub fn export_diagram(
    diagram: &VectorDiagram,
    sink: &mut dyn ClipboardSink,
    fallback: &Path,
    scale: f32,
) -> ExportOutcome {
    let image = match rasterize(diagram.as_svg(), scale) {
        Ok(image) => image,
        Err(err) => return ExportOutcome::Failed(err),
    };

    match sink.copy_image(&image) {
        Ok(()) => {
            info!("Copied {}x{} flowchart to clipboard", image.width, image.height);
            ExportOutcome::Copied
        }
        Err(err) => {
            warn!("Clipboard copy failed ({}), writing {}", err, fallback.display());
            match write_file(fallback, &image.png) {
                Ok(()) => {
                    info!("Saved flowchart to {}", fallback.display());
                    ExportOutcome::SavedToFile(fallback.to_path_buf())
                }
                Err(err) => ExportOutcome::Failed(err),
            }
        }
    }
}
