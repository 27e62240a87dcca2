use crate::error::ConfigError;
use crate::layout::FillCategory;
use serde::{Deserialize, Serialize};
use std::fs;

/// Colours used by the renderer. `Default` is the printed sticker palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub header: String,
    pub review: String,
    pub decision: String,
    pub action: String,
    pub warning: String,
    pub neutral: String,
    pub outline: String,
    pub text: String,
    pub active_stroke: String,
    pub active_fill: String,
    pub dim_fill: String,
    pub dim_stroke: String,
    pub dim_text: String,
    pub background: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            header: "#C39BD3".to_string(),
            review: "#85C1E9".to_string(),
            decision: "#F9E79F".to_string(),
            action: "#A9DFBF".to_string(),
            warning: "#F1948A".to_string(),
            neutral: "#FFFFFF".to_string(),
            outline: "#5D6D7E".to_string(),
            text: "#2C3E50".to_string(),
            active_stroke: "#E74C3C".to_string(),
            active_fill: "#FADBD8".to_string(),
            dim_fill: "#F2F3F4".to_string(),
            dim_stroke: "#BDC3C7".to_string(),
            dim_text: "#BDC3C7".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

impl Palette {
    pub fn fill_for(&self, category: FillCategory) -> &str {
        match category {
            FillCategory::Header => &self.header,
            FillCategory::Review => &self.review,
            FillCategory::Decision => &self.decision,
            FillCategory::Action => &self.action,
            FillCategory::Warning => &self.warning,
            FillCategory::Neutral => &self.neutral,
        }
    }
}

/// Immutable styling record handed to the renderer.
///
/// All fields have defaults, so a JSON file only needs the keys it overrides:
///
/// ```json
/// { "font_family": "Helvetica", "palette": { "active_stroke": "#C0392B" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub palette: Palette,
    pub font_family: String,
    pub corner_radius: f32,
    pub stroke_width: f32,
    pub active_stroke_width: f32,
    pub edge_width: f32,
    pub active_edge_width: f32,
    /// Extra vertical space between wrapped lines, added to the font size.
    pub line_padding: f32,
    /// Average glyph width as a fraction of the font size, used for wrapping.
    pub char_width_factor: f32,
    pub show_legend: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            font_family: "Arial".to_string(),
            corner_radius: 6.0,
            stroke_width: 1.5,
            active_stroke_width: 3.0,
            edge_width: 1.0,
            active_edge_width: 2.0,
            line_padding: 3.0,
            char_width_factor: 0.55,
            show_legend: true,
        }
    }
}

impl RenderConfig {
    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
