use crate::pathway::NodeId;
use thiserror::Error;

/// Errors found while validating a static layout table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Node '{0}' is defined more than once in the layout")]
    DuplicateNode(NodeId),

    #[error("Edge from '{source_node}' to '{target_node}' references '{missing}', which has no box in the layout")]
    MissingEndpoint {
        source_node: NodeId,
        target_node: NodeId,
        missing: NodeId,
    },

    #[error(
        "Node '{node}' at ({x}, {y}) size {width}x{height} falls outside the {canvas_width}x{canvas_height} canvas"
    )]
    OutOfCanvas {
        node: NodeId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        canvas_width: f32,
        canvas_height: f32,
    },

    #[error("Bus leaving node '{0}' has no drop targets")]
    EmptyBus(NodeId),

    #[error("Link leaving node '{source_node}' must have exactly one target, found {count}")]
    LinkArity { source_node: NodeId, count: usize },
}

/// Errors that can occur while reading user-provided inputs.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Unknown pathway node id: '{0}'")]
    UnknownNodeId(String),

    #[error("Invalid value '{value}' for {field}; expected one of: {expected}")]
    InvalidOption {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Could not read assessment file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse assessment JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

/// Errors that can occur while loading a renderer configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

/// Errors that can occur during diagram export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Scale must be a positive, finite number (got {0})")]
    InvalidScale(f32),

    #[error("Failed to parse generated SVG for raster export: {0}")]
    SvgParse(String),

    #[error("Failed to allocate a {width}x{height} surface for raster export")]
    Allocation { width: u32, height: u32 },

    #[error("Failed to encode PNG output: {0}")]
    PngEncode(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Could not write image to '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
