//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! neutropath crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use neutropath::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let assessment = PatientAssessment::from_file("path/to/assessment.json")?;
//! let active = resolve(&assessment);
//!
//! let layout = standard_layout();
//! let diagram = render(&active, &layout);
//! println!("{} nodes dimmed", diagram.count_nodes(Style::Dimmed));
//! # Ok(())
//! # }
//! ```

// Resolution
pub use crate::pathway::{
    resolve, resolve_flags, resolve_traced, ActiveSet, ClinicalStability, Decision, FeverStatus,
    FieldRelevance, NeutropaeniaStatus, NodeId, PatientAssessment, Resolution, StaleFieldPolicy,
    Style, TraceStep,
};

// Layout and rendering
pub use crate::layout::{standard as standard_layout, Layout};
pub use crate::render::{outline, render, DiagramRenderer, Palette, RenderConfig, VectorDiagram};

// Recommendations
pub use crate::recommend::{recommendations, Recommendation, EMPTY_STATE_MESSAGE};

// Export
pub use crate::export::{
    export_diagram, rasterize, ClipboardSink, ExportOutcome, RasterImage, SystemClipboard, Tone,
};

// Error types
pub use crate::error::{ConfigError, ExportError, InputError, LayoutError};

// Trace formatting
pub use crate::trace::TraceFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
