//! # Neutropath - Neutropaenic Sepsis 72-Hour Review Pathway
//!
//! **Neutropath** turns the answers to six bedside questions into a highlighted
//! path through the neutropaenic sepsis 72-hour review flowchart, together with
//! an ordered list of recommended actions.
//!
//! ## Core Workflow
//!
//! Every evaluation is a pure, synchronous pass with no state kept between runs:
//!
//! 1.  **Assess**: Fill a [`PatientAssessment`](pathway::PatientAssessment) with the six answers.
//! 2.  **Resolve**: [`resolve`](pathway::resolve) walks the fixed decision tree and returns the
//!     [`ActiveSet`](pathway::ActiveSet) of lit pathway nodes.
//! 3.  **Render**: A [`DiagramRenderer`](render::DiagramRenderer) interprets the static
//!     [`Layout`](layout::Layout) table and styles every box and connector as active, normal or dimmed.
//! 4.  **Recommend**: [`recommendations`](recommend::recommendations) reads the same active set and
//!     returns the guidance entries in their fixed priority order.
//! 5.  **Export** (optional): [`export_diagram`](export::export_diagram) rasterizes the chart and
//!     copies it to the clipboard, falling back to a PNG file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neutropath::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let assessment = PatientAssessment {
//!         fever: FeverStatus::Resolved,
//!         neutropaenia: NeutropaeniaStatus::Ongoing,
//!         enterocolitis: true,
//!         ..Default::default()
//!     };
//!
//!     let resolution = resolve_traced(&assessment);
//!     println!("Path: {}", TraceFormatter::format_trace(&resolution));
//!
//!     let layout = standard_layout();
//!     layout.validate()?;
//!     let diagram = DiagramRenderer::new(&layout).render(&resolution.active);
//!     std::fs::write("pathway.svg", diagram.as_svg())?;
//!
//!     for rec in recommendations(&resolution.active) {
//!         println!("{} {}: {}", rec.icon, rec.title, rec.detail);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Decision support only: all antibiotic decisions should be made with the
//! clinical team and the Infectious Diseases service.

pub mod error;
pub mod export;
pub mod layout;
pub mod pathway;
pub mod prelude;
pub mod recommend;
pub mod render;
pub mod trace;

/// Page title of the tool.
pub const TITLE: &str = "Neutropaenic Sepsis Management";

/// Subtitle shown under the title.
pub const CAPTION: &str = "ADHB Antimicrobial Stewardship - Interactive Decision Support";

/// Disclaimer shown with every result.
pub const DISCLAIMER: &str = "All antibiotic decisions should be made in consultation with your clinical team and the Infectious Diseases service as appropriate. Based on ADHB Neutropaenic Sepsis Management Guidelines. Not a substitute for clinical judgement.";
