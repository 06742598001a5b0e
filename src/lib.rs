//! resource-timeline: host-agnostic resource timeline engine.
//!
//! The crate maps consumption intervals of a fixed resource roster onto a
//! scrollable two-dimensional timeline (rows are resources, the horizontal
//! axis is wall-clock time at a fixed zoom of one day per viewport width),
//! builds layered render frames for the visible window only, and resolves
//! clicks to interval selection. A slot-based generator produces synthetic
//! datasets for demos and tests.

pub mod api;
pub mod core;
pub mod error;
pub mod generator;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineConfig, TimelineEngine};
pub use error::{TimelineError, TimelineResult};
