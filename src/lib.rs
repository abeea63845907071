//! slice-nav: slice navigation for medical image viewports.
//!
//! One scroll contract drives two navigation models: clamped index
//! arithmetic over frame stacks, and camera moves along the view-plane normal
//! through volumes, kept inside the volume's slice range.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;
pub mod viewport;

pub use api::{ScrollController, ScrollControllerConfig, ScrollOutcome};
pub use error::{NavError, NavResult};
