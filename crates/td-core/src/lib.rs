//! Core functionality for the Tour de Data dashboard
//!
//! This crate provides the navigation controls used by the dashboard pages
//! as plain state machines, plus the rendering surface they draw through.

pub mod config;
pub mod controls;
pub mod error;
pub mod surface;

// Re-export commonly used types
pub use config::{DashboardConfig, YearRangeConfig};
pub use controls::{
    BoundedRangeStepper, Control, CyclicOptionSelector, IndexedOptionSelector,
    StepperFlags, DEFAULT_SKIP_STEP,
};
pub use error::ControlError;
pub use surface::{NodeKind, RenderSurface, SurfaceHandle, SurfaceTree};
