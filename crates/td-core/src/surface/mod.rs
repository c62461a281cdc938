//! Rendering surface contract
//!
//! Controls never build widgets themselves. They describe their nodes through
//! [`RenderSurface`] and get clicks routed back by handle, so the same state
//! machine runs against egui, a headless tree, or anything else that can show
//! a labeled button.

use serde::{Deserialize, Serialize};
use std::fmt;

mod tree;

pub use tree::{NodeKind, SurfaceTree};

/// Opaque identifier for a node created on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceHandle(u32);

impl SurfaceHandle {
    /// Create a handle from a raw node index
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw node index
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Minimal presentation interface consumed by the controls
pub trait RenderSurface {
    /// Produce an interactive affordance. A disabled clickable never reports a click.
    fn clickable(&mut self, label: &str, disabled: bool) -> SurfaceHandle;

    /// Produce a non-interactive text display
    fn label(&mut self, text: &str) -> SurfaceHandle;

    /// Produce an empty container for [`RenderSurface::compose`]
    fn container(&mut self) -> SurfaceHandle;

    /// Replace the text of a label or clickable
    fn set_text(&mut self, handle: SurfaceHandle, text: &str);

    /// Attach hover text to a node
    fn set_hint(&mut self, handle: SurfaceHandle, hint: &str);

    /// Toggle the "selected" marker on a clickable
    fn set_active(&mut self, handle: SurfaceHandle, active: bool);

    /// Toggle the disabled state without recreating the node
    fn set_disabled(&mut self, handle: SurfaceHandle, disabled: bool);

    /// Arrange children inside a container, in the given order
    fn compose(&mut self, container: SurfaceHandle, children: &[SurfaceHandle]);
}
