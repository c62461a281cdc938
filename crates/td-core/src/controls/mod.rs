//! Navigation controls
//!
//! Each control is an owned state machine driven by discrete clicks. A
//! transition either mutates state and notifies the caller synchronously, or
//! is rejected as a silent no-op. Controls share nothing with each other.
//!
//! Operations take `&mut self` and the change callback is owned by the
//! control, so a callback can never re-enter the control that is notifying it.

mod cyclic;
mod indexed;
mod stepper;

pub use cyclic::CyclicOptionSelector;
pub use indexed::IndexedOptionSelector;
pub use stepper::{BoundedRangeStepper, StepperFlags, DEFAULT_SKIP_STEP};

use crate::surface::{RenderSurface, SurfaceHandle};

/// A control that can bind itself to a rendering surface
pub trait Control {
    /// Create this control's nodes on `surface` and return the container holding them.
    ///
    /// Mounting again builds a fresh subtree and rebinds the control to it.
    /// Nodes from the earlier mount stay on the surface but no longer route
    /// clicks to this control.
    fn mount(&mut self, surface: &mut dyn RenderSurface) -> SurfaceHandle;

    /// Route a click on `handle` to the matching operation.
    ///
    /// Returns `true` when the click was accepted and the caller notified.
    /// Handles that belong to another control, or clicks rejected by a guard,
    /// return `false`.
    fn handle_click(&mut self, surface: &mut dyn RenderSurface, handle: SurfaceHandle) -> bool;
}
