//! Two-arrow switcher that cycles through a fixed option list

use std::fmt::{self, Display};

use tracing::debug;

use super::Control;
use crate::error::{ControlError, Result};
use crate::surface::{RenderSurface, SurfaceHandle};

const PREVIOUS_GLYPH: &str = "←";
const NEXT_GLYPH: &str = "→";

/// Handles created when the selector is mounted
#[derive(Debug, Clone, Copy)]
struct Binding {
    container: SurfaceHandle,
    previous: SurfaceHandle,
    label: SurfaceHandle,
    next: SurfaceHandle,
}

/// Cycles forward or backward through its options, wrapping at both ends.
///
/// There is no disabled state and no no-op suppression: every step notifies,
/// even on a single-option list where the step lands on the same option.
pub struct CyclicOptionSelector<L> {
    options: Vec<L>,
    index: usize,
    on_change: Box<dyn FnMut(&L) + Send>,
    binding: Option<Binding>,
}

impl<L: Display> CyclicOptionSelector<L> {
    /// Create a selector showing the first option.
    ///
    /// Fails with [`ControlError::EmptyOptions`] when `options` is empty.
    pub fn new<F>(options: impl IntoIterator<Item = L>, on_change: F) -> Result<Self>
    where
        F: FnMut(&L) + Send + 'static,
    {
        let options: Vec<L> = options.into_iter().collect();
        if options.is_empty() {
            return Err(ControlError::EmptyOptions);
        }

        Ok(Self {
            options,
            index: 0,
            on_change: Box::new(on_change),
            binding: None,
        })
    }

    pub fn options(&self) -> &[L] {
        &self.options
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Currently displayed option
    pub fn current(&self) -> &L {
        &self.options[self.index]
    }

    /// Move to the previous option, wrapping from the first to the last
    pub fn step_backward(&mut self) -> &L {
        let len = self.options.len();
        self.index = (self.index + len - 1) % len;
        self.notify();
        self.current()
    }

    /// Move to the next option, wrapping from the last to the first
    pub fn step_forward(&mut self) -> &L {
        self.index = (self.index + 1) % self.options.len();
        self.notify();
        self.current()
    }

    fn notify(&mut self) {
        debug!(index = self.index, option = %self.options[self.index], "Cyclic selector changed");
        (self.on_change)(&self.options[self.index]);
    }

    /// Push the current option into the bound label
    pub fn refresh(&self, surface: &mut dyn RenderSurface) {
        if let Some(binding) = self.binding {
            surface.set_text(binding.label, &self.current().to_string());
        }
    }

    /// Container created by the last [`Control::mount`], if any
    pub fn container(&self) -> Option<SurfaceHandle> {
        self.binding.map(|b| b.container)
    }
}

impl<L: Display> Control for CyclicOptionSelector<L> {
    fn mount(&mut self, surface: &mut dyn RenderSurface) -> SurfaceHandle {
        let container = surface.container();
        let previous = surface.clickable(PREVIOUS_GLYPH, false);
        let label = surface.label(&self.current().to_string());
        let next = surface.clickable(NEXT_GLYPH, false);
        surface.compose(container, &[previous, label, next]);

        self.binding = Some(Binding {
            container,
            previous,
            label,
            next,
        });
        container
    }

    fn handle_click(&mut self, surface: &mut dyn RenderSurface, handle: SurfaceHandle) -> bool {
        let Some(binding) = self.binding else {
            return false;
        };

        if handle == binding.previous {
            self.step_backward();
        } else if handle == binding.next {
            self.step_forward();
        } else {
            return false;
        }

        self.refresh(surface);
        true
    }
}

impl<L: fmt::Debug> fmt::Debug for CyclicOptionSelector<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CyclicOptionSelector")
            .field("options", &self.options)
            .field("index", &self.index)
            .field("binding", &self.binding)
            .finish()
    }
}
