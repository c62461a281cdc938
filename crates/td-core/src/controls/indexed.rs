//! Segmented switcher: one button per option, exactly one marked active

use std::fmt::{self, Display};

use tracing::{debug, trace};

use super::Control;
use crate::error::{ControlError, Result};
use crate::surface::{RenderSurface, SurfaceHandle};

#[derive(Debug, Clone)]
struct Binding {
    container: SurfaceHandle,
    buttons: Vec<SurfaceHandle>,
}

/// Lets the user pick one of N options directly by index.
///
/// Re-selecting the active option is silent: no state change, no
/// notification, no marker update.
pub struct IndexedOptionSelector<L> {
    options: Vec<L>,
    selected: usize,
    on_change: Box<dyn FnMut(&L, usize) + Send>,
    binding: Option<Binding>,
}

impl<L: Display> IndexedOptionSelector<L> {
    /// Create a selector with `initial_index` active.
    ///
    /// An `initial_index` that is absent or out of bounds falls back to 0.
    pub fn new<F>(
        options: impl IntoIterator<Item = L>,
        on_change: F,
        initial_index: Option<usize>,
    ) -> Result<Self>
    where
        F: FnMut(&L, usize) + Send + 'static,
    {
        let options: Vec<L> = options.into_iter().collect();
        if options.is_empty() {
            return Err(ControlError::EmptyOptions);
        }

        let selected = match initial_index {
            Some(index) if index < options.len() => index,
            Some(index) => {
                trace!(index, len = options.len(), "Initial index out of range, using 0");
                0
            }
            None => 0,
        };

        Ok(Self {
            options,
            selected,
            on_change: Box::new(on_change),
            binding: None,
        })
    }

    pub fn options(&self) -> &[L] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &L {
        &self.options[self.selected]
    }

    /// Whether option `index` carries the active marker
    pub fn is_active(&self, index: usize) -> bool {
        index == self.selected
    }

    /// Make option `index` the active one.
    ///
    /// Returns `Ok(true)` when the selection changed and the caller was
    /// notified, `Ok(false)` when `index` was already selected.
    pub fn select(&mut self, index: usize) -> Result<bool> {
        if index >= self.options.len() {
            return Err(ControlError::IndexOutOfRange {
                index,
                len: self.options.len(),
            });
        }

        if index == self.selected {
            trace!(index, "Option already active");
            return Ok(false);
        }

        let previous = self.selected;
        self.selected = index;
        debug!(previous, index, option = %self.options[index], "Indexed selector changed");
        (self.on_change)(&self.options[index], index);
        Ok(true)
    }

    /// Re-apply active markers so that only the selected button is marked
    pub fn refresh(&self, surface: &mut dyn RenderSurface) {
        if let Some(binding) = &self.binding {
            for (index, button) in binding.buttons.iter().enumerate() {
                surface.set_active(*button, index == self.selected);
            }
        }
    }

    /// Container created by the last [`Control::mount`], if any
    pub fn container(&self) -> Option<SurfaceHandle> {
        self.binding.as_ref().map(|b| b.container)
    }
}

impl<L: Display> Control for IndexedOptionSelector<L> {
    fn mount(&mut self, surface: &mut dyn RenderSurface) -> SurfaceHandle {
        let container = surface.container();
        let buttons: Vec<SurfaceHandle> = self
            .options
            .iter()
            .map(|option| surface.clickable(&option.to_string(), false))
            .collect();
        surface.compose(container, &buttons);
        surface.set_active(buttons[self.selected], true);

        self.binding = Some(Binding { container, buttons });
        container
    }

    fn handle_click(&mut self, surface: &mut dyn RenderSurface, handle: SurfaceHandle) -> bool {
        let Some(binding) = &self.binding else {
            return false;
        };
        let Some(index) = binding.buttons.iter().position(|b| *b == handle) else {
            return false;
        };

        match self.select(index) {
            Ok(true) => {
                self.refresh(surface);
                true
            }
            _ => false,
        }
    }
}

impl<L: fmt::Debug> fmt::Debug for IndexedOptionSelector<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedOptionSelector")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("binding", &self.binding)
            .finish()
    }
}
