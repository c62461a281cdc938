//! Widget utilities for managing IDs and preventing conflicts
//!
//! Several controls are drawn side by side from the same surface, and their
//! nodes repeat the same glyphs. These helpers derive a distinct egui ID per
//! node so "multiple widgets with same ID" warnings never fire.

use egui::Id;
use std::fmt::Display;
use td_core::SurfaceHandle;

/// Widget ID builder that ensures unique IDs by combining multiple components
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    /// Create a new widget ID builder
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Add a surface node to the ID
    pub fn node(self, handle: SurfaceHandle) -> Self {
        self.with(format!("node_{}", handle.raw()))
    }

    /// Build the final ID string
    pub fn build(&self) -> String {
        self.components.join("_")
    }

    /// Create an egui ID from this widget ID
    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_builder() {
        let id = WidgetId::new("controls")
            .with("year")
            .node(SurfaceHandle::from_raw(5))
            .build();
        assert_eq!(id, "controls_year_node_5");
    }

    #[test]
    fn test_distinct_nodes_get_distinct_ids() {
        let a = WidgetId::new("controls").node(SurfaceHandle::from_raw(1)).id();
        let b = WidgetId::new("controls").node(SurfaceHandle::from_raw(2)).id();
        assert_ne!(a, b);
    }
}
