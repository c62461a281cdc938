//! User interface components for the Tour de Data dashboard
//!
//! This crate provides the egui rendering surface for the navigation
//! controls, the theme, and the panel that hosts the controls.

pub mod controls_panel;
pub mod surface;
pub mod theme;
pub mod widget_utils;

/// Re-export commonly used types
pub use controls_panel::{ControlsPanel, ControlsPanelConfig, YearAction};
pub use surface::EguiSurface;
pub use theme::{apply_theme, install_control_styles, Theme, CONTROL_STYLE};
pub use widget_utils::WidgetId;

// Panel IDs
pub mod panel_ids {
    pub const HEADER: &str = "header_panel";
    pub const CONTROLS: &str = "controls_panel";
}
