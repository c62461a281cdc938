//! Panel hosting the dashboard's navigation controls
//! Metric switcher, view toggle and year slider share one egui surface

use egui::{RichText, Ui};
use td_core::{
    BoundedRangeStepper, Control, CyclicOptionSelector, IndexedOptionSelector, SurfaceHandle,
};
use tracing::trace;

use crate::panel_ids;
use crate::surface::EguiSurface;

/// Panel configuration
#[derive(Debug, Clone)]
pub struct ControlsPanelConfig {
    /// Caption drawn above the metric switcher
    pub metric_caption: String,

    /// Caption drawn above the view toggle
    pub view_caption: String,

    /// Caption drawn above the year slider
    pub year_caption: String,
}

impl Default for ControlsPanelConfig {
    fn default() -> Self {
        Self {
            metric_caption: "Metric".to_string(),
            view_caption: "View".to_string(),
            year_caption: "Season".to_string(),
        }
    }
}

/// Year slider transitions reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearAction {
    StepDown,
    StepUp,
    SkipDown,
    SkipUp,
}

/// The three mounted controls
pub struct ControlsPanel {
    metric: CyclicOptionSelector<String>,
    view: IndexedOptionSelector<String>,
    year: BoundedRangeStepper,
    surface: EguiSurface,
    metric_root: SurfaceHandle,
    view_root: SurfaceHandle,
    year_root: SurfaceHandle,
    config: ControlsPanelConfig,
}

impl ControlsPanel {
    /// Mount the controls on a fresh surface
    pub fn new(
        mut metric: CyclicOptionSelector<String>,
        mut view: IndexedOptionSelector<String>,
        mut year: BoundedRangeStepper,
    ) -> Self {
        let mut surface = EguiSurface::new(panel_ids::CONTROLS);
        let metric_root = metric.mount(&mut surface);
        let view_root = view.mount(&mut surface);
        let year_root = year.mount(&mut surface);

        Self {
            metric,
            view,
            year,
            surface,
            metric_root,
            view_root,
            year_root,
            config: ControlsPanelConfig::default(),
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: ControlsPanelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn metric(&self) -> &CyclicOptionSelector<String> {
        &self.metric
    }

    pub fn view(&self) -> &IndexedOptionSelector<String> {
        &self.view
    }

    pub fn year(&self) -> &BoundedRangeStepper {
        &self.year
    }

    pub fn surface(&self) -> &EguiSurface {
        &self.surface
    }

    /// Show the panel. Returns `true` if any control changed this frame.
    pub fn ui(&mut self, ui: &mut Ui) -> bool {
        let mut clicked = Vec::new();

        ui.horizontal(|ui| {
            for (caption, root) in [
                (&self.config.metric_caption, self.metric_root),
                (&self.config.view_caption, self.view_root),
                (&self.config.year_caption, self.year_root),
            ] {
                ui.vertical(|ui| {
                    ui.label(RichText::new(caption.as_str()).small().weak());
                    clicked.extend(self.surface.show(ui, root));
                });
                ui.add_space(16.0);
            }
        });

        let mut changed = false;
        for handle in clicked {
            changed |= self.route_click(handle);
        }
        changed
    }

    /// Run a year transition outside of a click and resync the slider
    pub fn step_year(&mut self, action: YearAction) -> bool {
        let moved = match action {
            YearAction::StepDown => self.year.step_down(),
            YearAction::StepUp => self.year.step_up(),
            YearAction::SkipDown => self.year.skip_down(),
            YearAction::SkipUp => self.year.skip_up(),
        };
        if moved {
            self.year.refresh(&mut self.surface);
        }
        moved
    }

    /// Hand a clicked node to whichever control owns it
    pub fn route_click(&mut self, handle: SurfaceHandle) -> bool {
        let handled = self.metric.handle_click(&mut self.surface, handle)
            || self.view.handle_click(&mut self.surface, handle)
            || self.year.handle_click(&mut self.surface, handle);
        if !handled {
            trace!("Click on {} changed nothing", handle);
        }
        handled
    }
}
