//! Dashboard selection shared between the controls and the page

use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use td_core::{BoundedRangeStepper, CyclicOptionSelector, DashboardConfig, IndexedOptionSelector};
use td_ui::ControlsPanel;
use tracing::info;

/// What the dashboard currently shows, as reported by the controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSelection {
    pub metric: String,
    pub view: String,
    pub view_index: usize,
    pub year: i32,

    /// Number of change notifications received so far
    pub changes: usize,
}

impl DashboardSelection {
    fn from_controls(
        metric: &CyclicOptionSelector<String>,
        view: &IndexedOptionSelector<String>,
        year: &BoundedRangeStepper,
    ) -> Self {
        Self {
            metric: metric.current().clone(),
            view: view.selected().clone(),
            view_index: view.selected_index(),
            year: year.value(),
            changes: 0,
        }
    }
}

/// Build the three controls from `config`, wired to write into a shared selection
pub fn build_controls(
    config: &DashboardConfig,
) -> Result<(ControlsPanel, Arc<RwLock<DashboardSelection>>)> {
    // Callbacks only run after construction, once the selection is seeded
    let selection = Arc::new(RwLock::new(DashboardSelection {
        metric: String::new(),
        view: String::new(),
        view_index: 0,
        year: config.year.start,
        changes: 0,
    }));

    let sink = selection.clone();
    let metric = CyclicOptionSelector::new(config.metrics.clone(), move |metric: &String| {
        let mut selection = sink.write();
        selection.metric = metric.clone();
        selection.changes += 1;
    })?;

    let sink = selection.clone();
    let view = IndexedOptionSelector::new(
        config.views.clone(),
        move |view: &String, index| {
            let mut selection = sink.write();
            selection.view = view.clone();
            selection.view_index = index;
            selection.changes += 1;
        },
        Some(config.initial_view),
    )?;

    let sink = selection.clone();
    let year = BoundedRangeStepper::with_skip_step(
        config.year.start,
        config.year.min,
        config.year.max,
        move |year| {
            let mut selection = sink.write();
            selection.year = year;
            selection.changes += 1;
        },
        config.year.skip_step,
    )?;

    *selection.write() = DashboardSelection::from_controls(&metric, &view, &year);
    info!(
        metric = %metric.current(),
        view = %view.selected(),
        year = year.value(),
        "Controls ready"
    );

    Ok((ControlsPanel::new(metric, view, year), selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use td_ui::YearAction;

    #[test]
    fn test_initial_selection_mirrors_controls() {
        let config = DashboardConfig {
            initial_view: 2,
            ..Default::default()
        };
        let (_, selection) = build_controls(&config).unwrap();
        let selection = selection.read();
        assert_eq!(selection.metric, "Riders");
        assert_eq!(selection.view, "Riders");
        assert_eq!(selection.view_index, 2);
        assert_eq!(selection.year, 2025);
        assert_eq!(selection.changes, 0);
    }

    #[test]
    fn test_changes_flow_into_selection() {
        let (mut panel, selection) = build_controls(&DashboardConfig::default()).unwrap();

        // Already at the last season
        assert!(!panel.step_year(YearAction::StepUp));
        assert!(panel.step_year(YearAction::SkipDown));

        let selection = selection.read();
        assert_eq!(selection.year, 2015);
        assert_eq!(selection.changes, 1);
    }

    #[test]
    fn test_invalid_config_refused() {
        let config = DashboardConfig {
            views: Vec::new(),
            ..Default::default()
        };
        assert!(build_controls(&config).is_err());
    }
}
