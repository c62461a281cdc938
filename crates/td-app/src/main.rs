//! Main application entry point

use std::sync::Arc;

use anyhow::{Context as _, Result};
use eframe::egui::{self, Context};
use parking_lot::RwLock;
use tracing::{debug, info};

use td_core::DashboardConfig;
use td_ui::{panel_ids, ControlsPanel, Theme, YearAction};

mod selection;

use selection::{build_controls, DashboardSelection};

/// Main application state
struct TourDeDataApp {
    /// Title shown in the header
    title: String,

    /// The mounted navigation controls
    controls: ControlsPanel,

    /// Selection written by the control callbacks
    selection: Arc<RwLock<DashboardSelection>>,
}

impl TourDeDataApp {
    fn new(cc: &eframe::CreationContext<'_>, config: &DashboardConfig) -> Result<Self> {
        td_ui::apply_theme(&cc.egui_ctx, &Theme::default());
        td_ui::install_control_styles(&cc.egui_ctx);

        let (controls, selection) = build_controls(config)?;

        Ok(Self {
            title: config.title.clone(),
            controls,
            selection,
        })
    }

    /// Arrow keys step the season, Page Up/Down skip
    fn handle_keys(&mut self, ctx: &Context) {
        let actions = ctx.input(|i| {
            let mut actions = Vec::new();
            if i.key_pressed(egui::Key::ArrowLeft) {
                actions.push(YearAction::StepDown);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                actions.push(YearAction::StepUp);
            }
            if i.key_pressed(egui::Key::PageDown) {
                actions.push(YearAction::SkipDown);
            }
            if i.key_pressed(egui::Key::PageUp) {
                actions.push(YearAction::SkipUp);
            }
            actions
        });

        for action in actions {
            if !self.controls.step_year(action) {
                debug!(?action, "Season key ignored at bound");
            }
        }
    }

    fn show_selection(&self, ui: &mut egui::Ui) {
        let selection = self.selection.read();

        ui.heading(format!("{} · {}", selection.view, selection.year));
        ui.add_space(4.0);
        ui.label(format!(
            "Showing {} by {}",
            selection.metric.to_lowercase(),
            selection.view.to_lowercase()
        ));
        ui.add_space(12.0);

        egui::Grid::new("selection_grid").num_columns(2).show(ui, |ui| {
            ui.label("Metric");
            ui.label(egui::RichText::new(&selection.metric).strong());
            ui.end_row();

            ui.label("View");
            let view = format!("{} (#{})", selection.view, selection.view_index);
            ui.label(egui::RichText::new(view).strong());
            ui.end_row();

            ui.label("Season");
            ui.label(egui::RichText::new(selection.year.to_string()).strong());
            ui.end_row();

            ui.label("Changes");
            ui.label(selection.changes.to_string());
            ui.end_row();
        });
    }
}

impl eframe::App for TourDeDataApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top(panel_ids::HEADER).show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(egui::RichText::new(&self.title).strong());
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::top(panel_ids::CONTROLS).show(ctx, |ui| {
            ui.add_space(6.0);
            self.controls.ui(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_selection(ui);
        });
    }
}

fn load_config() -> Result<DashboardConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            DashboardConfig::load(&path)
        }
        None => {
            info!("No configuration given, using defaults");
            Ok(DashboardConfig::default())
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Tour de Data");

    let config = load_config().context("Cannot start without a valid configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 540.0])
            .with_min_inner_size([640.0, 360.0]),
        default_theme: eframe::Theme::Light,
        persist_window: false,
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| match TourDeDataApp::new(cc, &config) {
            Ok(app) => Box::new(app) as Box<dyn eframe::App>,
            Err(e) => {
                tracing::error!("Failed to build controls: {:#}", e);
                std::process::exit(1);
            }
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
