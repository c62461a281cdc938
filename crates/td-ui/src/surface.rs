//! egui implementation of the rendering surface
//!
//! Controls describe their nodes once; every frame [`EguiSurface::show`]
//! redraws a node subtree and hands back the clickables that were pressed.

use egui::{Frame, RichText, Ui};
use td_core::{NodeKind, RenderSurface, SurfaceHandle, SurfaceTree};
use tracing::warn;

use crate::theme::CONTROL_STYLE;
use crate::widget_utils::WidgetId;

/// Retained node tree drawn with egui
pub struct EguiSurface {
    tree: SurfaceTree,
    id_base: String,
}

impl EguiSurface {
    /// Create an empty surface. `id_base` keeps widget IDs apart from other surfaces.
    pub fn new(id_base: impl Into<String>) -> Self {
        Self {
            tree: SurfaceTree::new(),
            id_base: id_base.into(),
        }
    }

    /// The underlying node tree
    pub fn tree(&self) -> &SurfaceTree {
        &self.tree
    }

    /// Draw `root` and its descendants, returning the handles clicked this frame
    pub fn show(&self, ui: &mut Ui, root: SurfaceHandle) -> Vec<SurfaceHandle> {
        let mut clicked = Vec::new();
        self.show_node(ui, root, &mut clicked);
        clicked
    }

    fn show_node(&self, ui: &mut Ui, handle: SurfaceHandle, clicked: &mut Vec<SurfaceHandle>) {
        let style = &*CONTROL_STYLE;
        let id = WidgetId::new(&self.id_base).node(handle).id();

        match self.tree.kind(handle) {
            Some(NodeKind::Container) => {
                ui.push_id(id, |ui| {
                    Frame::none()
                        .fill(style.container_fill)
                        .rounding(style.container_rounding)
                        .inner_margin(style.container_margin)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.spacing_mut().item_spacing.x = style.gap;
                                for child in self.tree.children(handle) {
                                    self.show_node(ui, *child, clicked);
                                }
                            });
                        });
                });
            }
            Some(NodeKind::Clickable) => {
                let active = self.tree.is_active(handle);
                let text = self.tree.text(handle).unwrap_or("");
                let text = if active {
                    RichText::new(text).strong().color(style.active_text_color)
                } else {
                    RichText::new(text).color(style.text_color)
                };
                let fill = if active { style.active_fill } else { style.button_fill };
                let button = egui::Button::new(text).fill(fill).selected(active);

                let response = ui
                    .push_id(id, |ui| ui.add_enabled(!self.tree.is_disabled(handle), button))
                    .inner;
                let response = match self.tree.hint(handle) {
                    Some(hint) => response.on_hover_text(hint).on_disabled_hover_text(hint),
                    None => response,
                };

                if response.clicked() {
                    if let Some(handle) = self.tree.click(handle) {
                        clicked.push(handle);
                    }
                }
            }
            Some(NodeKind::Label) => {
                let text = self.tree.text(handle).unwrap_or("");
                ui.label(
                    RichText::new(text)
                        .strong()
                        .size(style.value_size)
                        .color(style.active_text_color),
                );
            }
            None => warn!("Cannot draw unknown surface {}", handle),
        }
    }
}

impl RenderSurface for EguiSurface {
    fn clickable(&mut self, label: &str, disabled: bool) -> SurfaceHandle {
        self.tree.clickable(label, disabled)
    }

    fn label(&mut self, text: &str) -> SurfaceHandle {
        self.tree.label(text)
    }

    fn container(&mut self) -> SurfaceHandle {
        self.tree.container()
    }

    fn set_text(&mut self, handle: SurfaceHandle, text: &str) {
        self.tree.set_text(handle, text);
    }

    fn set_hint(&mut self, handle: SurfaceHandle, hint: &str) {
        self.tree.set_hint(handle, hint);
    }

    fn set_active(&mut self, handle: SurfaceHandle, active: bool) {
        self.tree.set_active(handle, active);
    }

    fn set_disabled(&mut self, handle: SurfaceHandle, disabled: bool) {
        self.tree.set_disabled(handle, disabled);
    }

    fn compose(&mut self, container: SurfaceHandle, children: &[SurfaceHandle]) {
        self.tree.compose(container, children);
    }
}
