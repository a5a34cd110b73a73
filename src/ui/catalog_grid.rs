//! Card grid of catalog entries with per-card edit and delete buttons.

use eframe::egui::{self, RichText, Stroke};

use crate::catalog::Application;
use crate::ui::theme::{category_color, HubTheme};

const CARD_WIDTH: f32 = 240.0;

/// Per-card requests. Positions are catalog positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit(usize),
    Delete(usize),
}

/// Render the filtered entries as wrapped cards.
///
/// `entries` pairs each visible application with its catalog position;
/// `editing` highlights the card behind the draft form.
pub fn render_catalog_grid(
    ui: &mut egui::Ui,
    theme: &HubTheme,
    entries: &[(usize, &Application)],
    editing: Option<usize>,
) -> Option<CardAction> {
    let mut action = None;

    if entries.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No hay aplicaciones que coincidan").color(theme.text_muted));
        });
        return None;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for &(position, app) in entries {
                    if let Some(card_action) = render_card(ui, theme, position, app, editing == Some(position)) {
                        action = Some(card_action);
                    }
                }
            });
        });

    action
}

fn render_card(
    ui: &mut egui::Ui,
    theme: &HubTheme,
    position: usize,
    app: &Application,
    is_editing: bool,
) -> Option<CardAction> {
    let mut action = None;
    let stroke = if is_editing {
        Stroke::new(2.0, theme.accent)
    } else {
        Stroke::new(1.0, theme.border_medium)
    };

    egui::Frame::new()
        .fill(theme.surface[1])
        .stroke(stroke)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&app.name)
                            .size(16.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .small_button(RichText::new("🗑").color(theme.error))
                            .on_hover_text("Eliminar")
                            .clicked()
                        {
                            action = Some(CardAction::Delete(position));
                        }
                        if ui
                            .small_button(RichText::new("✏").color(theme.accent))
                            .on_hover_text("Editar")
                            .clicked()
                        {
                            action = Some(CardAction::Edit(position));
                        }
                    });
                });
                ui.label(RichText::new(&app.description).color(theme.text_secondary));
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Categoría: {}", app.category))
                        .small()
                        .color(category_color(app.category)),
                );
            });
        });

    action
}
