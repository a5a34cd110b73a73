//! Main update loop and panel layout

use eframe::egui::{self, RichText};
use std::time::Duration;

use super::HubApp;
use crate::state::DraftMode;
use crate::ui::{self, HubTheme, ToolbarAction};

impl eframe::App for HubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply translation results
        self.process_events();

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));
        // Purge old status messages (toasts) older than 4 seconds
        self.state.purge_old_status_messages(4);

        let theme = HubTheme::for_ctx(ctx);

        // Top panel: title and filter/translate toolbar
        let mut toolbar_action = None;
        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Centro de Aplicaciones de IA (Código Abierto)");
            ui.label(
                RichText::new("Este proyecto es de código abierto bajo la licencia MIT.")
                    .small()
                    .color(theme.text_muted),
            );
            ui.add_space(4.0);
            toolbar_action = ui::render_toolbar(ui, &mut self.state.filter, self.state.translating);
            ui.add_space(6.0);
        });
        if toolbar_action == Some(ToolbarAction::TranslateAll) {
            self.request_translation();
        }

        // Bottom panel: draft form
        let mut submit = false;
        egui::TopBottomPanel::bottom("draft_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            if let DraftMode::Editing(position) = self.state.mode {
                ui.label(
                    RichText::new(format!("Editando la entrada {}", position + 1))
                        .small()
                        .color(theme.accent),
                );
            }
            submit = ui::render_draft_form(ui, &mut self.state.draft, self.state.mode);
            ui.add_space(6.0);
        });
        if submit {
            self.submit_draft();
        }

        // Central panel: card grid of the filtered catalog
        let mut card_action = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.surface[0]).inner_margin(egui::Margin::same(12)))
            .show(ctx, |ui| {
                let editing = match self.state.mode {
                    DraftMode::Editing(position) => Some(position),
                    DraftMode::Creating => None,
                };
                let entries = self.state.visible();
                card_action = ui::render_catalog_grid(ui, &theme, &entries, editing);
            });
        if let Some(action) = card_action {
            self.apply_card_action(action);
        }

        ui::render_status_toasts(ctx, &self.state.status_messages);
    }
}
