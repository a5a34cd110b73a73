//! Status toast notifications - floating messages in the top-right corner.

use eframe::egui;

use crate::state::StatusLevel;
use crate::ui::theme::HubTheme;

/// Render floating status toasts (top-right corner).
///
/// # Arguments
/// * `ctx` - The egui context
/// * `status_messages` - List of (message, severity, timestamp) triples
pub fn render_status_toasts(
    ctx: &egui::Context,
    status_messages: &[(String, StatusLevel, std::time::Instant)],
) {
    if status_messages.is_empty() {
        return;
    }

    let theme = HubTheme::for_ctx(ctx);

    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 50.0]) // Below the toolbar
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(30, 30, 30, 230))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for (msg, level, _) in status_messages {
                        let color = match level {
                            StatusLevel::Error => theme.error,
                            StatusLevel::Info => theme.success,
                        };
                        ui.label(egui::RichText::new(msg).color(color));
                    }
                });
        });
}
