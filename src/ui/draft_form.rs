//! Bottom form backing the draft record.

use eframe::egui;

use crate::catalog::{Application, Category};
use crate::state::DraftMode;

/// Caption of the submit button for the current draft mode.
pub fn submit_label(mode: DraftMode) -> &'static str {
    match mode {
        DraftMode::Creating => "➕ Añadir",
        DraftMode::Editing(_) => "💾 Guardar cambios",
    }
}

/// Render name, description and category inputs plus the submit button.
/// Returns true when the user asked to commit the draft.
pub fn render_draft_form(ui: &mut egui::Ui, draft: &mut Application, mode: DraftMode) -> bool {
    let mut submit = false;

    ui.horizontal(|ui| {
        let name = ui.add(
            egui::TextEdit::singleline(&mut draft.name)
                .hint_text("Nombre de la aplicación")
                .desired_width(180.0),
        );
        let description = ui.add(
            egui::TextEdit::singleline(&mut draft.description)
                .hint_text("Descripción")
                .desired_width(280.0),
        );

        egui::ComboBox::from_id_salt("draft_category")
            .selected_text(draft.category.label())
            .show_ui(ui, |ui| {
                for category in Category::ALL {
                    ui.selectable_value(&mut draft.category, category, category.label());
                }
            });

        if ui.button(submit_label(mode)).clicked() {
            submit = true;
        }

        // Also submit on Enter from either text field
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter && (name.lost_focus() || description.lost_focus()) {
            submit = true;
        }
    });

    submit
}
