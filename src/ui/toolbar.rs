//! Top toolbar: search box, category filter, language selector, translate button.

use eframe::egui;

use crate::catalog::CategoryFilter;
use crate::language::Language;
use crate::state::FilterState;

/// Actions that the toolbar can request
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    /// User clicked the translate button
    TranslateAll,
}

/// Render the toolbar. Filter edits are applied in place.
/// Returns Some(ToolbarAction) if an action was requested.
pub fn render_toolbar(
    ui: &mut egui::Ui,
    filter: &mut FilterState,
    translating: bool,
) -> Option<ToolbarAction> {
    let mut toolbar_action: Option<ToolbarAction> = None;

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut filter.search_text)
                .hint_text("🔍 Buscar aplicación...")
                .desired_width(220.0),
        );
        if !filter.search_text.is_empty() && ui.small_button("✕").clicked() {
            filter.search_text.clear();
        }

        egui::ComboBox::from_id_salt("category_filter")
            .selected_text(filter.category_filter.label())
            .show_ui(ui, |ui| {
                for option in CategoryFilter::ALL {
                    ui.selectable_value(&mut filter.category_filter, option, option.label());
                }
            });

        egui::ComboBox::from_id_salt("target_language")
            .selected_text(filter.target_language.label())
            .show_ui(ui, |ui| {
                for lang in Language::ALL {
                    ui.selectable_value(&mut filter.target_language, lang, lang.label());
                }
            });

        let button = egui::Button::new(if translating { "⏳ Traduciendo" } else { "🌐 Traducir" });
        let same_language = filter.target_language == Language::SOURCE;
        if ui
            .add_enabled(!translating && !same_language, button)
            .on_hover_text("Traducir todo el catálogo desde el español")
            .on_disabled_hover_text(if same_language {
                "El catálogo ya está en español"
            } else {
                "Traducción en curso"
            })
            .clicked()
        {
            toolbar_action = Some(ToolbarAction::TranslateAll);
        }
        if translating {
            ui.spinner();
        }
    });

    toolbar_action
}
