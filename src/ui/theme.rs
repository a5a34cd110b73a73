//! Colors and styling for the catalog window.

use eframe::egui::{self, Color32};

use crate::catalog::Category;

/// Semantic colors for one visual mode.
#[derive(Clone, Debug)]
pub struct HubTheme {
    /// App background, card background, card hover.
    pub surface: [Color32; 3],
    pub accent: Color32,
    pub success: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border_medium: Color32,
}

impl HubTheme {
    pub fn dark() -> Self {
        Self {
            surface: [
                Color32::from_rgb(10, 10, 15),
                Color32::from_rgb(28, 28, 38),
                Color32::from_rgb(37, 37, 50),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(67, 181, 129),
            error: Color32::from_rgb(240, 71, 71),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            text_muted: Color32::from_rgb(114, 118, 125),
            border_medium: Color32::from_rgb(47, 49, 54),
        }
    }

    pub fn light() -> Self {
        Self {
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(246, 246, 247),
                Color32::from_rgb(227, 229, 232),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(67, 181, 129),
            error: Color32::from_rgb(240, 71, 71),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_secondary: Color32::from_rgb(79, 86, 96),
            text_muted: Color32::from_rgb(116, 127, 141),
            border_medium: Color32::from_rgb(210, 213, 219),
        }
    }

    /// Theme matching the context's current visuals.
    pub fn for_ctx(ctx: &egui::Context) -> Self {
        if ctx.style().visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Badge color for a category tag.
pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Chatbots => Color32::from_rgb(0, 175, 244),
        Category::ImageGeneration => Color32::from_rgb(235, 69, 158),
        Category::Audio => Color32::from_rgb(250, 166, 26),
        Category::Other => Color32::from_rgb(114, 118, 125),
    }
}

/// Spacing tweaks applied once at startup.
pub fn apply_app_style(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_colors_distinct() {
        let colors: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| category_color(*c)).collect();
        assert_eq!(colors.len(), Category::ALL.len());
    }

    #[test]
    fn test_themes_differ() {
        assert_ne!(HubTheme::dark().text_primary, HubTheme::light().text_primary);
    }
}
