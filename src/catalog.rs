//! Catalog records: applications, their categories, and the startup seed.

use std::fmt;

/// Fixed set of categories an application can be tagged with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    Chatbots,
    ImageGeneration,
    Audio,
    #[default]
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Chatbots,
        Category::ImageGeneration,
        Category::Audio,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Chatbots => "Chatbots",
            Category::ImageGeneration => "Generación de Imágenes",
            Category::Audio => "Audio",
            Category::Other => "Otros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selector used by the list view. `All` is the "Todos" option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// "Todos" followed by every category.
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Chatbots),
        CategoryFilter::Only(Category::ImageGeneration),
        CategoryFilter::Only(Category::Audio),
        CategoryFilter::Only(Category::Other),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "Todos",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// A single catalog entry. Its position in the catalog is its identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Application {
    pub name: String,
    pub description: String,
    pub category: Category,
}

impl Application {
    pub fn new(name: impl Into<String>, description: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
        }
    }
}

/// The records the catalog starts with.
pub fn seed_catalog() -> Vec<Application> {
    vec![
        Application::new(
            "ChatGPT",
            "Asistente conversacional avanzado",
            Category::Chatbots,
        ),
        Application::new(
            "DALL·E",
            "Generador de imágenes con IA",
            Category::ImageGeneration,
        ),
        Application::new(
            "Whisper",
            "Reconocimiento de voz avanzado",
            Category::Audio,
        ),
    ]
}
