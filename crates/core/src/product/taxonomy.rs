//! Category taxonomy.
//!
//! The taxonomy drives crawl task generation: each (category, subcategory)
//! pair becomes one fetch task for the refresh runner.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A category and its subcategories, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Category name (matches `Product::category`).
    pub name: String,
    /// Ordered subcategories.
    pub sub_categories: Vec<String>,
}

/// Ordered list of categories.
pub type Taxonomy = Vec<CategorySpec>;

fn spec(name: &str, subs: &[&str]) -> CategorySpec {
    CategorySpec {
        name: name.to_string(),
        sub_categories: subs.iter().map(|s| s.to_string()).collect(),
    }
}

static DEFAULT_TAXONOMY: Lazy<Taxonomy> = Lazy::new(|| {
    vec![
        spec(
            "Chatbots & Assistants",
            &[
                "General Purpose",
                "Customer Support",
                "Coding Assistants",
                "Personal Productivity",
                "Sales & Marketing",
                "Voice Assistants",
            ],
        ),
        spec(
            "Image & Video",
            &[
                "Image Generation",
                "Video Generation",
                "Image Editing",
                "Avatars",
                "Upscaling",
                "3D & Design",
            ],
        ),
        spec(
            "Writing & Content",
            &[
                "Copywriting",
                "Long-form Writing",
                "Translation",
                "Summarization",
                "SEO",
                "Grammar & Style",
            ],
        ),
        spec(
            "Audio & Speech",
            &[
                "Text to Speech",
                "Speech to Text",
                "Music Generation",
                "Voice Cloning",
                "Audio Editing",
                "Podcasting",
            ],
        ),
        spec(
            "Data & Analytics",
            &[
                "Business Intelligence",
                "Data Extraction",
                "Forecasting",
                "Search & Retrieval",
                "MLOps",
                "Document Processing",
            ],
        ),
    ]
});

/// The built-in taxonomy of AI product categories.
pub fn default_taxonomy() -> Taxonomy {
    DEFAULT_TAXONOMY.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_shape() {
        let taxonomy = default_taxonomy();
        assert_eq!(taxonomy.len(), 5);
        for category in &taxonomy {
            assert!(!category.sub_categories.is_empty());
            assert_eq!(category.sub_categories.len(), 6);
        }
    }

    #[test]
    fn test_taxonomy_task_count() {
        let taxonomy = default_taxonomy();
        let tasks: usize = taxonomy.iter().map(|c| c.sub_categories.len()).sum();
        assert_eq!(tasks, 30);
    }

    #[test]
    fn test_category_spec_serialization() {
        let category = spec("Test", &["A", "B"]);
        let json = serde_json::to_string(&category).unwrap();
        let parsed: CategorySpec = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "Test");
        assert_eq!(parsed.sub_categories, vec!["A", "B"]);
    }
}
