//! Baseline seed dataset.
//!
//! Used by `SnapshotStore::seed` when no snapshot exists yet, so the
//! catalog is never empty on first start.

use chrono::NaiveDate;

use super::{PricingTier, Product};

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    company_id: &str,
    category: &str,
    sub_category: &str,
    description: &str,
    pricing: &[PricingTier],
    launch: (i32, u32, u32),
    total_users: u64,
    rating: f32,
    growth_rate: f32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        company_id: company_id.to_string(),
        category: category.to_string(),
        sub_category: sub_category.to_string(),
        description: description.to_string(),
        features: vec![],
        tags: vec![],
        website: format!("https://{}.example.com", id),
        logo_url: format!("https://cdn.example.com/logos/{}.png", id),
        pricing: pricing.to_vec(),
        launch_date: NaiveDate::from_ymd_opt(launch.0, launch.1, launch.2)
            .expect("valid baseline date"),
        last_update: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid baseline date"),
        total_users,
        rating,
        growth_rate,
    }
}

/// The hardcoded baseline product list.
pub fn baseline_products() -> Vec<Product> {
    use PricingTier::*;
    vec![
        entry(
            "nova-chat",
            "NovaChat",
            "nova-labs",
            "Chatbots & Assistants",
            "General Purpose",
            "Conversational assistant for everyday questions and drafting.",
            &[Free, Paid],
            (2022, 11, 30),
            180_000_000,
            4.6,
            14.2,
        ),
        entry(
            "deskmate",
            "DeskMate",
            "deskmate-ai",
            "Chatbots & Assistants",
            "Customer Support",
            "Support agent that resolves tickets from your knowledge base.",
            &[Freemium, Enterprise],
            (2021, 5, 12),
            2_400_000,
            4.1,
            8.7,
        ),
        entry(
            "codepilot",
            "CodePilot",
            "forgeworks",
            "Chatbots & Assistants",
            "Coding Assistants",
            "In-editor completion and refactoring suggestions.",
            &[Paid, Enterprise],
            (2021, 10, 27),
            15_000_000,
            4.4,
            11.9,
        ),
        entry(
            "dreamframe",
            "DreamFrame",
            "dreamframe",
            "Image & Video",
            "Image Generation",
            "Text-to-image generation with style presets.",
            &[Freemium, Paid],
            (2022, 7, 12),
            16_000_000,
            4.5,
            9.3,
        ),
        entry(
            "clipforge",
            "ClipForge",
            "forgeworks",
            "Image & Video",
            "Video Generation",
            "Short-form video generation from scripts.",
            &[Paid],
            (2023, 2, 6),
            900_000,
            3.9,
            22.4,
        ),
        entry(
            "prosepilot",
            "ProsePilot",
            "inkwell",
            "Writing & Content",
            "Copywriting",
            "Marketing copy and product descriptions in your brand voice.",
            &[Freemium, Paid, Enterprise],
            (2020, 1, 21),
            10_000_000,
            4.2,
            5.1,
        ),
        entry(
            "polyglot",
            "Polyglot",
            "lingua-tech",
            "Writing & Content",
            "Translation",
            "Document translation preserving layout and terminology.",
            &[Free, Paid],
            (2017, 8, 28),
            1_000_000_000,
            4.7,
            3.4,
        ),
        entry(
            "vocalize",
            "Vocalize",
            "soundline",
            "Audio & Speech",
            "Text to Speech",
            "Natural voices for narration and product demos.",
            &[Freemium, Paid],
            (2022, 1, 10),
            1_500_000,
            4.3,
            13.0,
        ),
        entry(
            "scribeline",
            "ScribeLine",
            "soundline",
            "Audio & Speech",
            "Speech to Text",
            "Meeting transcription with speaker labels.",
            &[Free, Freemium],
            (2019, 3, 4),
            20_000_000,
            4.0,
            6.2,
        ),
        entry(
            "queryowl",
            "QueryOwl",
            "owl-analytics",
            "Data & Analytics",
            "Business Intelligence",
            "Ask questions over your warehouse in plain language.",
            &[Enterprise],
            (2021, 9, 15),
            300_000,
            4.1,
            17.8,
        ),
    ]
}
