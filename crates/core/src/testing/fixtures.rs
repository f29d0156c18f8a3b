//! Shared product fixtures.

use chrono::NaiveDate;

use crate::product::{PricingTier, Product};

/// A plain product with the given id and neutral defaults.
pub fn product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        company_id: format!("company-{}", id),
        category: "Chatbots & Assistants".to_string(),
        sub_category: "General Purpose".to_string(),
        description: format!("Description of {}", id),
        features: vec![],
        tags: vec![],
        website: format!("https://{}.example.com", id),
        logo_url: format!("https://cdn.example.com/{}.png", id),
        pricing: vec![PricingTier::Freemium],
        launch_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        last_update: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        total_users: 1_000,
        rating: 4.0,
        growth_rate: 5.0,
    }
}

/// A product with a specific rating.
pub fn product_rated(id: &str, rating: f32) -> Product {
    let mut p = product(id);
    p.rating = rating;
    p
}

/// A product placed in a specific taxonomy pair.
pub fn product_in(id: &str, category: &str, sub_category: &str) -> Product {
    let mut p = product(id);
    p.category = category.to_string();
    p.sub_category = sub_category.to_string();
    p
}
