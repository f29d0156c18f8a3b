//! Types for catalog products.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pricing model of a product. A product may carry several tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingTier {
    Free,
    Freemium,
    Paid,
    Enterprise,
}

/// A catalog product entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier. Merge conflict resolution keys on this.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Identifier of the owning company.
    pub company_id: String,
    /// Top-level category (must match a taxonomy entry).
    pub category: String,
    /// Subcategory within `category`.
    pub sub_category: String,
    /// Short description.
    pub description: String,
    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Product website URL.
    pub website: String,
    /// Logo image URL.
    pub logo_url: String,
    /// Pricing tiers offered.
    #[serde(default)]
    pub pricing: Vec<PricingTier>,
    /// Launch date.
    pub launch_date: NaiveDate,
    /// Last known update date.
    pub last_update: NaiveDate,
    /// Reported total users.
    pub total_users: u64,
    /// Rating in 0.0..=5.0.
    pub rating: f32,
    /// Month-over-month growth rate, percent, signed.
    pub growth_rate: f32,
}

impl Product {
    /// True when any pricing tier of this product appears in `tiers`.
    pub fn pricing_intersects(&self, tiers: &[PricingTier]) -> bool {
        self.pricing.iter().any(|t| tiers.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Sample".to_string(),
            company_id: "acme".to_string(),
            category: "Chatbots".to_string(),
            sub_category: "Customer Support".to_string(),
            description: "A sample product".to_string(),
            features: vec!["fast".to_string()],
            tags: vec!["nlp".to_string()],
            website: "https://example.com".to_string(),
            logo_url: "https://example.com/logo.png".to_string(),
            pricing: vec![PricingTier::Free, PricingTier::Paid],
            launch_date: NaiveDate::from_ymd_opt(2023, 3, 14).unwrap(),
            last_update: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            total_users: 120_000,
            rating: 4.2,
            growth_rate: 12.5,
        }
    }

    #[test]
    fn test_pricing_tier_serialization() {
        assert_eq!(
            serde_json::to_string(&PricingTier::Freemium).unwrap(),
            "\"freemium\""
        );
        assert_eq!(
            serde_json::to_string(&PricingTier::Enterprise).unwrap(),
            "\"enterprise\""
        );
    }

    #[test]
    fn test_product_roundtrip() {
        let product = sample();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, "p-1");
        assert_eq!(parsed.pricing, vec![PricingTier::Free, PricingTier::Paid]);
        assert_eq!(parsed.launch_date.to_string(), "2023-03-14");
        assert_eq!(parsed.total_users, 120_000);
    }

    #[test]
    fn test_product_defaults_for_optional_lists() {
        // Records from older snapshots may omit list fields entirely.
        let json = r#"{
            "id": "p-2",
            "name": "Minimal",
            "company_id": "acme",
            "category": "Chatbots",
            "sub_category": "General",
            "description": "",
            "website": "",
            "logo_url": "",
            "launch_date": "2022-01-01",
            "last_update": "2022-06-01",
            "total_users": 10,
            "rating": 3.0,
            "growth_rate": -2.0
        }"#;
        let parsed: Product = serde_json::from_str(json).unwrap();
        assert!(parsed.features.is_empty());
        assert!(parsed.tags.is_empty());
        assert!(parsed.pricing.is_empty());
        assert_eq!(parsed.growth_rate, -2.0);
    }

    #[test]
    fn test_pricing_intersects() {
        let product = sample();
        assert!(product.pricing_intersects(&[PricingTier::Paid]));
        assert!(product.pricing_intersects(&[PricingTier::Enterprise, PricingTier::Free]));
        assert!(!product.pricing_intersects(&[PricingTier::Enterprise]));
        assert!(!product.pricing_intersects(&[]));
    }
}
