//! Filtering predicates.
//!
//! A record passes iff every enabled predicate holds (AND across
//! dimensions); list-valued dimensions match on membership (OR within).

use crate::product::Product;

use super::types::{FilterSpec, SearchField};

fn search_matches(product: &Product, spec: &FilterSpec) -> bool {
    if spec.search.is_empty() {
        return true;
    }
    let needle = spec.search.to_lowercase();
    let fields: &[SearchField] = if spec.search_fields.is_empty() {
        &SearchField::ALL
    } else {
        &spec.search_fields
    };
    fields.iter().any(|field| {
        let haystack = match field {
            SearchField::Name => &product.name,
            SearchField::Description => &product.description,
            SearchField::Company => &product.company_id,
        };
        haystack.to_lowercase().contains(&needle)
    })
}

fn date_range_matches(product: &Product, spec: &FilterSpec) -> bool {
    if let Some(start) = spec.date_range.start {
        if product.launch_date < start {
            return false;
        }
    }
    if let Some(end) = spec.date_range.end {
        if product.launch_date > end {
            return false;
        }
    }
    true
}

/// Whether a single record satisfies every enabled predicate.
pub fn matches(product: &Product, spec: &FilterSpec) -> bool {
    search_matches(product, spec)
        && (spec.category.is_empty() || spec.category.contains(&product.category))
        && spec
            .sub_category
            .as_ref()
            .map(|sub| *sub == product.sub_category)
            .unwrap_or(true)
        && product.rating >= spec.min_rating
        && (spec.pricing.is_empty() || product.pricing_intersects(&spec.pricing))
        && product.growth_rate >= spec.min_growth
        && date_range_matches(product, spec)
}

/// Filter `products` down to the records matching `spec`, preserving
/// input order.
pub fn filter(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches(p, spec))
        .cloned()
        .collect()
}
