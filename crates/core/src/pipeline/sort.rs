//! Sort comparators.

use std::cmp::Ordering;

use crate::product::Product;

use super::types::{SortOption, SortSpec};

fn cmp_str(a: &str, b: &str) -> Ordering {
    // Locale-aware collation approximated by case-insensitive Unicode
    // comparison; good enough for catalog names.
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn cmp_f32(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Compare two products under a single sort option.
pub fn compare(option: SortOption, a: &Product, b: &Product) -> Ordering {
    match option {
        SortOption::NameAsc => cmp_str(&a.name, &b.name),
        SortOption::NameDesc => cmp_str(&b.name, &a.name),
        SortOption::CompanyAsc => cmp_str(&a.company_id, &b.company_id),
        SortOption::CompanyDesc => cmp_str(&b.company_id, &a.company_id),
        SortOption::UsersAsc => a.total_users.cmp(&b.total_users),
        SortOption::UsersDesc => b.total_users.cmp(&a.total_users),
        SortOption::GrowthAsc => cmp_f32(a.growth_rate, b.growth_rate),
        SortOption::GrowthDesc => cmp_f32(b.growth_rate, a.growth_rate),
        SortOption::RatingAsc => cmp_f32(a.rating, b.rating),
        SortOption::RatingDesc => cmp_f32(b.rating, a.rating),
        SortOption::Unsorted => Ordering::Equal,
    }
}

/// Compose a two-level comparator: primary order, secondary tie-break.
pub fn compose(spec: &SortSpec) -> impl Fn(&Product, &Product) -> Ordering + '_ {
    move |a, b| compare(spec.primary, a, b).then_with(|| compare(spec.secondary, a, b))
}

/// Stable in-place sort under the composed comparator.
///
/// Records equal under both levels keep their relative input order.
pub fn sort(products: &mut [Product], spec: &SortSpec) {
    let cmp = compose(spec);
    products.sort_by(|a, b| cmp(a, b));
}
