//! Types for the filter/sort/paginate pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::product::PricingTier;

/// Which product fields a text search inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Description,
    Company,
}

impl SearchField {
    /// The default search scope when no fields are selected.
    pub const ALL: [SearchField; 3] = [
        SearchField::Name,
        SearchField::Description,
        SearchField::Company,
    ];
}

/// Inclusive bounds on launch date. Either side may be open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

/// One level of ordering.
///
/// Unknown keys from persisted or external filter state deserialize to
/// `Unsorted`, which compares everything equal (a no-op level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    NameAsc,
    NameDesc,
    CompanyAsc,
    CompanyDesc,
    UsersAsc,
    UsersDesc,
    GrowthAsc,
    GrowthDesc,
    RatingAsc,
    RatingDesc,
    #[serde(other)]
    Unsorted,
}

/// Two-level ordering key: primary comparator, secondary tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub primary: SortOption,
    pub secondary: SortOption,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            primary: SortOption::UsersDesc,
            secondary: SortOption::RatingDesc,
        }
    }
}

/// The user-controlled description of which records are visible and in
/// what order. Ephemeral, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Free-text search; empty disables the search predicate.
    pub search: String,
    /// Fields the search inspects; empty means all of
    /// [`SearchField::ALL`].
    pub search_fields: Vec<SearchField>,
    /// Category membership filter; empty passes everything.
    pub category: Vec<String>,
    /// Exact subcategory filter; `None` passes everything.
    pub sub_category: Option<String>,
    /// Pricing intersection filter; empty passes everything.
    pub pricing: Vec<PricingTier>,
    /// Minimum rating, inclusive.
    pub min_rating: f32,
    /// Minimum growth rate, inclusive. Defaults to `f32::MIN` so
    /// negative-growth products pass an unconfigured filter.
    pub min_growth: f32,
    /// Inclusive launch date bounds.
    pub date_range: DateRange,
    /// Compound ordering.
    pub sort: SortSpec,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            search_fields: vec![],
            category: vec![],
            sub_category: None,
            pricing: vec![],
            min_rating: 0.0,
            min_growth: f32::MIN,
            date_range: DateRange::default(),
            sort: SortSpec::default(),
        }
    }
}
