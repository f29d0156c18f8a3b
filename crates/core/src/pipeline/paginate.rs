//! Pagination.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Fixed page size.
pub const PAGE_SIZE: usize = 48;

/// One page of a filtered-and-sorted list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// The records on this page.
    pub items: Vec<Product>,
    /// 1-indexed page number this slice corresponds to.
    pub page: usize,
    /// Total number of pages for the full list.
    pub total_pages: usize,
    /// Total number of records in the full list.
    pub total_items: usize,
}

/// Slice page `page` (1-indexed) out of `products`.
///
/// Pages past the end are empty; page 0 is treated as page 1.
pub fn paginate(products: &[Product], page: usize) -> Page {
    let page = page.max(1);
    let total_items = products.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE);

    let start = (page - 1).saturating_mul(PAGE_SIZE);
    let items = if start >= total_items {
        vec![]
    } else {
        products[start..(start + PAGE_SIZE).min(total_items)].to_vec()
    };

    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}
