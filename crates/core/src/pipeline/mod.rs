//! Filter/sort/paginate pipeline.
//!
//! Pure, synchronous derivation of a visible page from the full product
//! list and a [`FilterSpec`]. No side effects; byte-identical output for
//! identical input, which is what makes shareable filter state meaningful.

mod filter;
mod paginate;
mod sort;
mod types;

pub use filter::{filter, matches};
pub use paginate::{paginate, Page, PAGE_SIZE};
pub use sort::{compare, compose, sort};
pub use types::{DateRange, FilterSpec, SearchField, SortOption, SortSpec};

use crate::product::Product;

/// Filter, sort, then slice page `page` (1-indexed).
pub fn apply(products: &[Product], spec: &FilterSpec, page: usize) -> Page {
    let mut filtered = filter(products, spec);
    sort(&mut filtered, &spec.sort);
    paginate(&filtered, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_apply_is_deterministic() {
        let products: Vec<Product> = (0..100)
            .map(|i| fixtures::product(&format!("p{}", i)))
            .collect();
        let spec = FilterSpec::default();

        let first = apply(&products, &spec, 1);
        let second = apply(&products, &spec, 1);

        let left: Vec<_> = first.items.iter().map(|p| &p.id).collect();
        let right: Vec<_> = second.items.iter().map(|p| &p.id).collect();
        assert_eq!(left, right);
        assert_eq!(first.total_items, second.total_items);
    }

    #[test]
    fn test_apply_default_sort_users_then_rating() {
        let mut a = fixtures::product("a");
        a.total_users = 100;
        a.rating = 3.0;
        let mut b = fixtures::product("b");
        b.total_users = 200;
        b.rating = 1.0;
        let mut c = fixtures::product("c");
        c.total_users = 100;
        c.rating = 4.5;

        let page = apply(&[a, b, c], &FilterSpec::default(), 1);
        let ids: Vec<_> = page.items.iter().map(|p| p.id.as_str()).collect();
        // users desc, ties broken by rating desc
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
