//! Pure list transforms over the cached catalog.
//!
//! Each function consumes the current list snapshot and returns the replacement
//! wholesale; none touch the network and none can fail, including on an empty
//! list.

use crate::domain::Product;

/// Sort direction for [`sort_by_price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    Low,
    High,
}

/// Stable lexicographic ascending order on `category`. Equal categories keep
/// their original relative order.
pub fn sort_by_category(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(|a, b| a.category.cmp(&b.category));
    products
}

pub fn sort_by_price(mut products: Vec<Product>, direction: PriceDirection) -> Vec<Product> {
    match direction {
        PriceDirection::Low => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        PriceDirection::High => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    products
}

/// Most-rated first: descending on `rating.count`, not on `rating.rate`.
pub fn sort_by_rating_count(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(|a, b| b.rating.count.cmp(&a.rating.count));
    products
}

/// Keeps products whose rating falls in the integer bucket, e.g. bucket 4
/// keeps rates in [4.0, 5.0).
pub fn filter_by_rating_bucket(products: Vec<Product>, bucket: u32) -> Vec<Product> {
    products
        .into_iter()
        .filter(|item| item.rating.rate.floor() as u32 == bucket)
        .collect()
}

/// Exact, case-sensitive category equality.
pub fn filter_by_category(products: Vec<Product>, category: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|item| item.category == category)
        .collect()
}

/// Case-insensitive substring match against `title` or `category`. An empty
/// term matches everything.
pub fn search_by_text(products: Vec<Product>, term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    products
        .into_iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rating;

    fn product(id: u64, title: &str, price: f64, category: &str, rate: f64, count: u64) -> Product {
        Product::new(id, title, price, category, Rating::new(rate, count))
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Gold Ring", 120.0, "Jewelery", 4.2, 5),
            product(2, "USB Cable", 8.5, "Electronics", 3.1, 10),
            product(3, "Leather Bag", 45.0, "Accessories", 4.9, 3),
            product(4, "Monitor", 199.99, "Electronics", 2.4, 41),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn price_directions_are_reverses_of_each_other() {
        let ascending = sort_by_price(fixture(), PriceDirection::Low);
        let descending = sort_by_price(fixture(), PriceDirection::High);

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(ids(&reversed), ids(&descending));
        assert_eq!(ids(&ascending), vec![2, 3, 1, 4]);
    }

    #[test]
    fn category_sort_is_stable_for_equal_keys() {
        let sorted = sort_by_category(fixture());
        // Both Electronics items keep their original relative order.
        assert_eq!(ids(&sorted), vec![3, 2, 4, 1]);
    }

    #[test]
    fn rating_sort_uses_count_not_rate() {
        let sorted = sort_by_rating_count(fixture());
        assert_eq!(ids(&sorted), vec![4, 2, 1, 3]);
    }

    #[test]
    fn rating_bucket_keeps_floor_matches_only() {
        let kept = filter_by_rating_bucket(fixture(), 4);
        assert_eq!(ids(&kept), vec![1, 3]);

        let none = filter_by_rating_bucket(fixture(), 5);
        assert!(none.is_empty());
    }

    #[test]
    fn category_filter_is_case_sensitive_and_idempotent() {
        let once = filter_by_category(fixture(), "Electronics");
        assert_eq!(ids(&once), vec![2, 4]);

        let twice = filter_by_category(once.clone(), "Electronics");
        assert_eq!(once, twice);

        assert!(filter_by_category(fixture(), "electronics").is_empty());
    }

    #[test]
    fn empty_search_term_returns_full_list() {
        let result = search_by_text(fixture(), "");
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_category() {
        let upper = search_by_text(fixture(), "ELEC");
        let lower = search_by_text(fixture(), "elec");
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&upper), vec![2, 4]);

        let by_title = search_by_text(fixture(), "gold");
        assert_eq!(ids(&by_title), vec![1]);
    }

    #[test]
    fn transforms_are_total_over_the_empty_list() {
        assert!(sort_by_category(vec![]).is_empty());
        assert!(sort_by_price(vec![], PriceDirection::High).is_empty());
        assert!(sort_by_rating_count(vec![]).is_empty());
        assert!(filter_by_rating_bucket(vec![], 4).is_empty());
        assert!(filter_by_category(vec![], "Electronics").is_empty());
        assert!(search_by_text(vec![], "anything").is_empty());
    }
}
