use crate::domain::model::{Product, RatedItem};

/// Minimum rating an item needs to survive the filter.
pub const MIN_RATING: f64 = 4.0;

/// Keeps the items rated at least [`MIN_RATING`], in their original order.
pub fn filter_by_rating(items: &[RatedItem]) -> Vec<RatedItem> {
    items
        .iter()
        .filter(|item| item.rating >= MIN_RATING)
        .cloned()
        .collect()
}

/// Left-to-right scan over the products. A later product only replaces the
/// current maximum on strictly greater price, so the earliest of tied maxima
/// wins. `None` for an empty slice.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    let mut best: Option<&Product> = None;
    for product in products {
        match best {
            None => best = Some(product),
            Some(current) if product.price > current.price => best = Some(product),
            _ => {}
        }
    }
    best
}
