//! The client catalog cache and its visible window.
//!
//! The cache holds whatever the last completed load produced, in source
//! order, plus a monotonically growing window cursor. Installing a new
//! product list always snaps the cursor back to the initial window size.

use tannery_core::Product;

/// Products shown before the first "load more".
pub const INITIAL_WINDOW: usize = 9;
/// Window growth per "load more".
pub const WINDOW_STEP: usize = 3;

/// In-memory product list with a windowed pagination cursor.
#[derive(Debug, Clone)]
pub struct CatalogCache {
    products: Vec<Product>,
    visible_count: usize,
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogCache {
    /// Create an empty cache with the initial window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
            visible_count: INITIAL_WINDOW,
        }
    }

    /// Install a freshly loaded product list, resetting the window.
    ///
    /// Sources are never merged: whichever load completes last replaces
    /// the whole sequence.
    pub fn install(&mut self, products: Vec<Product>) {
        self.products = products;
        self.visible_count = INITIAL_WINDOW;
    }

    /// The full loaded sequence.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by its stringified identifier.
    #[must_use]
    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id_key() == product_id)
    }

    /// The leading `visible_count` products.
    ///
    /// The cursor may exceed the sequence length; the window just returns
    /// fewer than requested.
    #[must_use]
    pub fn visible_window(&self) -> &[Product] {
        let end = self.visible_count.min(self.products.len());
        self.products.get(..end).unwrap_or(&self.products)
    }

    /// Grow the window by the fixed step. Uncapped.
    pub const fn expand_window(&mut self) {
        self.visible_count += WINDOW_STEP;
    }

    /// Current cursor value.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// How many products remain beyond the window (drives the load-more
    /// affordance; zero when the window already covers everything).
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.products.len().saturating_sub(self.visible_count)
    }

    /// Whether the cache holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(n: i64) -> Vec<Product> {
        (1..=n)
            .map(|id| Product {
                id,
                name: format!("No. {id:02}"),
                price_cents: 1000 * id,
                material: "leather".to_string(),
                limited: false,
                remaining: 0,
                sold_out: false,
                image: None,
                created_at: None,
                updated_at: None,
            })
            .collect()
    }

    #[test]
    fn window_starts_at_nine() {
        let mut cache = CatalogCache::new();
        cache.install(products(12));
        assert_eq!(cache.visible_window().len(), 9);
        assert_eq!(cache.remaining(), 3);
    }

    #[test]
    fn expand_grows_by_three_uncapped() {
        let mut cache = CatalogCache::new();
        cache.install(products(12));
        cache.expand_window();
        assert_eq!(cache.visible_count(), 12);
        cache.expand_window();
        assert_eq!(cache.visible_count(), 15);
        // Window never exceeds what exists.
        assert_eq!(cache.visible_window().len(), 12);
        assert_eq!(cache.remaining(), 0);
    }

    #[test]
    fn short_catalog_shows_everything_with_no_load_more() {
        let mut cache = CatalogCache::new();
        cache.install(products(6));
        assert_eq!(cache.visible_window().len(), 6);
        assert_eq!(cache.remaining(), 0);
    }

    #[test]
    fn install_resets_the_cursor() {
        let mut cache = CatalogCache::new();
        cache.install(products(20));
        cache.expand_window();
        cache.expand_window();
        assert_eq!(cache.visible_count(), 15);

        cache.install(products(20));
        assert_eq!(cache.visible_count(), INITIAL_WINDOW);
    }

    #[test]
    fn empty_install_keeps_initial_cursor_and_empty_window() {
        let mut cache = CatalogCache::new();
        cache.expand_window();
        cache.install(Vec::new());
        assert_eq!(cache.visible_count(), INITIAL_WINDOW);
        assert!(cache.visible_window().is_empty());
    }

    #[test]
    fn find_matches_stringified_id() {
        let mut cache = CatalogCache::new();
        cache.install(products(3));
        assert_eq!(cache.find("2").map(|p| p.id), Some(2));
        assert!(cache.find("99").is_none());
    }
}
