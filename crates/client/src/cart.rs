//! The cart ledger: product id -> desired quantity.
//!
//! Quantities never go negative; decrementing a line at zero leaves it at
//! zero. Zero-quantity entries are semantically absent - every read filters
//! them - but they are retained physically, which keeps writes idempotent
//! and matches what a re-added product expects to find.
//!
//! The ledger holds identifiers, not products. Whether an id still exists
//! in the current catalog is the catalog's problem: totals simply skip
//! entries with no matching product.

use std::collections::BTreeMap;

use tannery_core::Product;

use crate::storage::{CART_KEY, KeyValueStore};

/// Client-persisted mapping of product identifier to quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    entries: BTreeMap<String, u32>,
}

impl CartLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the ledger from durable storage.
    ///
    /// A missing key or unparseable payload yields an empty ledger;
    /// corruption is recovered from, never surfaced.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let entries = store
            .get(CART_KEY)
            .and_then(|raw| serde_json::from_str::<BTreeMap<String, u32>>(&raw).ok())
            .unwrap_or_default();
        Self { entries }
    }

    /// Persist the full mapping to durable storage.
    fn save(&self, store: &dyn KeyValueStore) {
        match serde_json::to_string(&self.entries) {
            Ok(raw) => store.set(CART_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "failed to serialize cart"),
        }
    }

    /// Increment the quantity for `product_id` by one, creating the entry
    /// at 1 if absent, and persist.
    pub fn add(&mut self, product_id: &str, store: &dyn KeyValueStore) {
        let qty = self.entries.entry(product_id.to_string()).or_insert(0);
        *qty += 1;
        self.save(store);
    }

    /// Alias for [`CartLedger::add`]; the cart panel's `+` control.
    pub fn increment(&mut self, product_id: &str, store: &dyn KeyValueStore) {
        self.add(product_id, store);
    }

    /// Decrement the quantity for `product_id` by one, clamping at zero,
    /// and persist. The entry stays in the map at zero.
    pub fn decrement(&mut self, product_id: &str, store: &dyn KeyValueStore) {
        if let Some(qty) = self.entries.get_mut(product_id) {
            *qty = qty.saturating_sub(1);
        }
        self.save(store);
    }

    /// Empty the mapping and persist.
    ///
    /// Destructive: callers at the presentation boundary confirm with the
    /// user before invoking this.
    pub fn clear(&mut self, store: &dyn KeyValueStore) {
        self.entries.clear();
        self.save(store);
    }

    /// Quantity for `product_id` (zero when absent).
    #[must_use]
    pub fn quantity(&self, product_id: &str) -> u32 {
        self.entries.get(product_id).copied().unwrap_or(0)
    }

    /// Whether `product_id` has a positive quantity.
    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.quantity(product_id) > 0
    }

    /// Total item count: the sum of all positive quantities.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.entries
            .values()
            .filter(|qty| **qty > 0)
            .map(|qty| u64::from(*qty))
            .sum()
    }

    /// Total price in cents against the given catalog.
    ///
    /// Lookup is by string-normalized identifier; entries whose product is
    /// absent from the catalog contribute zero. Depends only on id match,
    /// never on catalog order.
    #[must_use]
    pub fn total_cents(&self, catalog: &[Product]) -> i64 {
        self.lines()
            .map(|(id, qty)| {
                catalog
                    .iter()
                    .find(|p| p.id_key() == *id)
                    .map_or(0, |p| p.price_cents * i64::from(qty))
            })
            .sum()
    }

    /// Iterate over positive-quantity lines.
    pub fn lines(&self) -> impl Iterator<Item = (&String, u32)> {
        self.entries
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(id, qty)| (id, *qty))
    }

    /// Whether the ledger has no positive-quantity lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
