//! Fire-and-forget analytics side channel.
//!
//! Beacons observe the session; they never participate in it. The trait is
//! infallible by construction - an implementation that cannot deliver an
//! event drops it, and cart/catalog correctness is unaffected either way.

use tannery_core::Product;

/// An analytics event emitted by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeaconEvent {
    /// The storefront page was opened.
    PageView,
    /// A product was added to the cart.
    AddToCart {
        product_id: String,
        name: String,
        price_cents: i64,
    },
    /// The cart drawer was opened.
    ViewCart { total_cents: i64 },
}

impl BeaconEvent {
    /// Build an add-to-cart event from a catalog product.
    #[must_use]
    pub fn add_to_cart(product: &Product) -> Self {
        Self::AddToCart {
            product_id: product.id_key(),
            name: product.name.clone(),
            price_cents: product.price_cents,
        }
    }
}

/// Receives session analytics events.
pub trait Beacon {
    /// Record an event. Must not block and must not fail the caller.
    fn record(&self, event: &BeaconEvent);
}

/// The default beacon: drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBeacon;

impl Beacon for NullBeacon {
    fn record(&self, _event: &BeaconEvent) {}
}
