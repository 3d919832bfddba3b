//! The session controller.
//!
//! [`StorefrontApp`] owns all mutable session state - catalog cache, cart
//! ledger, consent record - and is the only thing that mutates it. The
//! original page script kept this in a module-level global; here it is an
//! explicit struct handed to whatever does the rendering.
//!
//! Every mutating method persists what needs persisting and returns a
//! freshly projected [`ViewState`]: mutate, then redraw from the returned
//! snapshot. That is the whole re-render contract.

use crate::beacon::{Beacon, BeaconEvent, NullBeacon};
use crate::cart::CartLedger;
use crate::catalog::CatalogCache;
use crate::consent::Consent;
use crate::fetch::{CatalogClient, CatalogLoad, LoadSource};
use crate::storage::KeyValueStore;
use crate::view::{self, CartPanelView, QuickViewModal, ViewState};

/// A browsing session: catalog cache + cart ledger + durable storage.
pub struct StorefrontApp<S: KeyValueStore> {
    storage: S,
    catalog: CatalogCache,
    cart: CartLedger,
    consent: Option<Consent>,
    beacon: Box<dyn Beacon>,
    last_load: Option<LoadSource>,
}

impl<S: KeyValueStore> StorefrontApp<S> {
    /// Start a session: restore the cart and consent decision from
    /// durable storage. Catalog loading is a separate step so the page
    /// can render (with the restored cart badge) before the fetch lands.
    pub fn new(storage: S) -> Self {
        Self::with_beacon(storage, Box::new(NullBeacon))
    }

    /// Start a session with an analytics beacon attached.
    pub fn with_beacon(storage: S, beacon: Box<dyn Beacon>) -> Self {
        let cart = CartLedger::load(&storage);
        let consent = Consent::load(&storage);
        let app = Self {
            storage,
            catalog: CatalogCache::new(),
            cart,
            consent,
            beacon,
            last_load: None,
        };
        app.emit(BeaconEvent::PageView);
        app
    }

    fn emit(&self, event: BeaconEvent) {
        if Consent::allows_analytics(self.consent) {
            self.beacon.record(&event);
        }
    }

    /// Project the current session state for rendering.
    #[must_use]
    pub fn view(&self) -> ViewState {
        ViewState {
            grid: view::grid_view(&self.catalog, &self.cart, self.last_load),
            cart: view::cart_panel(&self.catalog, &self.cart),
            badge_count: self.cart.count(),
        }
    }

    /// Fetch the catalog through the fallback chain and install the
    /// result. The window cursor resets on every load.
    pub async fn load_catalog(&mut self, client: &CatalogClient) -> ViewState {
        let load = client.load().await;
        self.apply_load(load)
    }

    /// Install a completed load. Whichever load is applied last wins;
    /// earlier in-flight loads are simply superseded.
    pub fn apply_load(&mut self, load: CatalogLoad) -> ViewState {
        self.last_load = Some(load.source);
        self.catalog.install(load.products);
        self.view()
    }

    /// Grow the visible window ("load more").
    pub fn load_more(&mut self) -> ViewState {
        self.catalog.expand_window();
        self.view()
    }

    /// Add one unit of a product to the cart.
    ///
    /// Works for any id, purchasable or not - the affordance gating lives
    /// in the view layer, and quantities already added are never dropped.
    pub fn add_to_cart(&mut self, product_id: &str) -> ViewState {
        self.cart.add(product_id, &self.storage);
        if let Some(product) = self.catalog.find(product_id) {
            self.emit(BeaconEvent::add_to_cart(product));
        }
        self.view()
    }

    /// Increment a cart line by one.
    pub fn increment(&mut self, product_id: &str) -> ViewState {
        self.cart.increment(product_id, &self.storage);
        self.view()
    }

    /// Decrement a cart line by one, clamping at zero.
    pub fn decrement(&mut self, product_id: &str) -> ViewState {
        self.cart.decrement(product_id, &self.storage);
        self.view()
    }

    /// Empty the cart.
    ///
    /// Destructive: the presentation layer must confirm with the user
    /// before calling this.
    pub fn clear_cart(&mut self) -> ViewState {
        self.cart.clear(&self.storage);
        self.view()
    }

    /// Open the cart drawer (fires the view-cart beacon).
    #[must_use]
    pub fn open_cart(&self) -> CartPanelView {
        self.emit(BeaconEvent::ViewCart {
            total_cents: self.cart.total_cents(self.catalog.products()),
        });
        view::cart_panel(&self.catalog, &self.cart)
    }

    /// The quick-view modal for a product, if it exists in the cache.
    #[must_use]
    pub fn quick_view(&self, product_id: &str) -> Option<QuickViewModal> {
        view::quick_view(&self.catalog, product_id)
    }

    /// Whether the consent banner should be showing (no decision stored).
    #[must_use]
    pub const fn needs_consent_decision(&self) -> bool {
        self.consent.is_none()
    }

    /// Record and persist a consent decision.
    pub fn record_consent(&mut self, decision: Consent) {
        decision.save(&self.storage);
        self.consent = Some(decision);
    }

    /// The current catalog cache (read-only).
    #[must_use]
    pub const fn catalog(&self) -> &CatalogCache {
        &self.catalog
    }

    /// The current cart ledger (read-only).
    #[must_use]
    pub const fn cart(&self) -> &CartLedger {
        &self.cart
    }
}
