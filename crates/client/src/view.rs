//! View-model projections.
//!
//! Pure functions from (catalog cache, cart ledger, load outcome) to
//! display data. Nothing here mutates state or touches storage; the
//! renderer redraws from whatever snapshot it is handed.

use tannery_core::{Product, format_cents};

use crate::cart::CartLedger;
use crate::catalog::CatalogCache;
use crate::fetch::LoadSource;

/// Placeholder shown when a product has no image (or its asset fails).
pub const FALLBACK_IMAGE: &str = "assets/images/product-fallback.jpg";

/// Overall grid condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStatus {
    /// Products are loaded and at least one card is visible.
    Ready,
    /// Nothing loaded yet (initial render before the load completes).
    Loading,
    /// Every catalog source failed; show the retry affordance, never a
    /// silent blank grid.
    Unavailable,
}

/// One product card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub product_id: String,
    pub name: String,
    pub price: String,
    pub material: String,
    pub image: String,
    /// Show the "Limited" pill.
    pub limited: bool,
    /// Show the "Sold Out" pill (the inverse of purchasable).
    pub sold_out: bool,
    /// Highlight the card as already in the cart.
    pub in_cart: bool,
    /// Offer the "Add" control. Never true for a non-purchasable product,
    /// even if the cart already holds some.
    pub offer_add: bool,
}

/// The product grid: visible cards plus the load-more affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub status: GridStatus,
    pub cards: Vec<ProductCard>,
    pub show_load_more: bool,
}

/// One line in the cart drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub product_id: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
    pub image: String,
}

/// The cart drawer contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanelView {
    pub rows: Vec<CartRow>,
    pub total: String,
    pub is_empty: bool,
}

/// The quick-view modal for a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickViewModal {
    pub product_id: String,
    pub name: String,
    pub material: String,
    pub price: String,
    pub image: String,
    pub offer_add: bool,
}

/// Everything the renderer needs after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub grid: GridView,
    pub cart: CartPanelView,
    /// Mini-cart badge count.
    pub badge_count: u64,
}

fn image_or_fallback(product: &Product) -> String {
    product
        .image
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string())
}

/// Project a product into its grid card.
#[must_use]
pub fn product_card(product: &Product, cart: &CartLedger) -> ProductCard {
    let purchasable = product.purchasable();
    ProductCard {
        product_id: product.id_key(),
        name: product.name.clone(),
        price: format_cents(product.price_cents),
        material: product.material.clone(),
        image: image_or_fallback(product),
        limited: product.limited,
        sold_out: !purchasable,
        in_cart: cart.contains(&product.id_key()),
        offer_add: purchasable,
    }
}

/// Project the visible window of the catalog into the grid.
///
/// `last_load` is `None` until the first load completes.
#[must_use]
pub fn grid_view(
    catalog: &CatalogCache,
    cart: &CartLedger,
    last_load: Option<LoadSource>,
) -> GridView {
    if catalog.is_empty() {
        let status = if last_load == Some(LoadSource::Failed) {
            GridStatus::Unavailable
        } else {
            GridStatus::Loading
        };
        return GridView {
            status,
            cards: Vec::new(),
            show_load_more: false,
        };
    }

    GridView {
        status: GridStatus::Ready,
        cards: catalog
            .visible_window()
            .iter()
            .map(|p| product_card(p, cart))
            .collect(),
        show_load_more: catalog.remaining() > 0,
    }
}

/// Project the cart ledger against the catalog into the drawer view.
///
/// Lines whose product is missing from the current catalog are dormant:
/// they are skipped here and contribute zero to the total, but they stay
/// in the ledger.
#[must_use]
pub fn cart_panel(catalog: &CatalogCache, cart: &CartLedger) -> CartPanelView {
    let rows: Vec<CartRow> = cart
        .lines()
        .filter_map(|(id, qty)| {
            catalog.find(id).map(|product| CartRow {
                product_id: id.clone(),
                name: product.name.clone(),
                unit_price: format_cents(product.price_cents),
                quantity: qty,
                line_total: format_cents(product.price_cents * i64::from(qty)),
                image: image_or_fallback(product),
            })
        })
        .collect();

    CartPanelView {
        is_empty: rows.is_empty(),
        total: format_cents(cart.total_cents(catalog.products())),
        rows,
    }
}

/// Project a single product into the quick-view modal.
#[must_use]
pub fn quick_view(catalog: &CatalogCache, product_id: &str) -> Option<QuickViewModal> {
    catalog.find(product_id).map(|product| QuickViewModal {
        product_id: product.id_key(),
        name: product.name.clone(),
        material: product.material.clone(),
        price: format_cents(product.price_cents),
        image: image_or_fallback(product),
        offer_add: product.purchasable(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("No. {id:02}"),
            price_cents,
            material: "leather".to_string(),
            limited: false,
            remaining: 0,
            sold_out: false,
            image: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn loaded_catalog(products: Vec<Product>) -> CatalogCache {
        let mut cache = CatalogCache::new();
        cache.install(products);
        cache
    }

    #[test]
    fn card_hides_add_for_exhausted_limited_run() {
        let mut limited = product(1, 18500);
        limited.limited = true;
        limited.remaining = 0;

        let card = product_card(&limited, &CartLedger::new());
        assert!(!card.offer_add);
        assert!(card.sold_out);
        assert!(card.limited);
    }

    #[test]
    fn card_keeps_in_cart_indicator_without_add_affordance() {
        let store = MemoryStore::new();
        let mut cart = CartLedger::new();
        cart.add("1", &store);

        let mut sold = product(1, 18500);
        sold.sold_out = true;

        let card = product_card(&sold, &cart);
        assert!(card.in_cart);
        assert!(!card.offer_add);
    }

    #[test]
    fn card_substitutes_fallback_image() {
        let card = product_card(&product(1, 18500), &CartLedger::new());
        assert_eq!(card.image, FALLBACK_IMAGE);

        let mut with_image = product(2, 12000);
        with_image.image = Some("/assets/images/no02.jpg".to_string());
        let card = product_card(&with_image, &CartLedger::new());
        assert_eq!(card.image, "/assets/images/no02.jpg");
    }

    #[test]
    fn grid_of_six_shows_all_without_load_more() {
        let catalog = loaded_catalog((1..=6).map(|id| product(id, 1000)).collect());
        let grid = grid_view(&catalog, &CartLedger::new(), Some(LoadSource::Remote));
        assert_eq!(grid.status, GridStatus::Ready);
        assert_eq!(grid.cards.len(), 6);
        assert!(!grid.show_load_more);
    }

    #[test]
    fn grid_of_twelve_windows_to_nine_with_load_more() {
        let catalog = loaded_catalog((1..=12).map(|id| product(id, 1000)).collect());
        let grid = grid_view(&catalog, &CartLedger::new(), Some(LoadSource::Remote));
        assert_eq!(grid.cards.len(), 9);
        assert!(grid.show_load_more);
    }

    #[test]
    fn failed_load_is_an_explicit_unavailable_state() {
        let grid = grid_view(&CatalogCache::new(), &CartLedger::new(), Some(LoadSource::Failed));
        assert_eq!(grid.status, GridStatus::Unavailable);
        assert!(grid.cards.is_empty());
        assert!(!grid.show_load_more);
    }

    #[test]
    fn cart_panel_prices_lines_and_total() {
        let store = MemoryStore::new();
        let mut cart = CartLedger::new();
        cart.add("1", &store);
        cart.add("2", &store);
        cart.add("2", &store);

        let catalog = loaded_catalog(vec![product(1, 18500), product(2, 12000)]);
        let panel = cart_panel(&catalog, &cart);
        assert_eq!(panel.rows.len(), 2);
        assert!(!panel.is_empty);
        let second = panel.rows.get(1).expect("row for product 2");
        assert_eq!(second.quantity, 2);
        assert_eq!(second.line_total, "$240.00");
        assert_eq!(panel.total, "$425.00");
    }

    #[test]
    fn cart_panel_skips_stale_lines_but_keeps_total_consistent() {
        let store = MemoryStore::new();
        let mut cart = CartLedger::new();
        cart.add("5", &store);
        cart.add("1", &store);

        // Product 5 is gone from the catalog.
        let catalog = loaded_catalog(vec![product(1, 18500)]);
        let panel = cart_panel(&catalog, &cart);
        assert_eq!(panel.rows.len(), 1);
        assert_eq!(panel.total, "$185.00");
    }

    #[test]
    fn quick_view_of_unknown_product_is_none() {
        let catalog = loaded_catalog(vec![product(1, 18500)]);
        assert!(quick_view(&catalog, "9").is_none());
        let modal = quick_view(&catalog, "1").expect("modal");
        assert_eq!(modal.price, "$185.00");
        assert!(modal.offer_add);
    }
}
