//! Tannery browsing session library.
//!
//! Everything that used to live in the storefront page script lives here:
//! the catalog cache with its windowed pagination, the cart ledger and its
//! durable persistence, the cookie-consent record, the analytics beacon
//! side channel, and the pure view-model projections the renderer consumes.
//!
//! # Architecture
//!
//! A single [`StorefrontApp`] controller owns all session state and is the
//! only thing that mutates it. Every mutating call persists what needs
//! persisting and hands back a freshly projected [`view::ViewState`], so a
//! renderer can treat "mutate, then redraw from the returned snapshot" as
//! the whole contract.
//!
//! # Consistency model
//!
//! The cart ledger references catalog products by identifier only. That
//! reference is weak: totals and counts treat entries whose product is
//! missing from the current catalog as contributing zero, and quantities
//! already in the cart survive a product becoming unpurchasable. Corrupt
//! persisted state resets to empty; it is never fatal.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod beacon;
pub mod cart;
pub mod catalog;
pub mod consent;
pub mod fetch;
pub mod storage;
pub mod view;

pub use app::StorefrontApp;
pub use cart::CartLedger;
pub use catalog::CatalogCache;
pub use fetch::{CatalogClient, LoadSource};
