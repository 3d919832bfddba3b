//! Tannery Core - Shared domain types.
//!
//! This crate provides the types shared by all Tannery components:
//! - `server` - Catalog service (HTTP + Postgres)
//! - `client` - Browsing session library (catalog cache, cart ledger, views)
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. There is exactly one canonical
//! [`Product`] shape; storage and transport layers translate to it at
//! their boundaries.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod price;
pub mod product;

pub use price::format_cents;
pub use product::{NewProduct, Product};
