//! Tannery catalog service library.
//!
//! This crate provides the catalog service as a library, allowing it to be
//! tested and reused (the CLI seeds through [`store`] directly).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
