//! Estee Core - Shared types library.
//!
//! This crate provides common types used across all Estee Wholesales
//! components:
//! - `market` - The ordering engine (catalog, cart, order ledger, reports)
//! - `cli` - Command-line storefront and admin tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, phone numbers,
//!   units, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
