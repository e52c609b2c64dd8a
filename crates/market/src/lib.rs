//! Estee Market - The wholesale ordering engine.
//!
//! This crate is the core of Estee Wholesales: catalog, cart, order
//! lifecycle, identity, and reporting. The presentation layer (the CLI, or
//! any future web UI) is an external collaborator that drives this engine
//! through [`MarketContext`].
//!
//! # Architecture
//!
//! - [`catalog`] - Product catalog with price/stock mutation
//! - [`cart`] - Transient cart with price capture at add time
//! - [`ledger`] - Immutable order records and the
//!   `interest → paid → verified` state machine
//! - [`session`] - Identity resolution (admin sentinel + buyer registry)
//! - [`reports`] - Read-only aggregations recomputed on every read
//! - [`context`] - [`MarketContext`], the explicit context object owning
//!   all state, with load-at-startup / save-after-mutation persistence
//! - [`store`] - The JSON key-value persistence boundary
//! - [`assistant`] - Best-effort external chat assistant, isolated from
//!   every mutation path
//!
//! All mutations are synchronous single-step updates to in-process state;
//! only the assistant performs I/O that can suspend, and its failures never
//! propagate past [`assistant::AssistantClient::advise`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod session;
pub mod store;

pub use config::MarketConfig;
pub use context::MarketContext;
pub use error::{MarketError, Result};
