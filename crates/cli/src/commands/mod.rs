//! CLI command implementations.
//!
//! Each module is a thin presentation layer over
//! [`MarketContext`](estee_market::MarketContext): parse arguments, call
//! the engine, print the result. Errors bubble to `main`, which logs
//! them and exits non-zero.

pub mod catalog;
pub mod chat;
pub mod orders;
pub mod report;
pub mod session;
pub mod shop;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
