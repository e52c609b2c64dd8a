//! Core types for Estee Wholesales.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod phone;
pub mod status;
pub mod unit;

pub use id::*;
pub use money::Naira;
pub use phone::{Phone, PhoneError};
pub use status::*;
pub use unit::{Category, Unit};
