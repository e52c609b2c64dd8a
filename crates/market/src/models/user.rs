//! User identity model.

use serde::{Deserialize, Serialize};

use estee_core::{Phone, Role, UserId};

/// A storefront identity.
///
/// The phone number is the de facto unique login key. Exactly one admin
/// identity exists (see [`session`](crate::session)); everything else is
/// a buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub phone: Phone,
    pub role: Role,
}

impl User {
    /// Whether this identity carries the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}
