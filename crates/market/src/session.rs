//! Session and identity: the admin sentinel and the buyer registry.
//!
//! There is exactly one admin, recognised by a sentinel phone value.
//! Every other caller is a buyer, keyed by phone in a persistent
//! registry; signing in with an unknown phone creates the buyer on the
//! spot.

use tracing::instrument;
use uuid::Uuid;

use estee_core::{Phone, Role, UserId};

use crate::error::{MarketError, Result};
use crate::models::User;

/// Sentinel phone value that signs in as the admin.
pub const ADMIN_PHONE: &str = "080admin";

/// Display name of the admin account.
pub const ADMIN_NAME: &str = "Estee Admin";

/// Name given to buyers who sign in without providing one.
pub const FALLBACK_BUYER_NAME: &str = "Bulk Buyer";

/// The admin account.
///
/// Carries a fixed id so the admin is the same identity across sessions
/// without living in the buyer registry.
#[must_use]
pub fn admin_user() -> User {
    User {
        id: UserId::from_uuid(Uuid::from_u128(0xade0)),
        name: ADMIN_NAME.to_string(),
        phone: Phone::parse(ADMIN_PHONE).unwrap_or_else(|_| unreachable!("sentinel is valid")),
        role: Role::Admin,
    }
}

/// Whether a phone value is the admin sentinel.
#[must_use]
pub fn is_admin_phone(phone: &Phone) -> bool {
    phone.as_ref() == ADMIN_PHONE
}

/// The phone-keyed buyer registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    buyers: Vec<User>,
}

impl Registry {
    /// Build a registry from previously persisted buyers.
    #[must_use]
    pub const fn from_users(buyers: Vec<User>) -> Self {
        Self { buyers }
    }

    /// All registered buyers.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.buyers
    }

    /// Look up a buyer by phone.
    #[must_use]
    pub fn find_by_phone(&self, phone: &Phone) -> Option<&User> {
        self.buyers.iter().find(|u| u.phone == *phone)
    }

    /// Register a new buyer with an explicit name.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Validation`] if the name is empty, the phone
    /// is the admin sentinel, or the phone is already registered.
    #[instrument(skip(self, name))]
    pub fn register(&mut self, phone: Phone, name: &str) -> Result<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MarketError::Validation(
                "a name is required to register".to_string(),
            ));
        }
        if is_admin_phone(&phone) {
            return Err(MarketError::Validation(
                "this phone number is reserved".to_string(),
            ));
        }
        if self.find_by_phone(&phone).is_some() {
            return Err(MarketError::Validation(format!(
                "phone {phone} is already registered"
            )));
        }

        let user = User {
            id: UserId::generate(),
            name: name.to_string(),
            phone,
            role: Role::Buyer,
        };
        self.buyers.push(user.clone());
        Ok(user)
    }

    /// Resolve a sign-in to an identity.
    ///
    /// The admin sentinel resolves to the fixed admin account. A known
    /// buyer phone resolves to the registered buyer. An unknown phone
    /// creates a buyer under the given name, falling back to
    /// [`FALLBACK_BUYER_NAME`] when none is given.
    #[instrument(skip(self, name))]
    pub fn resolve(&mut self, phone: Phone, name: Option<&str>) -> User {
        if is_admin_phone(&phone) {
            return admin_user();
        }
        if let Some(existing) = self.find_by_phone(&phone) {
            return existing.clone();
        }

        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(FALLBACK_BUYER_NAME);
        let user = User {
            id: UserId::generate(),
            name: name.to_string(),
            phone,
            role: Role::Buyer,
        };
        self.buyers.push(user.clone());
        user
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn phone(value: &str) -> Phone {
        Phone::parse(value).unwrap()
    }

    #[test]
    fn test_admin_sentinel_resolves_to_admin() {
        let mut registry = Registry::default();
        let user = registry.resolve(phone(ADMIN_PHONE), Some("Whoever"));

        assert!(user.is_admin());
        assert_eq!(user.name, ADMIN_NAME);
        // the admin never enters the buyer registry
        assert!(registry.users().is_empty());
    }

    #[test]
    fn test_admin_identity_is_stable() {
        assert_eq!(admin_user().id, admin_user().id);
    }

    #[test]
    fn test_unknown_phone_creates_buyer() {
        let mut registry = Registry::default();
        let user = registry.resolve(phone("08012345678"), Some("Amaka Foods"));

        assert_eq!(user.role, Role::Buyer);
        assert_eq!(user.name, "Amaka Foods");
        assert_eq!(registry.users().len(), 1);
    }

    #[test]
    fn test_known_phone_resolves_to_same_buyer() {
        let mut registry = Registry::default();
        let first = registry.resolve(phone("08012345678"), Some("Amaka Foods"));
        let again = registry.resolve(phone("08012345678"), Some("Different Name"));

        assert_eq!(again.id, first.id);
        assert_eq!(again.name, "Amaka Foods");
        assert_eq!(registry.users().len(), 1);
    }

    #[test]
    fn test_blank_name_falls_back() {
        let mut registry = Registry::default();
        let user = registry.resolve(phone("08099887766"), None);
        assert_eq!(user.name, FALLBACK_BUYER_NAME);

        let user = registry.resolve(phone("08099887767"), Some("   "));
        assert_eq!(user.name, FALLBACK_BUYER_NAME);
    }

    #[test]
    fn test_register_requires_name() {
        let mut registry = Registry::default();
        assert!(matches!(
            registry.register(phone("08012345678"), "  "),
            Err(MarketError::Validation(_))
        ));
    }

    #[test]
    fn test_register_rejects_duplicate_phone() {
        let mut registry = Registry::default();
        registry
            .register(phone("08012345678"), "Amaka Foods")
            .unwrap();
        assert!(matches!(
            registry.register(phone("08012345678"), "Someone Else"),
            Err(MarketError::Validation(_))
        ));
    }

    #[test]
    fn test_register_rejects_admin_sentinel() {
        let mut registry = Registry::default();
        assert!(matches!(
            registry.register(phone(ADMIN_PHONE), "Impostor"),
            Err(MarketError::Validation(_))
        ));
    }
}
