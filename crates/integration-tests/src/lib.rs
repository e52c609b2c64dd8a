//! Integration tests for Estee Wholesales.
//!
//! Tests drive the full engine through [`MarketContext`] over real
//! file-backed storage in a temporary directory, covering the flows a
//! buyer or the admin walks through end to end: sign-in, shopping, the
//! payment lifecycle and reporting.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p estee-integration-tests
//! ```

#![allow(clippy::unwrap_used)]

use estee_market::MarketContext;
use estee_market::store::JsonFileStorage;
use tempfile::TempDir;

use estee_core::Phone;
use estee_market::models::User;
use estee_market::session::ADMIN_PHONE;

/// A full engine over file-backed storage in a temp directory.
///
/// The directory lives as long as the harness; reopening via
/// [`TestStore::reopen`] simulates a process restart over the same state.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Open a fresh context over the store's directory.
    #[must_use]
    pub fn open(&self) -> MarketContext {
        let storage = JsonFileStorage::open(self.dir.path()).unwrap();
        MarketContext::load(Box::new(storage)).unwrap()
    }

    /// Reopen, as after a process restart.
    #[must_use]
    pub fn reopen(&self) -> MarketContext {
        self.open()
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Sign in as a buyer with a fixed test identity.
pub fn sign_in_buyer(ctx: &mut MarketContext) -> User {
    ctx.login(Phone::parse("08012345678").unwrap(), Some("Amaka Foods"))
        .unwrap()
}

/// Sign in as the admin.
pub fn sign_in_admin(ctx: &mut MarketContext) -> User {
    ctx.login(Phone::parse(ADMIN_PHONE).unwrap(), None).unwrap()
}
