//! User registry
//!
//! Process-wide directory mapping each username to its pair of per-user
//! components: the balance store and the gatekeeper. The pair is built
//! fully before it is inserted, and insertion goes through the map's entry
//! lock, so readers either see both components or neither, and among
//! concurrent creations of one name exactly one wins.
//!
//! There is no delete-user operation; an entry lives for the process
//! lifetime.

use crate::account::AccountStore;
use crate::gatekeeper::Gatekeeper;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use types::name::Username;

/// The username is already taken.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("username already registered")]
pub struct AlreadyRegistered;

/// No user is registered under the name.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown user")]
pub struct UnknownUser;

/// One user's components, owned by the registry.
#[derive(Debug)]
pub struct UserEntry {
    pub accounts: AccountStore,
    pub gate: Gatekeeper,
}

/// Directory of all registered users.
#[derive(Debug)]
pub struct Registry {
    users: DashMap<Username, Arc<UserEntry>>,
    max_in_flight: usize,
}

impl Registry {
    pub fn new(max_in_flight: usize) -> Self {
        Self {
            users: DashMap::new(),
            max_in_flight,
        }
    }

    /// Provision a user's store and gatekeeper under `name`.
    ///
    /// The compare-and-insert runs under the entry lock: of any set of
    /// concurrent calls for the same name, one succeeds and the rest get
    /// [`AlreadyRegistered`].
    pub fn create(&self, name: Username) -> Result<(), AlreadyRegistered> {
        match self.users.entry(name) {
            Entry::Occupied(_) => Err(AlreadyRegistered),
            Entry::Vacant(slot) => {
                let entry = Arc::new(UserEntry {
                    accounts: AccountStore::new(),
                    gate: Gatekeeper::new(self.max_in_flight),
                });
                debug!(user = %slot.key(), "registered user");
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Look up the pair for `name`; every money operation starts here.
    pub fn resolve(&self, name: &str) -> Result<Arc<UserEntry>, UnknownUser> {
        self.users
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(UnknownUser)
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Username {
        Username::try_new(s).unwrap()
    }

    #[test]
    fn test_create_then_resolve() {
        let registry = Registry::new(10);
        registry.create(name("alice")).unwrap();

        let entry = registry.resolve("alice").unwrap();
        assert_eq!(entry.gate.capacity(), 10);
        assert_eq!(registry.user_count(), 1);
    }

    #[test]
    fn test_duplicate_creation_refused() {
        let registry = Registry::new(10);
        registry.create(name("alice")).unwrap();
        assert_eq!(registry.create(name("alice")), Err(AlreadyRegistered));
        assert_eq!(registry.user_count(), 1);
    }

    #[test]
    fn test_resolve_unknown_user() {
        let registry = Registry::new(10);
        assert_eq!(registry.resolve("nobody").err(), Some(UnknownUser));
    }

    #[test]
    fn test_concurrent_creation_is_unique() {
        use std::thread;

        let registry = Arc::new(Registry::new(10));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.create(name("alice")).is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(registry.user_count(), 1);
    }

    #[test]
    fn test_entries_are_independent() {
        let registry = Registry::new(10);
        registry.create(name("alice")).unwrap();
        registry.create(name("bob")).unwrap();

        let alice = registry.resolve("alice").unwrap();
        let bob = registry.resolve("bob").unwrap();

        let _held = alice.gate.try_admit().unwrap();
        assert_eq!(alice.gate.in_flight(), 1);
        assert_eq!(bob.gate.in_flight(), 0);
    }
}
