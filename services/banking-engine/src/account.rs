//! Per-user balance store
//!
//! Holds one user's `currency -> Money` map. Currencies are byte-compared,
//! so `"USD"` and `"usd"` are independent balances, and a currency that was
//! never deposited reads as zero.
//!
//! The store is driven concurrently by its owner's gatekeeper; the map's
//! per-key locking makes each operation atomic with respect to the others.
//! In particular a withdrawal's balance check and debit are one indivisible
//! read-modify-write.

use dashmap::DashMap;
use thiserror::Error;
use types::money::Money;
use types::name::Currency;

/// Withdrawal found the balance short of the requested amount.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("insufficient funds")]
pub struct InsufficientFunds;

/// A single user's currency balances.
#[derive(Debug, Default)]
pub struct AccountStore {
    balances: DashMap<Currency, Money>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            balances: DashMap::new(),
        }
    }

    /// Current balance, zero for a currency never seen.
    pub fn balance(&self, currency: &str) -> Money {
        self.balances
            .get(currency)
            .map(|held| *held)
            .unwrap_or(Money::ZERO)
    }

    /// Credit `amount` and return the new balance.
    pub fn deposit(&self, currency: &Currency, amount: Money) -> Money {
        let mut held = self
            .balances
            .entry(currency.clone())
            .or_insert(Money::ZERO);
        *held = held.add(amount);
        *held
    }

    /// Debit `amount` and return the new balance.
    ///
    /// The check and the debit happen under the entry lock; on
    /// [`InsufficientFunds`] the balance is untouched. An absent currency is
    /// insufficient for any positive amount.
    pub fn withdraw(&self, currency: &str, amount: Money) -> Result<Money, InsufficientFunds> {
        match self.balances.get_mut(currency) {
            Some(mut held) if held.gte(&amount) => {
                *held = held.sub(amount);
                Ok(*held)
            }
            _ => Err(InsufficientFunds),
        }
    }
}
