//! The banking facade
//!
//! Composes the registry, per-user gatekeepers, and per-user balance stores
//! into the five-function API: create a user, deposit, withdraw, query a
//! balance, and transfer between users.
//!
//! Validation precedence is strict: malformed arguments are rejected before
//! any lookup, existence is checked before admission, admission before the
//! balance check. All reported balances are the two-digit truncated form.

use crate::gatekeeper::DEFAULT_MAX_IN_FLIGHT;
use crate::registry::{Registry, UserEntry};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};
use types::errors::{BankError, TransferError};
use types::money::Money;
use types::name::{Currency, Username};

/// Attempts made to re-credit a sender after a failed deposit leg before
/// the debit window is logged and given up on.
const COMPENSATION_ATTEMPTS: usize = 5;
const COMPENSATION_BACKOFF: Duration = Duration::from_millis(10);

/// Tuning knobs for a bank instance.
#[derive(Debug, Clone)]
pub struct BankConfig {
    /// Upper bound on concurrently in-flight operations per user.
    pub max_in_flight_per_user: usize,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            max_in_flight_per_user: DEFAULT_MAX_IN_FLIGHT,
        }
    }
}

/// Cheaply cloneable handle to one in-memory bank.
#[derive(Debug, Clone)]
pub struct Bank {
    registry: Arc<Registry>,
}

impl Bank {
    pub fn new() -> Self {
        Self::with_config(BankConfig::default())
    }

    pub fn with_config(config: BankConfig) -> Self {
        Self {
            registry: Arc::new(Registry::new(config.max_in_flight_per_user)),
        }
    }

    /// Register `user` with empty balances in every currency.
    pub fn create_user(&self, user: &str) -> Result<(), BankError> {
        let name = Username::try_new(user).ok_or(BankError::WrongArguments)?;
        self.registry
            .create(name)
            .map_err(|_| BankError::UserAlreadyExists)
    }

    /// Report `user`'s balance in `currency`, zero if never deposited.
    pub async fn get_balance(&self, user: &str, currency: &str) -> Result<Decimal, BankError> {
        let currency = validate_currency(currency)?;
        let entry = self.resolve(user)?;

        let balance = entry
            .gate
            .run(async { entry.accounts.balance(currency.as_str()) })
            .await
            .map_err(|_| refused(user))?;

        Ok(balance.truncated())
    }

    /// Credit `amount` of `currency` and report the new balance.
    pub async fn deposit(
        &self,
        user: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<Decimal, BankError> {
        let currency = validate_currency(currency)?;
        let amount = validate_amount(amount)?;
        let entry = self.resolve(user)?;

        let new_balance = entry
            .gate
            .run(async { entry.accounts.deposit(&currency, amount) })
            .await
            .map_err(|_| refused(user))?;

        debug!(user, currency = %currency, balance = %new_balance, "deposit applied");
        Ok(new_balance.truncated())
    }

    /// Debit `amount` of `currency` and report the new balance.
    pub async fn withdraw(
        &self,
        user: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<Decimal, BankError> {
        let currency = validate_currency(currency)?;
        let amount = validate_amount(amount)?;
        let entry = self.resolve(user)?;

        let new_balance = entry
            .gate
            .run(async { entry.accounts.withdraw(currency.as_str(), amount) })
            .await
            .map_err(|_| refused(user))?
            .map_err(|_| BankError::NotEnoughMoney)?;

        debug!(user, currency = %currency, balance = %new_balance, "withdrawal applied");
        Ok(new_balance.truncated())
    }

    /// Move `amount` of `currency` from `from` to `to`.
    ///
    /// Two legs: a withdrawal through the sender's gatekeeper, then a
    /// deposit through the receiver's. The legs are not atomic against
    /// concurrent operations on either user; a refused deposit leg is
    /// compensated by re-crediting the sender. Reports both post-leg
    /// balances.
    pub async fn send(
        &self,
        from: &str,
        to: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<(Decimal, Decimal), TransferError> {
        if from == to {
            return Err(TransferError::WrongArguments);
        }
        let currency = validate_currency(currency).map_err(|_| TransferError::WrongArguments)?;
        let amount = validate_amount(amount).map_err(|_| TransferError::WrongArguments)?;

        // Both parties must exist before either leg runs; checking the
        // receiver first means a missing receiver costs the sender nothing.
        let sender = self.resolve(from).map_err(TransferError::sender_leg)?;
        let receiver = self.resolve(to).map_err(TransferError::receiver_leg)?;

        let sender_balance = sender
            .gate
            .run(async { sender.accounts.withdraw(currency.as_str(), amount) })
            .await
            .map_err(|_| TransferError::sender_leg(refused(from)))?
            .map_err(|_| TransferError::NotEnoughMoney)?;

        match receiver
            .gate
            .run(async { receiver.accounts.deposit(&currency, amount) })
            .await
        {
            Ok(receiver_balance) => {
                debug!(from, to, currency = %currency, "transfer settled");
                Ok((sender_balance.truncated(), receiver_balance.truncated()))
            }
            Err(_) => {
                warn!(from, to, "deposit leg refused, re-crediting sender");
                self.compensate(&sender, from, &currency, amount).await;
                Err(TransferError::receiver_leg(refused(to)))
            }
        }
    }

    /// Re-credit a sender whose withdraw leg succeeded but whose transfer
    /// failed on the receiver side. The credit goes through the sender's
    /// own gatekeeper, so a saturated sender can transiently refuse it;
    /// retry briefly, then log the stuck debit and move on.
    async fn compensate(&self, sender: &UserEntry, user: &str, currency: &Currency, amount: Money) {
        for attempt in 1..=COMPENSATION_ATTEMPTS {
            match sender
                .gate
                .run(async { sender.accounts.deposit(currency, amount) })
                .await
            {
                Ok(balance) => {
                    debug!(user, attempt, balance = %balance, "compensation credited");
                    return;
                }
                Err(_) => tokio::time::sleep(COMPENSATION_BACKOFF).await,
            }
        }
        error!(
            user,
            amount = %amount,
            attempts = COMPENSATION_ATTEMPTS,
            "compensation refused repeatedly, sender remains debited"
        );
    }

    /// Existence check backing every money operation. An empty name is
    /// malformed, not merely unknown.
    fn resolve(&self, user: &str) -> Result<Arc<UserEntry>, BankError> {
        if user.is_empty() {
            return Err(BankError::WrongArguments);
        }
        self.registry
            .resolve(user)
            .map_err(|_| BankError::UserDoesNotExist)
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

fn refused(user: &str) -> BankError {
    warn!(user, "admission refused, user saturated");
    BankError::TooManyRequests
}

fn validate_currency(currency: &str) -> Result<Currency, BankError> {
    Currency::try_new(currency).ok_or(BankError::WrongArguments)
}

fn validate_amount(amount: Decimal) -> Result<Money, BankError> {
    if amount <= Decimal::ZERO {
        return Err(BankError::WrongArguments);
    }
    Money::try_new(amount).map_err(|_| BankError::WrongArguments)
}
