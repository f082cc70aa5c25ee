//! Banking Engine Service
//!
//! In-memory multi-currency banking core built around per-user admission
//! control and exact decimal balances.
//!
//! **Key Invariants:**
//! - At most 10 operations in flight per user; the 11th is refused
//!   immediately, never queued
//! - Balance arithmetic is exact at full input precision; only the reported
//!   two-digit form truncates
//! - Stored balances are never negative
//! - A user's account store and gatekeeper become addressable atomically

pub mod account;
pub mod bank;
pub mod gatekeeper;
pub mod registry;

pub use bank::{Bank, BankConfig};
