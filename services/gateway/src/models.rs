//! Wire models
//!
//! Amounts cross the wire as decimal strings so no floating-point value
//! ever touches money.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub user: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub user: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BalanceQuery {
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceResponse {
    pub user: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovementRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferResponse {
    pub from: String,
    pub to: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub from_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub to_balance: Decimal,
}
