//! Error types for the banking core
//!
//! Errors are values, never exceptional control flow. Every internal error
//! kind is translated exactly once at the API boundary; `send` translates
//! its single-user leg errors into sender/receiver-specific kinds via
//! [`TransferError::sender_leg`] and [`TransferError::receiver_leg`].

use thiserror::Error;

/// Errors of the single-user operations (create, deposit, withdraw, balance)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankError {
    #[error("wrong arguments")]
    WrongArguments,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("user does not exist")]
    UserDoesNotExist,

    #[error("not enough money")]
    NotEnoughMoney,

    #[error("too many requests to user")]
    TooManyRequests,
}

impl BankError {
    /// Stable wire code for the external API.
    pub fn code(&self) -> &'static str {
        match self {
            BankError::WrongArguments => "wrong_arguments",
            BankError::UserAlreadyExists => "user_already_exists",
            BankError::UserDoesNotExist => "user_does_not_exist",
            BankError::NotEnoughMoney => "not_enough_money",
            BankError::TooManyRequests => "too_many_requests_to_user",
        }
    }
}

/// Errors of the two-leg transfer operation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    #[error("wrong arguments")]
    WrongArguments,

    #[error("sender does not exist")]
    SenderDoesNotExist,

    #[error("receiver does not exist")]
    ReceiverDoesNotExist,

    #[error("not enough money")]
    NotEnoughMoney,

    #[error("too many requests to sender")]
    TooManyRequestsToSender,

    #[error("too many requests to receiver")]
    TooManyRequestsToReceiver,
}

impl TransferError {
    /// Translate an error of the withdraw leg.
    pub fn sender_leg(err: BankError) -> Self {
        match err {
            BankError::UserDoesNotExist => TransferError::SenderDoesNotExist,
            BankError::TooManyRequests => TransferError::TooManyRequestsToSender,
            BankError::NotEnoughMoney => TransferError::NotEnoughMoney,
            BankError::WrongArguments | BankError::UserAlreadyExists => {
                TransferError::WrongArguments
            }
        }
    }

    /// Translate an error of the deposit leg.
    pub fn receiver_leg(err: BankError) -> Self {
        match err {
            BankError::UserDoesNotExist => TransferError::ReceiverDoesNotExist,
            BankError::TooManyRequests => TransferError::TooManyRequestsToReceiver,
            BankError::NotEnoughMoney => TransferError::NotEnoughMoney,
            BankError::WrongArguments | BankError::UserAlreadyExists => {
                TransferError::WrongArguments
            }
        }
    }

    /// Stable wire code for the external API.
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::WrongArguments => "wrong_arguments",
            TransferError::SenderDoesNotExist => "sender_does_not_exist",
            TransferError::ReceiverDoesNotExist => "receiver_does_not_exist",
            TransferError::NotEnoughMoney => "not_enough_money",
            TransferError::TooManyRequestsToSender => "too_many_requests_to_sender",
            TransferError::TooManyRequestsToReceiver => "too_many_requests_to_receiver",
        }
    }
}
