use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::{BankError, TransferError};

/// Central error type for the gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Bank(err) => match err {
                BankError::WrongArguments => StatusCode::BAD_REQUEST,
                BankError::UserAlreadyExists => StatusCode::CONFLICT,
                BankError::UserDoesNotExist => StatusCode::NOT_FOUND,
                BankError::NotEnoughMoney => StatusCode::UNPROCESSABLE_ENTITY,
                BankError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            },
            AppError::Transfer(err) => match err {
                TransferError::WrongArguments => StatusCode::BAD_REQUEST,
                TransferError::SenderDoesNotExist | TransferError::ReceiverDoesNotExist => {
                    StatusCode::NOT_FOUND
                }
                TransferError::NotEnoughMoney => StatusCode::UNPROCESSABLE_ENTITY,
                TransferError::TooManyRequestsToSender
                | TransferError::TooManyRequestsToReceiver => StatusCode::TOO_MANY_REQUESTS,
            },
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Bank(err) => err.code(),
            AppError::Transfer(err) => err.code(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.code(),
            "message": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Bank(BankError::TooManyRequests).status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AppError::Bank(BankError::UserAlreadyExists).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Transfer(TransferError::SenderDoesNotExist).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_wire_codes_follow_the_refused_side() {
        assert_eq!(
            AppError::Transfer(TransferError::TooManyRequestsToReceiver).code(),
            "too_many_requests_to_receiver"
        );
        assert_eq!(
            AppError::Bank(BankError::TooManyRequests).code(),
            "too_many_requests_to_user"
        );
    }
}
