use crate::error::AppError;
use crate::models::{TransferRequest, TransferResponse};
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn create_transfer(
    State(state): State<AppState>,
    Json(req): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, AppError> {
    let (from_balance, to_balance) = state
        .bank
        .send(&req.from, &req.to, req.amount, &req.currency)
        .await?;

    Ok(Json(TransferResponse {
        from: req.from,
        to: req.to,
        currency: req.currency,
        from_balance,
        to_balance,
    }))
}
