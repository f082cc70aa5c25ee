use crate::error::AppError;
use crate::models::{
    BalanceQuery, BalanceResponse, CreateUserRequest, CreateUserResponse, MovementRequest,
};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), AppError> {
    state.bank.create_user(&req.user)?;
    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse { user: req.user }),
    ))
}

pub async fn get_balance(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = state.bank.get_balance(&user, &query.currency).await?;

    Ok(Json(BalanceResponse {
        user,
        currency: query.currency,
        balance,
    }))
}

pub async fn deposit(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(req): Json<MovementRequest>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = state.bank.deposit(&user, req.amount, &req.currency).await?;

    Ok(Json(BalanceResponse {
        user,
        currency: req.currency,
        balance,
    }))
}

pub async fn withdraw(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(req): Json<MovementRequest>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = state.bank.withdraw(&user, req.amount, &req.currency).await?;

    Ok(Json(BalanceResponse {
        user,
        currency: req.currency,
        balance,
    }))
}
