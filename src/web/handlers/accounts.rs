//! Connected-account endpoints.

use crate::account::{domain::AccountId, services::ConnectAccountRequest};
use crate::web::{
    dto::{AccountView, ConnectAccountBody},
    error::{ApiError, ApiResult},
    extract::ActingUser,
    state::AppState,
};
use axum::Json;
use axum::extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
};
use axum::http::StatusCode;
use uuid::Uuid;

/// `GET /accounts`
///
/// Lists the acting user's accounts, oldest first.
pub async fn list_accounts(
    State(state): State<AppState>,
    ActingUser(owner): ActingUser,
) -> ApiResult<Json<Vec<AccountView>>> {
    let accounts = state.accounts.list_for_owner(&owner).await?;
    Ok(Json(accounts.iter().map(AccountView::from).collect()))
}

/// `POST /accounts`
///
/// Connects an account. Without an `accountId` the account is stored but
/// cannot be used for publishing.
pub async fn connect_account(
    State(state): State<AppState>,
    ActingUser(owner): ActingUser,
    payload: Result<Json<ConnectAccountBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AccountView>)> {
    let Json(body) = payload?;
    let mut request = ConnectAccountRequest::new(owner, body.platform, body.username);
    if let Some(account_id) = body.account_id {
        request = request.with_external_account_id(account_id);
    }
    if let Some(avatar) = body.avatar {
        request = request.with_avatar(avatar);
    }

    let account = state.accounts.connect(request).await?;
    Ok((StatusCode::CREATED, Json(AccountView::from(&account))))
}

/// `DELETE /accounts/{id}`
pub async fn disconnect_account(
    State(state): State<AppState>,
    ActingUser(owner): ActingUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(raw_id) = path?;
    let account_id = AccountId::from_uuid(raw_id);
    let owned = state
        .accounts
        .find(account_id)
        .await?
        .is_some_and(|account| account.owner() == &owner);
    if !owned {
        return Err(ApiError::AccountNotFound(format!(
            "account not found: {account_id}"
        )));
    }

    state.accounts.disconnect(account_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
