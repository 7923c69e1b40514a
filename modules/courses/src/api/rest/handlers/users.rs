use std::sync::Arc;

use authn_gate::Authenticated;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use campus_http::ApiResult;
use campus_security::PrincipalId;

use super::{PathId, created, json_body};
use crate::api::rest::dto::{CreateUserReq, UpdateUserReq, UserDto};
use crate::module::ConcreteAppServices;

/// List all users
#[tracing::instrument(skip_all, fields(requester.id = %ctx.principal_id()))]
pub(crate) async fn list_users(
    Authenticated(ctx): Authenticated,
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let users = svc.users.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// The authenticated caller's own record
#[tracing::instrument(skip_all, fields(requester.id = %ctx.principal_id()))]
pub(crate) async fn current_user(
    Authenticated(ctx): Authenticated,
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
) -> ApiResult<Json<UserDto>> {
    let user = svc.users.current_user(&ctx).await?;
    Ok(Json(user.into()))
}

/// Register a new user (public)
#[tracing::instrument(skip_all)]
pub(crate) async fn create_user(
    uri: Uri,
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    payload: Result<Json<CreateUserReq>, JsonRejection>,
) -> ApiResult<Response> {
    let req = json_body(payload)?;
    let user = svc.users.create_user(req.into()).await?;
    Ok(created(&uri, user.id.get(), UserDto::from(user)))
}

/// Replace a user's profile (owner only)
#[tracing::instrument(
    skip_all,
    fields(user.id = %id, requester.id = %ctx.principal_id())
)]
pub(crate) async fn update_user(
    Authenticated(ctx): Authenticated,
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathId(id): PathId,
    payload: Result<Json<UpdateUserReq>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let req = json_body(payload)?;
    let user = svc
        .users
        .update_user(&ctx, PrincipalId::new(id), req.into())
        .await?;
    Ok(Json(user.into()))
}

/// Delete a user and its courses (owner only)
#[tracing::instrument(
    skip_all,
    fields(user.id = %id, requester.id = %ctx.principal_id())
)]
pub(crate) async fn delete_user(
    Authenticated(ctx): Authenticated,
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathId(id): PathId,
) -> ApiResult<impl IntoResponse> {
    svc.users.delete_user(&ctx, PrincipalId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
