use std::sync::Arc;

use authn_gate::Authenticated;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use campus_http::ApiResult;

use super::{PathId, created, json_body};
use crate::api::rest::dto::{CourseDto, CourseReq};
use crate::module::ConcreteAppServices;

#[tracing::instrument(skip_all)]
pub(crate) async fn list_courses(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
) -> ApiResult<Json<Vec<CourseDto>>> {
    let courses = svc.courses.list_courses().await?;
    Ok(Json(courses.into_iter().map(CourseDto::from).collect()))
}

#[tracing::instrument(skip_all, fields(course.id = %id))]
pub(crate) async fn get_course(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathId(id): PathId,
) -> ApiResult<Json<CourseDto>> {
    let course = svc.courses.get_course(id).await?;
    Ok(Json(course.into()))
}

#[tracing::instrument(skip_all, fields(requester.id = %ctx.principal_id()))]
pub(crate) async fn create_course(
    uri: Uri,
    Authenticated(ctx): Authenticated,
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    payload: Result<Json<CourseReq>, JsonRejection>,
) -> ApiResult<Response> {
    let req = json_body(payload)?;
    let course = svc.courses.create_course(&ctx, req.into()).await?;
    Ok(created(&uri, course.id, CourseDto::from(course)))
}

#[tracing::instrument(
    skip_all,
    fields(course.id = %id, requester.id = %ctx.principal_id())
)]
pub(crate) async fn update_course(
    Authenticated(ctx): Authenticated,
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathId(id): PathId,
    payload: Result<Json<CourseReq>, JsonRejection>,
) -> ApiResult<Json<CourseDto>> {
    let req = json_body(payload)?;
    let course = svc.courses.update_course(&ctx, id, req.into()).await?;
    Ok(Json(course.into()))
}

#[tracing::instrument(
    skip_all,
    fields(course.id = %id, requester.id = %ctx.principal_id())
)]
pub(crate) async fn delete_course(
    Authenticated(ctx): Authenticated,
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathId(id): PathId,
) -> ApiResult<impl IntoResponse> {
    svc.courses.delete_course(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
