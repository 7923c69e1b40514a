//! Axum handlers. Authenticated handlers receive the caller through the
//! [`Authenticated`](authn_gate::Authenticated) extractor and pass it on to
//! the service explicitly.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use campus_http::Problem;
use serde::Serialize;

mod courses;
mod users;

pub(crate) use courses::{create_course, delete_course, get_course, list_courses, update_course};
pub(crate) use users::{create_user, current_user, delete_user, list_users, update_user};

/// Unwrap a JSON body, turning axum's plain-text rejection into a problem.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Problem> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected request body");
        let status = rejection.status();
        Problem::new(
            status,
            status.canonical_reason().unwrap_or("Bad Request"),
            rejection.body_text(),
        )
    })
}

/// Numeric `{id}` path segment. A non-numeric id is rejected as a problem
/// instead of axum's plain-text message.
pub(crate) struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected path parameter");
                let status = rejection.status();
                Err(Problem::new(
                    status,
                    status.canonical_reason().unwrap_or("Bad Request"),
                    rejection.body_text(),
                )
                .with_instance(parts.uri.path()))
            }
        }
    }
}

/// `201 Created` with a `Location` pointing at the new resource.
fn created<T: Serialize>(uri: &Uri, id: i64, body: T) -> Response {
    let location = format!("{}/{id}", uri.path().trim_end_matches('/'));
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}
