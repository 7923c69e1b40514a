use std::sync::Arc;

use authn_gate::{AuthNState, protect};
use axum::routing::{MethodRouter, get, post, put};
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::module::ConcreteAppServices;

/// Build the users and courses routes.
///
/// Registration and course reads are public; every other method sits behind
/// the authentication gate. Ownership is checked by the services.
pub fn register_routes(services: Arc<ConcreteAppServices>, authn: AuthNState) -> Router {
    let gated = |route: MethodRouter| protect(route, authn.clone());

    Router::new()
        .route(
            "/api/users",
            post(handlers::create_user).merge(gated(get(handlers::list_users))),
        )
        .route("/api/users/me", gated(get(handlers::current_user)))
        .route(
            "/api/users/{id}",
            gated(put(handlers::update_user).delete(handlers::delete_user)),
        )
        .route(
            "/api/courses",
            get(handlers::list_courses).merge(gated(post(handlers::create_course))),
        )
        .route(
            "/api/courses/{id}",
            get(handlers::get_course)
                .merge(gated(put(handlers::update_course).delete(handlers::delete_course))),
        )
        .layer(Extension(services))
}
