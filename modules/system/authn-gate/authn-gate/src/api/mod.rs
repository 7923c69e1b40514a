//! Axum integration for the authentication gate.

use std::sync::Arc;

use axum::Router;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::{HeaderValue, header, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::routing::MethodRouter;

use authn_gate_sdk::{GateDecision, GateFault, PrincipalLookup, PrincipalLookupError};
use campus_http::Problem;
use campus_security::AuthenticatedContext;

use crate::config::AuthNGateConfig;
use crate::domain::error::SecretError;
use crate::domain::gate::AuthenticationGate;
use crate::domain::secret::SecretVerifier;

/// The single external message for every authentication rejection.
pub const AUTHENTICATION_FAILED: &str = "Authentication failed";

/// Shared state for the authentication middleware.
#[derive(Clone)]
pub struct AuthNState {
    gate: Arc<AuthenticationGate>,
    challenge: HeaderValue,
}

impl AuthNState {
    #[must_use]
    pub fn new(gate: Arc<AuthenticationGate>, realm: &str) -> Self {
        let challenge = HeaderValue::from_str(&format!("Basic realm=\"{realm}\""))
            .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
        Self { gate, challenge }
    }

    /// Build the gate and its middleware state from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError`] if the hashing parameters are invalid.
    pub fn from_config(
        cfg: &AuthNGateConfig,
        lookup: Arc<dyn PrincipalLookup>,
    ) -> Result<Self, SecretError> {
        let verifier = SecretVerifier::from_config(&cfg.hashing)?;
        let gate = AuthenticationGate::new(lookup, verifier)?;
        Ok(Self::new(Arc::new(gate), &cfg.realm))
    }

    #[must_use]
    pub fn gate(&self) -> &Arc<AuthenticationGate> {
        &self.gate
    }
}

/// Put every route of `router` behind the gate.
///
/// Uses `route_layer`, so unmatched paths still 404 instead of 401.
pub fn require_authentication<S>(router: Router<S>, state: AuthNState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(axum::middleware::from_fn_with_state(state, authn_middleware))
}

/// Put the routed methods of one path behind the gate.
///
/// Methods the path does not serve fall through to the method router's
/// fallback untouched, so they answer 405 rather than 401. Use this when a
/// path mixes public and protected methods.
pub fn protect<S>(route: MethodRouter<S>, state: AuthNState) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(axum::middleware::from_fn_with_state(state, authn_middleware))
}

/// Authentication middleware.
///
/// For each request:
/// 1. Runs the gate on the `Authorization` header
/// 2. On success inserts the `AuthenticatedContext` and calls the next service
/// 3. On rejection answers 401 with the generic message and a Basic challenge
/// 4. On a lookup or hashing fault answers 503/500
pub async fn authn_middleware(
    State(state): State<AuthNState>,
    mut req: Request,
    next: Next,
) -> Response {
    let decision = state
        .gate
        .authenticate(req.headers().get(header::AUTHORIZATION))
        .await;

    match decision {
        Ok(GateDecision::Authenticated(ctx)) => {
            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
        Ok(GateDecision::Rejected(_)) => unauthorized(&state.challenge),
        Err(fault) => fault_to_response(&fault),
    }
}

fn unauthorized(challenge: &HeaderValue) -> Response {
    let mut response = Problem::unauthorized(AUTHENTICATION_FAILED).into_response();
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, challenge.clone());
    response
}

/// Convert a `GateFault` to a server-side Problem response.
fn fault_to_response(fault: &GateFault) -> Response {
    tracing::error!(error = %fault, "AuthN gate fault");
    match fault {
        GateFault::Lookup(PrincipalLookupError::Unavailable(_)) => {
            Problem::service_unavailable("Authentication service unavailable").into_response()
        }
        GateFault::Lookup(PrincipalLookupError::Internal(_)) | GateFault::Hashing(_) => {
            Problem::internal("Internal authentication error").into_response()
        }
    }
}

/// Extractor for the `AuthenticatedContext` inserted by [`authn_middleware`].
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedContext);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedContext>()
            .cloned()
            .map(Authenticated)
            .ok_or_else(|| {
                tracing::error!("AuthenticatedContext missing: route is not behind the AuthN gate");
                Problem::internal("Internal authentication error")
            })
    }
}
