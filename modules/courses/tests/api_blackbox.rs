#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Drives the public router the way an HTTP client would: register users,
//! authenticate with Basic credentials, and hit the ownership rules.

use authn_gate::{AuthNGateConfig, HashingConfig, basic_authorization_value};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use courses::{CoursesConfig, CoursesModule};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    app_with_db().await.0
}

async fn app_with_db() -> (Router, DatabaseConnection) {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts).await.expect("connect");
    CoursesModule::migrate(&db).await.expect("migrate");

    let authn = AuthNGateConfig {
        realm: "campus".to_owned(),
        hashing: HashingConfig::insecure_fast(),
    };
    let router = CoursesModule::init(db.clone(), CoursesConfig::default(), &authn)
        .expect("init")
        .router();
    (router, db)
}

struct Call {
    method: Method,
    uri: String,
    auth: Option<(String, String)>,
    body: Option<Value>,
}

impl Call {
    fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            auth: None,
            body: None,
        }
    }

    fn auth(mut self, identifier: &str, secret: &str) -> Self {
        self.auth = Some((identifier.to_owned(), secret.to_owned()));
        self
    }

    fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    async fn send(self, app: &Router) -> (StatusCode, http::HeaderMap, Value) {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if let Some((identifier, secret)) = &self.auth {
            builder = builder.header(
                header::AUTHORIZATION,
                basic_authorization_value(identifier, secret),
            );
        }
        let body = match self.body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, value)
    }
}

async fn register(app: &Router, username: &str) -> i64 {
    let (status, _, body) = Call::new(Method::POST, "/api/users")
        .json(json!({
            "firstName": "Test",
            "lastName": username,
            "username": username,
            "password": "correct-secret",
        }))
        .send(app)
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

async fn create_course(app: &Router, username: &str, title: &str) -> i64 {
    let (status, _, body) = Call::new(Method::POST, "/api/courses")
        .auth(username, "correct-secret")
        .json(json!({ "title": title, "description": "About Rust" }))
        .send(app)
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn registration_returns_location_and_hides_password() {
    let app = app().await;

    let (status, headers, body) = Call::new(Method::POST, "/api/users")
        .json(json!({
            "firstName": "Alice",
            "lastName": "Liddell",
            "username": "alice",
            "password": "correct-secret",
        }))
        .send(&app)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(
        headers.get(header::LOCATION).unwrap(),
        format!("/api/users/{id}").as_str()
    );
    assert_eq!(body["username"], "alice");
    assert!(body.get("password").is_none());
    assert!(body.get("secretHash").is_none());
}

#[tokio::test]
async fn me_reflects_the_authenticated_principal() {
    let app = app().await;
    let alice_id = register(&app, "alice").await;
    register(&app, "bob").await;

    let (status, _, body) = Call::new(Method::GET, "/api/users/me")
        .auth("alice", "correct-secret")
        .send(&app)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["id"], alice_id);
}

#[tokio::test]
async fn bad_credentials_get_the_same_generic_401() {
    let app = app().await;
    register(&app, "alice").await;

    let (wrong_status, wrong_headers, wrong_body) = Call::new(Method::GET, "/api/users/me")
        .auth("alice", "wrong-secret")
        .send(&app)
        .await;
    let (unknown_status, _, unknown_body) = Call::new(Method::GET, "/api/users/me")
        .auth("nobody", "correct-secret")
        .send(&app)
        .await;
    let (missing_status, _, missing_body) =
        Call::new(Method::GET, "/api/users/me").send(&app).await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body, missing_body);
    assert_eq!(wrong_body["detail"], "Authentication failed");
    assert_eq!(
        wrong_headers.get(header::WWW_AUTHENTICATE).unwrap(),
        "Basic realm=\"campus\""
    );
}

#[tokio::test]
async fn course_reads_are_public_and_writes_are_gated() {
    let app = app().await;
    register(&app, "alice").await;
    let course_id = create_course(&app, "alice", "Rust 101").await;

    let (status, _, body) = Call::new(Method::GET, "/api/courses").send(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _, body) = Call::new(Method::GET, format!("/api/courses/{course_id}"))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Rust 101");

    let (status, _, _) = Call::new(Method::POST, "/api/courses")
        .json(json!({ "title": "Anonymous", "description": "Nope" }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _, _) = Call::new(Method::GET, "/api/users").send(&app).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deleting_someone_elses_course_is_forbidden() {
    let app = app().await;
    register(&app, "alice").await;
    register(&app, "bob").await;
    let bobs_course = create_course(&app, "bob", "Bob's course").await;

    let (status, headers, body) = Call::new(Method::DELETE, format!("/api/courses/{bobs_course}"))
        .auth("alice", "correct-secret")
        .send(&app)
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
    assert_eq!(body["status"], 403);

    let (status, _, _) = Call::new(Method::GET, format!("/api/courses/{bobs_course}"))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn owner_updates_then_deletes_course() {
    let app = app().await;
    register(&app, "bob").await;
    let course_id = create_course(&app, "bob", "Draft").await;

    let (status, _, body) = Call::new(Method::PUT, format!("/api/courses/{course_id}"))
        .auth("bob", "correct-secret")
        .json(json!({
            "title": "Final",
            "description": "About Rust",
            "estimatedTime": "3 hours",
        }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Final");
    assert_eq!(body["estimatedTime"], "3 hours");

    let (status, _, _) = Call::new(Method::DELETE, format!("/api/courses/{course_id}"))
        .auth("bob", "correct-secret")
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, _) = Call::new(Method::GET, format!("/api/courses/{course_id}"))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unauthenticated_request_to_missing_course_is_401_not_404() {
    let app = app().await;

    let (status, _, _) = Call::new(Method::DELETE, "/api/courses/42").send(&app).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_registration_is_409_and_validation_is_400() {
    let app = app().await;
    register(&app, "alice").await;

    let (status, _, _) = Call::new(Method::POST, "/api/users")
        .json(json!({
            "firstName": "Other",
            "lastName": "Alice",
            "username": "alice",
            "password": "correct-secret",
        }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _, body) = Call::new(Method::POST, "/api/users")
        .json(json!({
            "firstName": "Eve",
            "lastName": "Colon",
            "username": "e:ve",
            "password": "correct-secret",
        }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "username");
}

#[tokio::test]
async fn user_cannot_delete_another_user_but_can_delete_itself() {
    let app = app().await;
    let alice_id = register(&app, "alice").await;
    let bob_id = register(&app, "bob").await;
    create_course(&app, "alice", "Alice's course").await;

    let (status, _, _) = Call::new(Method::DELETE, format!("/api/users/{bob_id}"))
        .auth("alice", "correct-secret")
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _, _) = Call::new(Method::DELETE, format!("/api/users/{alice_id}"))
        .auth("alice", "correct-secret")
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The account is gone, so its credentials no longer authenticate.
    let (status, _, _) = Call::new(Method::GET, "/api/users/me")
        .auth("alice", "correct-secret")
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, _, courses) = Call::new(Method::GET, "/api/courses").send(&app).await;
    assert!(courses.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_store_is_503_not_401() {
    let (app, db) = app_with_db().await;
    register(&app, "alice").await;

    db.close().await.unwrap();

    let (status, headers, body) = Call::new(Method::GET, "/api/users/me")
        .auth("alice", "correct-secret")
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(headers.get(header::WWW_AUTHENTICATE).is_none());
    assert_eq!(body["status"], 503);
}

#[tokio::test]
async fn non_numeric_id_is_a_problem_document() {
    let app = app().await;

    let (status, headers, body) = Call::new(Method::GET, "/api/courses/abc").send(&app).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
    assert_eq!(body["status"], 400);
    assert_eq!(body["instance"], "/api/courses/abc");
}

#[tokio::test]
async fn unsupported_method_is_405_on_public_and_gated_paths() {
    let app = app().await;

    let (public_status, _, _) = Call::new(Method::PATCH, "/api/users").send(&app).await;
    let (gated_status, _, _) = Call::new(Method::PATCH, "/api/users/me").send(&app).await;

    assert_eq!(public_status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(gated_status, StatusCode::METHOD_NOT_ALLOWED);
}
