//! Service tests against an in-memory `SQLite` database.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use authn_gate_sdk::{PrincipalLookup, PrincipalLookupError};
use campus_security::PrincipalId;
use secrecy::SecretString;

use crate::domain::error::DomainError;
use crate::domain::models::{CourseUpdate, UserUpdate};
use crate::infra::storage::SeaOrmPrincipalLookup;
use crate::test_support::{
    build_services, ctx_for, fast_verifier, inmem_db, new_course, new_user, seed_user,
};

fn update_for(username: &str, password: Option<&str>) -> UserUpdate {
    UserUpdate {
        first_name: "Renamed".to_owned(),
        last_name: "User".to_owned(),
        username: username.to_owned(),
        password: password.map(|p| SecretString::from(p.to_owned())),
    }
}

fn course_update(title: &str) -> CourseUpdate {
    CourseUpdate {
        title: title.to_owned(),
        description: "Updated".to_owned(),
        estimated_time: None,
        materials_needed: Some("Laptop".to_owned()),
    }
}

#[tokio::test]
async fn registration_stores_a_verifiable_hash() {
    let db = inmem_db().await;
    let svc = build_services(db.clone());

    let alice = seed_user(&svc, "alice").await;

    let principal = SeaOrmPrincipalLookup::new(db)
        .find_principal_by_identifier("alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(principal.id(), alice.id);
    assert!(principal.secret_hash().starts_with("$argon2id$"));
    assert!(fast_verifier().verify("correct-secret", principal.secret_hash()));
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let svc = build_services(inmem_db().await);
    seed_user(&svc, "alice").await;

    let err = svc.users.create_user(new_user("alice")).await.unwrap_err();

    assert!(matches!(err, DomainError::UsernameTaken { ref username } if username == "alice"));
}

#[tokio::test]
async fn short_password_is_rejected_before_storage() {
    let svc = build_services(inmem_db().await);
    let mut user = new_user("alice");
    user.password = SecretString::from("short".to_owned());

    let err = svc.users.create_user(user).await.unwrap_err();

    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "password"));
    assert!(svc.users.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn lookup_of_unknown_identifier_is_none() {
    let db = inmem_db().await;
    let svc = build_services(db.clone());
    seed_user(&svc, "alice").await;

    let lookup = SeaOrmPrincipalLookup::new(db);
    assert!(lookup.find_principal_by_identifier("bob").await.unwrap().is_none());
    assert!(lookup.find_principal_by_identifier("ALICE").await.unwrap().is_none());
}

#[tokio::test]
async fn closed_pool_makes_lookup_unavailable() {
    let db = inmem_db().await;
    let svc = build_services(db.clone());
    seed_user(&svc, "alice").await;
    let lookup = SeaOrmPrincipalLookup::new(db.clone());

    db.close().await.unwrap();

    let err = lookup
        .find_principal_by_identifier("alice")
        .await
        .unwrap_err();
    assert!(matches!(err, PrincipalLookupError::Unavailable(_)));
}

#[tokio::test]
async fn current_user_is_the_principal() {
    let svc = build_services(inmem_db().await);
    let alice = seed_user(&svc, "alice").await;
    seed_user(&svc, "bob").await;

    let me = svc.users.current_user(&ctx_for(&alice)).await.unwrap();

    assert_eq!(me, alice);
}

#[tokio::test]
async fn user_can_update_itself_and_change_password() {
    let db = inmem_db().await;
    let svc = build_services(db.clone());
    let alice = seed_user(&svc, "alice").await;

    let updated = svc
        .users
        .update_user(
            &ctx_for(&alice),
            alice.id,
            update_for("alice2", Some("new-password")),
        )
        .await
        .unwrap();

    assert_eq!(updated.username, "alice2");
    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.created_at, alice.created_at);

    let principal = SeaOrmPrincipalLookup::new(db)
        .find_principal_by_identifier("alice2")
        .await
        .unwrap()
        .unwrap();
    assert!(fast_verifier().verify("new-password", principal.secret_hash()));
}

#[tokio::test]
async fn update_without_password_keeps_the_old_hash() {
    let db = inmem_db().await;
    let svc = build_services(db.clone());
    let alice = seed_user(&svc, "alice").await;

    svc.users
        .update_user(&ctx_for(&alice), alice.id, update_for("alice", None))
        .await
        .unwrap();

    let principal = SeaOrmPrincipalLookup::new(db)
        .find_principal_by_identifier("alice")
        .await
        .unwrap()
        .unwrap();
    assert!(fast_verifier().verify("correct-secret", principal.secret_hash()));
}

#[tokio::test]
async fn user_cannot_update_someone_else() {
    let svc = build_services(inmem_db().await);
    let alice = seed_user(&svc, "alice").await;
    let bob = seed_user(&svc, "bob").await;

    let err = svc
        .users
        .update_user(&ctx_for(&alice), bob.id, update_for("mallory", None))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Forbidden(_)));
    let bob_after = svc.users.current_user(&ctx_for(&bob)).await.unwrap();
    assert_eq!(bob_after.username, "bob");
}

#[tokio::test]
async fn renaming_onto_a_taken_username_is_a_conflict() {
    let svc = build_services(inmem_db().await);
    let alice = seed_user(&svc, "alice").await;
    seed_user(&svc, "bob").await;

    let err = svc
        .users
        .update_user(&ctx_for(&alice), alice.id, update_for("bob", None))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::UsernameTaken { .. }));
}

#[tokio::test]
async fn missing_target_is_not_found_before_ownership() {
    let svc = build_services(inmem_db().await);
    let alice = seed_user(&svc, "alice").await;

    let err = svc
        .users
        .delete_user(&ctx_for(&alice), PrincipalId::new(999))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { kind: "user", id: 999 }));

    let err = svc
        .courses
        .delete_course(&ctx_for(&alice), 999)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { kind: "course", id: 999 }));
}

#[tokio::test]
async fn invalid_input_is_rejected_before_lookup() {
    let svc = build_services(inmem_db().await);
    let alice = seed_user(&svc, "alice").await;

    // Course 999 does not exist, but validation runs first.
    let err = svc
        .courses
        .update_course(&ctx_for(&alice), 999, course_update("   "))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "title"));
}

#[tokio::test]
async fn course_is_owned_by_its_creator() {
    let svc = build_services(inmem_db().await);
    let alice = seed_user(&svc, "alice").await;

    let course = svc
        .courses
        .create_course(&ctx_for(&alice), new_course("Rust 101"))
        .await
        .unwrap();

    assert_eq!(course.owner_id, alice.id);
    assert_eq!(svc.courses.get_course(course.id).await.unwrap(), course);
    assert_eq!(svc.courses.list_courses().await.unwrap().len(), 1);
}

#[tokio::test]
async fn owner_can_update_and_delete_course() {
    let svc = build_services(inmem_db().await);
    let alice = seed_user(&svc, "alice").await;
    let ctx = ctx_for(&alice);
    let course = svc
        .courses
        .create_course(&ctx, new_course("Rust 101"))
        .await
        .unwrap();

    let updated = svc
        .courses
        .update_course(&ctx, course.id, course_update("Rust 102"))
        .await
        .unwrap();
    assert_eq!(updated.title, "Rust 102");
    assert_eq!(updated.owner_id, alice.id);
    assert_eq!(updated.materials_needed.as_deref(), Some("Laptop"));
    assert!(updated.estimated_time.is_none());

    svc.courses.delete_course(&ctx, course.id).await.unwrap();
    assert!(matches!(
        svc.courses.get_course(course.id).await.unwrap_err(),
        DomainError::NotFound { .. }
    ));
}

#[tokio::test]
async fn non_owner_cannot_touch_course() {
    let svc = build_services(inmem_db().await);
    let alice = seed_user(&svc, "alice").await;
    let bob = seed_user(&svc, "bob").await;
    let course = svc
        .courses
        .create_course(&ctx_for(&bob), new_course("Bob's course"))
        .await
        .unwrap();

    let err = svc
        .courses
        .update_course(&ctx_for(&alice), course.id, course_update("Hijacked"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ref v) if v.owner_id == bob.id && v.principal_id == alice.id
    ));

    let err = svc
        .courses
        .delete_course(&ctx_for(&alice), course.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    assert_eq!(svc.courses.get_course(course.id).await.unwrap(), course);
}

#[tokio::test]
async fn deleting_a_user_removes_its_courses_only() {
    let svc = Arc::new(build_services(inmem_db().await));
    let alice = seed_user(&svc, "alice").await;
    let bob = seed_user(&svc, "bob").await;
    svc.courses
        .create_course(&ctx_for(&alice), new_course("Alice 1"))
        .await
        .unwrap();
    svc.courses
        .create_course(&ctx_for(&alice), new_course("Alice 2"))
        .await
        .unwrap();
    let bobs = svc
        .courses
        .create_course(&ctx_for(&bob), new_course("Bob 1"))
        .await
        .unwrap();

    svc.users.delete_user(&ctx_for(&alice), alice.id).await.unwrap();

    let remaining = svc.courses.list_courses().await.unwrap();
    assert_eq!(remaining, vec![bobs]);
    let users = svc.users.list_users().await.unwrap();
    assert_eq!(users, vec![bob]);
}
