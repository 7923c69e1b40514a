#![allow(clippy::unwrap_used, clippy::expect_used)]

use campus_security::{
    AccessDecision, AuthenticatedContext, OwnedResource, OwnershipAuthorizer, Principal,
    PrincipalId,
};

struct Account {
    id: PrincipalId,
}

// An account is owned by the principal it describes.
impl OwnedResource for Account {
    const KIND: &'static str = "account";

    fn owner_id(&self) -> PrincipalId {
        self.id
    }
}

fn ctx_for(id: i64, identifier: &str) -> AuthenticatedContext {
    AuthenticatedContext::new(Principal::new(id, identifier, "unused"))
}

#[test]
fn principal_may_mutate_only_its_own_account() {
    let alice = ctx_for(1, "alice");
    let bob = ctx_for(2, "bob");
    let alices_account = Account {
        id: PrincipalId::new(1),
    };

    assert!(OwnershipAuthorizer::authorize(&alice, &alices_account).is_allowed());
    assert_eq!(
        OwnershipAuthorizer::authorize(&bob, &alices_account),
        AccessDecision::Deny
    );
}

#[test]
fn decision_ignores_identifier_and_compares_ids_only() {
    // Same identifier, different id: still a different principal.
    let impostor = ctx_for(99, "alice");
    let account = Account {
        id: PrincipalId::new(1),
    };

    let violation = OwnershipAuthorizer::ensure_owner(&impostor, &account).unwrap_err();
    assert_eq!(violation.kind, "account");
    assert_eq!(violation.principal_id, PrincipalId::new(99));
}
