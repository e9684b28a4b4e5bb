use super::*;

use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;

use crate::net::gateway::{Gateway, GatewayErrorKind, Method};
use crate::net::testing::FakeTransport;
use crate::net::token_store::{MemoryTokenStore, TokenStore};

fn gateway(transport: Rc<FakeTransport>) -> Gateway {
    let store: Rc<dyn TokenStore> = Rc::new(MemoryTokenStore::default());
    Gateway::new("http://api.test", transport, store, || {})
}

fn user_json() -> serde_json::Value {
    json!({ "id": 1, "username": "a", "email": "a@b.com" })
}

// =============================================================
// Auth operations
// =============================================================

#[test]
fn login_posts_credentials_and_returns_the_payload() {
    let transport = Rc::new(FakeTransport::new());
    let gw = gateway(Rc::clone(&transport));
    transport.push_response(200, json!({ "access_token": "T1", "user": user_json() }));

    let payload = block_on(login(&gw, "a@b.com", "x")).expect("payload");

    assert_eq!(payload.access_token, "T1");
    assert_eq!(payload.user.username, "a");

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "http://api.test/auth/login");
    assert_eq!(
        requests[0].body,
        Some(json!({ "email": "a@b.com", "password": "x" }))
    );
}

#[test]
fn login_rejection_surfaces_the_server_reason() {
    let transport = Rc::new(FakeTransport::new());
    let gw = gateway(Rc::clone(&transport));
    transport.push_response(400, json!({ "error": "Invalid email or password" }));

    let err = block_on(login(&gw, "a@b.com", "wrong")).expect_err("must fail");

    assert_eq!(err.kind, GatewayErrorKind::Rejected);
    assert_eq!(err.message, "Invalid email or password");
}

#[test]
fn login_with_missing_token_field_is_a_decode_error() {
    let transport = Rc::new(FakeTransport::new());
    let gw = gateway(Rc::clone(&transport));
    transport.push_response(200, json!({ "user": user_json() }));

    let err = block_on(login(&gw, "a@b.com", "x")).expect_err("must fail");
    assert_eq!(err.kind, GatewayErrorKind::Decode);
}

#[test]
fn register_posts_all_three_fields() {
    let transport = Rc::new(FakeTransport::new());
    let gw = gateway(Rc::clone(&transport));
    transport.push_response(201, json!({ "access_token": "T2", "user": user_json() }));

    let payload = block_on(register(&gw, "a", "a@b.com", "x")).expect("payload");

    assert_eq!(payload.access_token, "T2");
    assert_eq!(
        transport.requests()[0].body,
        Some(json!({ "username": "a", "email": "a@b.com", "password": "x" }))
    );
}

#[test]
fn verify_unwraps_the_user_envelope() {
    let transport = Rc::new(FakeTransport::new());
    let gw = gateway(Rc::clone(&transport));
    transport.push_response(200, json!({ "user": user_json() }));

    let user = block_on(verify(&gw)).expect("user");

    assert_eq!(user.id, 1);
    assert_eq!(user.username, "a");
    assert_eq!(transport.requests()[0].url, "http://api.test/auth/verify");
}

// =============================================================
// Profile and palace operations
// =============================================================

#[test]
fn fetch_profile_includes_the_palace_count() {
    let transport = Rc::new(FakeTransport::new());
    let gw = gateway(Rc::clone(&transport));
    transport.push_response(
        200,
        json!({ "user": {
            "id": 1,
            "username": "a",
            "email": "a@b.com",
            "memory_palaces_count": 3
        }}),
    );

    let profile = block_on(fetch_profile(&gw)).expect("profile");
    assert_eq!(profile.memory_palaces_count, 3);
}

#[test]
fn update_profile_omits_unset_fields() {
    let transport = Rc::new(FakeTransport::new());
    let gw = gateway(Rc::clone(&transport));
    transport.push_response(200, json!({ "message": "ok", "user": user_json() }));

    let update = ProfileUpdate {
        username: Some("b".to_owned()),
        email: None,
    };
    block_on(update_profile(&gw, &update)).expect("user");

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].body, Some(json!({ "username": "b" })));
}

#[test]
fn fetch_palaces_unwraps_the_list() {
    let transport = Rc::new(FakeTransport::new());
    let gw = gateway(Rc::clone(&transport));
    transport.push_response(
        200,
        json!({ "memory_palaces": [
            { "id": 7, "title": "Loci", "description": "", "rooms_count": 4 }
        ]}),
    );

    let palaces = block_on(fetch_palaces(&gw)).expect("palaces");

    assert_eq!(palaces.len(), 1);
    assert_eq!(palaces[0].id, 7);
    assert_eq!(palaces[0].title, "Loci");
    assert_eq!(palaces[0].rooms_count, 4);
}

#[test]
fn create_palace_unwraps_the_created_record() {
    let transport = Rc::new(FakeTransport::new());
    let gw = gateway(Rc::clone(&transport));
    transport.push_response(
        201,
        json!({
            "message": "Memory palace created successfully",
            "palace": { "id": 9, "title": "Loci", "description": "ancient rooms" }
        }),
    );

    let palace = block_on(create_palace(&gw, "Loci", "ancient rooms")).expect("palace");

    assert_eq!(palace.id, 9);
    assert_eq!(
        transport.requests()[0].body,
        Some(json!({ "title": "Loci", "description": "ancient rooms" }))
    );
}
