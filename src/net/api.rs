//! Typed wrappers over the gateway for each remote operation.
//!
//! Responses arrive in small envelopes (`{"user": …}`, `{"palace": …}`);
//! this module unwraps them so callers deal in domain types only. All
//! policy — credential attachment, `401` collapse — lives in the gateway.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::net::gateway::{Gateway, GatewayError};
use crate::net::types::{AuthPayload, MemoryPalace, Profile, ProfileUpdate, User};

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, GatewayError> {
    serde_json::from_value(value).map_err(|e| GatewayError::decode(e.to_string()))
}

/// `POST /auth/login` — exchange credentials for a token and identity.
pub async fn login(
    gateway: &Gateway,
    email: &str,
    password: &str,
) -> Result<AuthPayload, GatewayError> {
    let body = json!({ "email": email, "password": password });
    decode(gateway.post("/auth/login", body).await?)
}

/// `POST /auth/register` — create an account; same payload as login.
pub async fn register(
    gateway: &Gateway,
    username: &str,
    email: &str,
    password: &str,
) -> Result<AuthPayload, GatewayError> {
    let body = json!({ "username": username, "email": email, "password": password });
    decode(gateway.post("/auth/register", body).await?)
}

/// `GET /auth/verify` — resolve the stored token to its user.
pub async fn verify(gateway: &Gateway) -> Result<User, GatewayError> {
    #[derive(serde::Deserialize)]
    struct Envelope {
        user: User,
    }
    decode::<Envelope>(gateway.get("/auth/verify").await?).map(|e| e.user)
}

/// `GET /users/profile`.
pub async fn fetch_profile(gateway: &Gateway) -> Result<Profile, GatewayError> {
    #[derive(serde::Deserialize)]
    struct Envelope {
        user: Profile,
    }
    decode::<Envelope>(gateway.get("/users/profile").await?).map(|e| e.user)
}

/// `PUT /users/profile`.
pub async fn update_profile(
    gateway: &Gateway,
    update: &ProfileUpdate,
) -> Result<User, GatewayError> {
    let body = serde_json::to_value(update).map_err(|e| GatewayError::decode(e.to_string()))?;
    #[derive(serde::Deserialize)]
    struct Envelope {
        user: User,
    }
    decode::<Envelope>(gateway.put("/users/profile", body).await?).map(|e| e.user)
}

/// `GET /users/memory-palaces`.
pub async fn fetch_palaces(gateway: &Gateway) -> Result<Vec<MemoryPalace>, GatewayError> {
    #[derive(serde::Deserialize)]
    struct Envelope {
        memory_palaces: Vec<MemoryPalace>,
    }
    decode::<Envelope>(gateway.get("/users/memory-palaces").await?).map(|e| e.memory_palaces)
}

/// `POST /users/memory-palaces`.
pub async fn create_palace(
    gateway: &Gateway,
    title: &str,
    description: &str,
) -> Result<MemoryPalace, GatewayError> {
    let body = json!({ "title": title, "description": description });
    #[derive(serde::Deserialize)]
    struct Envelope {
        palace: MemoryPalace,
    }
    decode::<Envelope>(gateway.post("/users/memory-palaces", body).await?).map(|e| e.palace)
}
