use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BCRYPT_COST: u32 = 12;
pub const TOKEN_ISSUER: &str = "meal-sharing-app";
pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Error)]
pub enum Error {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("password hashing task failed to complete")]
    Task,
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub struct TokenSettings {
    pub secret: String,
    pub expires_in: Duration,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub email: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(|err| {
            tracing::error!("Password hashing task panicked: {}", err);
            Error::Task
        })?
        .map_err(Error::from)
}

pub async fn verify_password(password: String, password_hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|err| {
            tracing::error!("Password verification task panicked: {}", err);
            Error::Task
        })?
        .map_err(Error::from)
}

pub fn issue_token(settings: &TokenSettings, user_id: i64, email: &str) -> Result<String> {
    let issued_at = Utc::now();
    let claims = Claims {
        user_id,
        email: email.to_string(),
        token_type: ACCESS_TOKEN_TYPE.to_string(),
        iss: TOKEN_ISSUER.to_string(),
        iat: issued_at.timestamp(),
        exp: (issued_at + settings.expires_in).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )
    .map_err(Error::from)
}

/// Fails on a bad signature, a foreign issuer or an expired token.
pub fn verify_token(settings: &TokenSettings, token: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[TOKEN_ISSUER]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(Error::from)
}

pub fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
