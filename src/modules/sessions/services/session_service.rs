//! Stateless signed session tokens.
//!
//! The identity provider contract is just `current_user` and `sign_out`.
//! Tokens are HMAC-SHA256 signed over `user_id\nemail\nexpires_unix`;
//! sign-out adds the token's signature to an in-memory revocation set, which
//! lives for the process lifetime only (there is no persistence layer).

use std::collections::HashSet;
use std::sync::RwLock;

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::core::{AppError, Result};
use crate::modules::sessions::models::UserIdentity;

type HmacSha256 = Hmac<Sha256>;

pub struct SessionService {
    secret: Vec<u8>,
    ttl: Duration,
    revoked: RwLock<HashSet<String>>,
}

impl SessionService {
    pub fn new(secret: impl Into<Vec<u8>>, ttl_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::hours(ttl_hours),
            revoked: RwLock::new(HashSet::new()),
        }
    }

    /// Issue a token for the given user, valid for the configured TTL.
    pub fn issue(&self, user_id: &str, email: &str) -> Result<String> {
        let expires_at = (Utc::now() + self.ttl).timestamp();
        let payload = format!("{}\n{}\n{}", user_id, email, expires_at);
        let signature = self.sign(payload.as_bytes())?;

        Ok(format!("{}.{}", hex::encode(payload), signature))
    }

    /// Resolve the identity behind a token.
    ///
    /// Returns `None` for anything that is not a currently valid session:
    /// malformed encoding, wrong signature, past expiry, or a revoked token.
    pub fn current_user(&self, token: &str) -> Option<UserIdentity> {
        let (payload_hex, signature) = token.split_once('.')?;
        let payload = hex::decode(payload_hex).ok()?;

        let mut mac = HmacSha256::new_from_slice(&self.secret).ok()?;
        mac.update(&payload);
        mac.verify_slice(&hex::decode(signature).ok()?).ok()?;

        let payload = String::from_utf8(payload).ok()?;
        let mut parts = payload.splitn(3, '\n');
        let user_id = parts.next()?;
        let email = parts.next()?;
        let expires_at: i64 = parts.next()?.parse().ok()?;

        if expires_at <= Utc::now().timestamp() {
            return None;
        }

        if self
            .revoked
            .read()
            .ok()?
            .contains(signature)
        {
            return None;
        }

        Some(UserIdentity {
            user_id: user_id.to_string(),
            email: email.to_string(),
        })
    }

    /// Revoke a token. Safe to call with an invalid token; revoking is
    /// idempotent.
    pub fn sign_out(&self, token: &str) {
        let signature = match token.split_once('.') {
            Some((_, signature)) => signature.to_string(),
            None => return,
        };

        if let Ok(mut revoked) = self.revoked.write() {
            revoked.insert(signature);
        }
    }

    fn sign(&self, payload: &[u8]) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AppError::internal(format!("Failed to build session MAC: {}", e)))?;
        mac.update(payload);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
