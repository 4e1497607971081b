//! Zephyr Squad Cloud request signing.
//!
//! Every Zephyr request carries an HS256 JWT whose `qsh` claim is the hex
//! SHA-256 of the canonical request (`METHOD&path&query`), which binds the
//! token to exactly one request.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

/// Lifetime of a request token.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Claims of a Zephyr request token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestClaims {
    /// Atlassian account id of the caller.
    pub sub: String,
    /// Zephyr access key.
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    /// Query string hash.
    pub qsh: String,
}

/// Signs Zephyr requests with the configured keys.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    account_id: String,
    access_key: String,
    secret_key: String,
}

impl RequestSigner {
    pub fn new(account_id: String, access_key: String, secret_key: String) -> Self {
        Self {
            account_id,
            access_key,
            secret_key,
        }
    }

    /// Returns the access key sent alongside the token.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Builds a token for `canonical_request`, issued now.
    pub fn sign(&self, canonical_request: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        self.sign_at(canonical_request, now)
    }

    /// Builds a token for `canonical_request` issued at `iat` (unix seconds).
    pub fn sign_at(
        &self,
        canonical_request: &str,
        iat: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = RequestClaims {
            sub: self.account_id.clone(),
            iss: self.access_key.clone(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
            qsh: query_string_hash(canonical_request),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret_key.as_bytes()),
        )
    }
}

/// Canonical request for fetching the steps of one test.
#[must_use]
pub fn test_steps_canonical_request(issue_id: &str, project_id: &str) -> String {
    format!("GET&/public/rest/api/1.0/teststep/{issue_id}&projectId={project_id}")
}

/// Hex encoded SHA-256 of a canonical request.
#[must_use]
pub fn query_string_hash(canonical_request: &str) -> String {
    hex::encode(Sha256::digest(canonical_request.as_bytes()))
}
