// src/sheets/auth.rs
//
// Service-account access tokens via the OAuth2 JWT-bearer grant.

use crate::sheets::SheetsError;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

const ASSERTION_TTL_SECS: i64 = 3600;
/// Refresh this long before the token actually expires.
const EXPIRY_SLACK_SECS: i64 = 60;

/// Credentials of the service account that owns the sheet.
#[derive(Clone)]
pub struct ServiceAccount {
    client_email: String,
    key: EncodingKey,
}

impl std::fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("client_email", &self.client_email)
            .field("key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

impl ServiceAccount {
    pub fn new(client_email: String, private_key_pem: &str) -> Result<Self, SheetsError> {
        let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| SheetsError::Credentials(e.to_string()))?;
        Ok(Self { client_email, key })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// Signed RS256 assertion for the token endpoint.
    pub fn assertion(&self, audience: &str, now: i64) -> Result<String, SheetsError> {
        let claims = Claims {
            iss: &self.client_email,
            scope: SHEETS_SCOPE,
            aud: audience,
            iat: now,
            exp: now + ASSERTION_TTL_SECS,
        };
        encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .map_err(|e| SheetsError::Credentials(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_TTL_SECS
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: i64,
}

/// Hands out bearer tokens, exchanging a fresh assertion only when the
/// cached token is about to expire.
pub struct TokenSource {
    account: ServiceAccount,
    client: Client,
    token_url: String,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenSource {
    pub fn with_token_url(account: ServiceAccount, client: Client, token_url: &str) -> Self {
        Self {
            account,
            client,
            token_url: token_url.to_string(),
            cached: Mutex::new(None),
        }
    }

    pub fn access_token(&self) -> Result<String, SheetsError> {
        let now = Utc::now().timestamp();
        // Held across the exchange so concurrent workers share one refresh.
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(token) = cached.as_ref() {
            if token.expires_at - EXPIRY_SLACK_SECS > now {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.exchange(now)?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    fn exchange(&self, now: i64) -> Result<CachedToken, SheetsError> {
        let assertion = self.account.assertion(&self.token_url, now)?;
        tracing::debug!(account = self.account.client_email(), "exchanging service account assertion");

        let resp = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .map_err(SheetsError::from_transport)?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SheetsError::Token(format!("{status}: {body}")));
        }

        let token: TokenResponse = resp
            .json()
            .map_err(|e| SheetsError::Token(format!("unreadable token response: {e}")))?;

        Ok(CachedToken {
            value: token.access_token,
            expires_at: now + token.expires_in,
        })
    }
}
