use chrono::Utc;
use reqwest::Client;

use crate::{config, types::Token};

/// Refresh the token this many seconds before it actually expires.
const EXPIRY_BUFFER_SECS: u64 = 240;

/// Caches a client-credentials access token across requests.
///
/// The manager is the only cross-request state of the service. It is
/// shared behind `Arc<Mutex<_>>` and handed to handlers through an axum
/// `Extension`, so tests can seed it with a known token instead.
pub struct TokenManager {
    token: Option<Token>,
}

impl TokenManager {
    pub fn new() -> Self {
        TokenManager { token: None }
    }

    /// Creates a manager pre-seeded with a token, skipping the initial
    /// token request as long as the token is not expired.
    pub fn with_token(token: Token) -> Self {
        TokenManager { token: Some(token) }
    }

    /// Returns a valid access token, requesting a fresh one when the
    /// cached token is missing or about to expire.
    pub async fn get_valid_token(&mut self) -> Result<String, String> {
        match &self.token {
            Some(token) if !Self::is_expired(token) => Ok(token.access_token.clone()),
            _ => {
                let token = Self::request_token().await?;
                let access_token = token.access_token.clone();
                self.token = Some(token);
                Ok(access_token)
            }
        }
    }

    fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= token.obtained_at + token.expires_in.saturating_sub(EXPIRY_BUFFER_SECS)
    }

    async fn request_token() -> Result<Token, String> {
        let client = Client::new();
        let res = client
            .post(&config::spotify_apitoken_url())
            .basic_auth(config::spotify_client_id(), Some(config::spotify_client_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            return Err(format!("token endpoint returned {}", res.status()));
        }

        let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

        let Some(access_token) = json["access_token"].as_str() else {
            return Err("token response missing access_token".to_string());
        };

        Ok(Token {
            access_token: access_token.to_string(),
            token_type: json["token_type"].as_str().unwrap_or("Bearer").to_string(),
            expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}

impl Default for TokenManager {
    fn default() -> Self {
        Self::new()
    }
}
