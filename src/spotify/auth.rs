use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{
    analysis::CatalogError,
    config::{self, Credentials},
    types::{Token, TokenResponse},
};

/// Requests an app access token using the OAuth 2.0 client credentials grant.
///
/// Sends the client id and secret as HTTP basic auth to the token endpoint with
/// `grant_type=client_credentials`. The resulting token has no user context and
/// no refresh token; when it expires a new one is requested the same way.
///
/// # Arguments
///
/// * `credentials` - Client id and secret from the developer dashboard
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token with its lifetime and the time it was obtained
/// - `Err(CatalogError)` - Network error, rejected credentials or malformed response
///
/// # Error Conditions
///
/// Spotify answers unknown or revoked credentials with `400 invalid_client`;
/// the `error_description` from the response is reported in
/// [`CatalogError::Token`].
///
/// # Example
///
/// ```
/// let token = request_token(&config::credentials()?).await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token(credentials: &Credentials) -> Result<Token, CatalogError> {
    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let json: Value = res.json().await.unwrap_or(Value::Null);
        let reason = json["error_description"]
            .as_str()
            .or_else(|| json["error"].as_str())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error"));
        return Err(CatalogError::Token(format!("{} ({})", reason, status.as_u16())));
    }

    let json: TokenResponse = res.json().await?;

    Ok(Token {
        access_token: json.access_token,
        token_type: json.token_type,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
        client_id: credentials.client_id.clone(),
    })
}
