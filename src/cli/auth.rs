use chrono::{DateTime, Utc};

use crate::{config, error, management::TokenManager, spotify, success};

pub async fn auth() {
    let credentials = match config::credentials() {
        Ok(c) => c,
        Err(e) => error!("Error: {}", e),
    };

    let token = match spotify::auth::request_token(&credentials).await {
        Ok(t) => t,
        Err(e) => error!("Authentication failed: {}", e),
    };

    let token_mgr = TokenManager::new(token);
    token_mgr.cache().await;

    let token = token_mgr.current_token();
    let expires_at = DateTime::<Utc>::from_timestamp((token.obtained_at + token.expires_in) as i64, 0)
        .map(|d| d.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("in {} seconds", token.expires_in));
    success!("Authentication successful! Token valid until {}", expires_at);
}
