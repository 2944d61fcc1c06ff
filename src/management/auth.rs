use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::{
    analysis::CatalogError,
    config::{self, Credentials},
    spotify,
    types::Token,
    warning,
};

/// Seconds before expiry at which a cached token is no longer handed out.
const EXPIRY_MARGIN: u64 = 240;

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    async fn persist_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Writes the token to `path`, warning instead of failing when the cache
    /// cannot be written.
    async fn cache_to(&self, path: &Path) -> bool {
        match self.persist_to(path).await {
            Ok(()) => true,
            Err(e) => {
                warning!("Failed to save token to cache: {}", e);
                false
            }
        }
    }

    pub async fn cache(&self) -> bool {
        self.cache_to(&Self::token_path()).await
    }

    /// Loads the cached token for `credentials`, or requests and caches a new one.
    ///
    /// A cache that cannot be read only costs a token request; one that cannot
    /// be written is reported as a warning.
    pub async fn obtain(credentials: &Credentials) -> Result<Self, CatalogError> {
        if let Ok(cached) = Self::load().await {
            if cached.is_valid_for(&credentials.client_id, Self::now()) {
                return Ok(cached);
            }
        }

        let manager = Self::new(spotify::auth::request_token(credentials).await?);
        manager.cache().await;
        Ok(manager)
    }

    fn is_valid_for(&self, client_id: &str, now: u64) -> bool {
        self.token.client_id == client_id
            && !self.token.access_token.is_empty()
            && now + EXPIRY_MARGIN < self.token.obtained_at + self.token.expires_in
    }

    fn now() -> u64 {
        Utc::now().timestamp() as u64
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(client_id: &str, obtained_at: u64, expires_in: u64) -> TokenManager {
        TokenManager::new(Token {
            access_token: "BQC-token".into(),
            token_type: "Bearer".into(),
            expires_in,
            obtained_at,
            client_id: client_id.into(),
        })
    }

    #[test]
    fn fresh_token_is_valid() {
        let mgr = manager("client", 1_000, 3_600);
        assert!(mgr.is_valid_for("client", 1_000));
        assert!(mgr.is_valid_for("client", 1_000 + 3_600 - EXPIRY_MARGIN - 1));
    }

    #[test]
    fn token_close_to_expiry_is_invalid() {
        let mgr = manager("client", 1_000, 3_600);
        assert!(!mgr.is_valid_for("client", 1_000 + 3_600 - EXPIRY_MARGIN));
        assert!(!mgr.is_valid_for("client", 10_000));
    }

    #[tokio::test]
    async fn cache_write_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let mgr = manager("client", 1_000, 3_600);
        assert!(!mgr.cache_to(&blocker.join("token.json")).await);

        let path = dir.path().join("cache/token.json");
        assert!(mgr.cache_to(&path).await);
        let saved: Token = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.client_id, "client");
    }

    #[test]
    fn token_of_another_client_is_invalid() {
        let mgr = manager("client", 1_000, 3_600);
        assert!(!mgr.is_valid_for("other-client", 1_000));
    }
}
