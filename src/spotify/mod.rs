//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the playlist
//! analysis: authentication with the client credentials grant, paging through a
//! playlist's items and looking up artists in batches. It is the only layer that
//! talks HTTP; the analysis stages see it through the [`Catalog`] trait.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (analyze, auth)
//!          ↓
//! Analysis Pipeline (fetch, extract, resolve, aggregate)
//!          ↓  Catalog trait
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     ├── Playlist Items (offset paging via `next`)
//!     └── Artists (batches of up to 50 ids)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Exchanges the client id and secret for an app access token. The
//! token is not bound to a user, so only public catalog data is reachable:
//! public playlists and artist metadata.
//!
//! ### Playlist Module
//!
//! [`playlist`] - Requests the first page of a playlist's items and follows the
//! absolute `next` URL the API returns for each following page.
//!
//! ### Artist Module
//!
//! [`artists`] - Requests several artists at once. The response is aligned with
//! the requested ids and holds `null` for ids the catalog does not know.
//!
//! ## Error Handling
//!
//! Non-success responses are turned into [`CatalogError::Status`] carrying the
//! message from Spotify's error envelope when one is present. Transport and
//! decoding failures surface as [`CatalogError::Request`]. Nothing is retried
//! here; whether a failure is fatal is decided by the caller.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client credentials grant
//! - `GET /playlists/{playlist_id}/tracks` - Playlist items with paging
//! - `GET /artists?ids=...` - Several artists with genres

pub mod artists;
pub mod auth;
pub mod playlist;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    analysis::{Catalog, CatalogError},
    types::{ApiErrorResponse, PlaylistItemsPage, SeveralArtistsResponse},
};

/// Catalog backed by the Spotify Web API.
pub struct SpotifyCatalog {
    client: Client,
    api_url: String,
    token: String,
}

impl SpotifyCatalog {
    pub fn new(api_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}

impl Catalog for SpotifyCatalog {
    async fn playlist_items(&self, playlist_id: &str) -> Result<PlaylistItemsPage, CatalogError> {
        playlist::get_playlist_items(&self.client, &self.api_url, &self.token, playlist_id).await
    }

    async fn next_page(&self, page: &PlaylistItemsPage) -> Result<PlaylistItemsPage, CatalogError> {
        match &page.next {
            Some(next) => playlist::get_next_page(&self.client, &self.token, next).await,
            None => Ok(PlaylistItemsPage::default()),
        }
    }

    async fn artists(&self, ids: &[String]) -> Result<SeveralArtistsResponse, CatalogError> {
        artists::get_several_artists(&self.client, &self.api_url, &self.token, ids).await
    }
}

/// Decodes a successful response body, or turns an error response into
/// [`CatalogError::Status`].
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CatalogError::Status(status.as_u16(), error_message(&body, status.canonical_reason())))
}

fn error_message(body: &str, reason: Option<&str>) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => reason.unwrap_or("unknown error").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_the_api_envelope() {
        let body = r#"{"error": {"status": 404, "message": "Resource not found"}}"#;
        assert_eq!(error_message(body, Some("Not Found")), "Resource not found");
    }

    #[test]
    fn error_message_falls_back_to_body_then_reason() {
        assert_eq!(error_message("upstream timeout", Some("Bad Gateway")), "upstream timeout");
        assert_eq!(error_message("", Some("Bad Gateway")), "Bad Gateway");
        assert_eq!(error_message("  ", None), "unknown error");
    }
}
