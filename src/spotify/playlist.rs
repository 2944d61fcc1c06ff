use reqwest::Client;

use crate::{analysis::CatalogError, types::PlaylistItemsPage};

/// Page size for playlist items; the endpoint accepts at most 50 per request.
pub const PAGE_LIMIT: u32 = 50;

/// Retrieves the first page of a playlist's items.
///
/// # Arguments
///
/// * `client` - HTTP client shared across requests of one run
/// * `api_url` - Web API base URL without trailing slash
/// * `token` - Valid app access token
/// * `playlist_id` - Id of a public playlist
///
/// # Returns
///
/// The page of items together with the absolute `next` URL (if more pages
/// exist) and the total number of items in the playlist.
///
/// # Errors
///
/// A 401 means the token was rejected, a 404 that the playlist does not exist
/// or is not public. Both surface as [`CatalogError::Status`].
pub async fn get_playlist_items(
    client: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
) -> Result<PlaylistItemsPage, CatalogError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit={limit}&offset=0",
        uri = api_url,
        id = playlist_id,
        limit = PAGE_LIMIT
    );

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    super::read_json::<PlaylistItemsPage>(response).await
}

/// Retrieves the page behind a `next` URL returned by a previous page.
pub async fn get_next_page(
    client: &Client,
    token: &str,
    next: &str,
) -> Result<PlaylistItemsPage, CatalogError> {
    let response = client.get(next).bearer_auth(token).send().await?;
    super::read_json::<PlaylistItemsPage>(response).await
}

#[cfg(test)]
mod tests {
    use crate::types::PlaylistItemsPage;

    #[test]
    fn decodes_items_with_missing_tracks_and_local_files() {
        let body = r#"{
            "href": "https://api.spotify.com/v1/playlists/pl/tracks?offset=0&limit=50",
            "items": [
                {
                    "added_at": "2024-01-01T00:00:00Z",
                    "track": {
                        "id": "t1",
                        "name": "Song",
                        "album": {"name": "Record", "release_date": "1999-03-21", "release_date_precision": "day"},
                        "artists": [{"id": "a1", "name": "A"}],
                        "external_urls": {"spotify": "https://open.spotify.com/track/t1"}
                    }
                },
                {"added_at": "2024-01-02T00:00:00Z", "track": null},
                {
                    "added_at": "2024-01-03T00:00:00Z",
                    "track": {
                        "id": null,
                        "name": "Local",
                        "album": {"name": "", "release_date": null},
                        "artists": [{"id": null, "name": "Someone"}],
                        "external_urls": {}
                    }
                }
            ],
            "limit": 50,
            "next": "https://api.spotify.com/v1/playlists/pl/tracks?offset=50&limit=50",
            "offset": 0,
            "total": 120
        }"#;

        let page: PlaylistItemsPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, Some(120));
        assert!(page.next.is_some());
        assert!(page.items[1].track.is_none());

        let local = page.items[2].track.as_ref().unwrap();
        assert!(local.artists[0].id.is_none());
        assert!(local.external_urls.spotify.is_none());
        assert!(local.album.as_ref().unwrap().release_date.is_none());
    }

    #[test]
    fn last_page_has_no_next() {
        let page: PlaylistItemsPage =
            serde_json::from_str(r#"{"items": [], "next": null, "total": 0}"#).unwrap();
        assert!(page.next.is_none());
        assert!(page.items.is_empty());
    }
}
