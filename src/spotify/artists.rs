use reqwest::Client;

use crate::{analysis::CatalogError, types::SeveralArtistsResponse};

/// Retrieves details for several artists in one request.
///
/// Fetches up to 50 artists by id. The returned list is aligned with `ids`; an
/// entry is `None` when the catalog has no artist for that id.
///
/// # Arguments
///
/// * `client` - HTTP client shared across requests of one run
/// * `api_url` - Web API base URL without trailing slash
/// * `token` - Valid app access token
/// * `ids` - Between 1 and 50 artist ids
///
/// # Example
///
/// ```
/// let response = get_several_artists(&client, api_url, &token, &ids).await?;
/// for artist in response.artists.into_iter().flatten() {
///     println!("{}: {}", artist.name, artist.genres.join(", "));
/// }
/// ```
pub async fn get_several_artists(
    client: &Client,
    api_url: &str,
    token: &str,
    ids: &[String],
) -> Result<SeveralArtistsResponse, CatalogError> {
    let api_url = format!(
        "{uri}/artists?ids={ids}",
        uri = api_url,
        ids = ids.join(",")
    );

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    super::read_json::<SeveralArtistsResponse>(response).await
}

#[cfg(test)]
mod tests {
    use crate::types::SeveralArtistsResponse;

    #[test]
    fn decodes_null_entries() {
        let body = r#"{"artists": [
            {"id": "a1", "name": "A", "genres": ["pop", "dance pop"], "popularity": 70},
            null,
            {"id": "a3", "name": "C", "genres": []}
        ]}"#;

        let response: SeveralArtistsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.artists.len(), 3);
        assert!(response.artists[1].is_none());
        let first = response.artists[0].as_ref().unwrap();
        assert_eq!(first.genres, vec!["pop", "dance pop"]);
        assert!(response.artists[2].as_ref().unwrap().genres.is_empty());
    }
}
