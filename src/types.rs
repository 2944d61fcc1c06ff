use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
    /// Client the token was issued to; a cached token for another client is ignored.
    #[serde(default)]
    pub client_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistItemsPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

/// One playlist entry. `track` is null for removed or unavailable tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub added_at: Option<String>,
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub album: Option<Album>,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
}

/// Artist as credited on a track. Local files carry artists without an id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Response of `GET /artists?ids=...`; entries are aligned with the requested ids
/// and are null for ids the catalog does not know.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeveralArtistsResponse {
    #[serde(default)]
    pub artists: Vec<Option<Artist>>,
}

/// Flat per-track record produced by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub year: i32,
    pub title: String,
    pub authors: String,
    pub album: String,
    pub link: String,
    pub artist_names: Vec<String>,
    /// Only the credited artists that have an id; may be shorter than `artist_names`.
    pub artist_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub year: i32,
    #[serde(rename = "Song Name")]
    pub title: &'a str,
    #[serde(rename = "Authors")]
    pub authors: &'a str,
    #[serde(rename = "Album")]
    pub album: &'a str,
    #[serde(rename = "Link")]
    pub link: &'a str,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub rank: usize,
    pub genre: String,
    pub count: usize,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub rank: usize,
    pub artist: String,
    pub count: usize,
}

/// Error envelope returned by the Web API, e.g. `{"error": {"status": 404, "message": "Resource not found"}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}
