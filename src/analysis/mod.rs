//! # Playlist Analysis Pipeline
//!
//! The analysis runs as four forward-only stages. Each stage takes the output of
//! the previous one by value or reference and returns a new value; nothing is
//! shared between stages besides what is passed explicitly.
//!
//! ```text
//! fetch     playlist id          -> Vec<PlaylistItem>
//! extract   &[PlaylistItem]      -> Extraction { tracks, artist_ids, .. }
//! resolve   &[artist id]         -> GenreResolution { genres, failed_chunks }
//! aggregate &[TrackRecord] + map -> Aggregates
//! ```
//!
//! Network access goes through the [`Catalog`] trait so the stages can be
//! driven by the Spotify client in production and by in-memory data in tests.
//! Requests are issued one at a time; pages and artist chunks never overlap.

mod aggregate;
mod extract;
mod fetch;
mod resolve;

use crate::types::{PlaylistItemsPage, SeveralArtistsResponse, TrackRecord};

pub use aggregate::{Aggregates, FrequencyTable, aggregate, sort_by_year};
pub use extract::{Extraction, SkippedTrack, extract_tracks};
pub use fetch::fetch_playlist_items;
pub use resolve::{ARTIST_BATCH_SIZE, GenreResolution, chunk_ids, resolve_genres};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("http status {0}: {1}")]
    Status(u16, String),
    #[error("token request failed: {0}")]
    Token(String),
}

/// The music catalog calls the pipeline depends on.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// First page of a playlist's items.
    async fn playlist_items(&self, playlist_id: &str) -> Result<PlaylistItemsPage, CatalogError>;

    /// Page following `page`. Only called when `page.next` is set.
    async fn next_page(&self, page: &PlaylistItemsPage) -> Result<PlaylistItemsPage, CatalogError>;

    /// Artist details for at most [`ARTIST_BATCH_SIZE`] ids.
    async fn artists(&self, ids: &[String]) -> Result<SeveralArtistsResponse, CatalogError>;
}

/// Everything the reporter needs from one run of the pipeline.
#[derive(Debug)]
pub struct Analysis {
    /// Extracted records, sorted by ascending year with playlist order kept for ties.
    pub tracks: Vec<TrackRecord>,
    pub aggregates: Aggregates,
    pub item_count: usize,
    /// Items without a track, album or release date.
    pub missing: usize,
    pub skipped: Vec<SkippedTrack>,
    pub artist_count: usize,
    pub failed_chunks: Vec<usize>,
}

/// Runs fetch, extract, resolve and aggregate against `catalog`.
///
/// Only a failure while fetching the playlist is returned as an error; failed
/// artist chunks are recorded in [`Analysis::failed_chunks`] and the affected
/// artists simply contribute no genres.
pub async fn run<C, P>(
    catalog: &C,
    playlist_id: &str,
    on_page: P,
) -> Result<Analysis, CatalogError>
where
    C: Catalog,
    P: FnMut(usize, Option<u64>),
{
    let items = fetch_playlist_items(catalog, playlist_id, on_page).await?;
    let extraction = extract_tracks(&items);
    let resolution = resolve_genres(catalog, &extraction.artist_ids).await;
    let aggregates = aggregate(&extraction.tracks, &resolution.genres);

    let mut tracks = extraction.tracks;
    sort_by_year(&mut tracks);

    Ok(Analysis {
        tracks,
        aggregates,
        item_count: items.len(),
        missing: extraction.missing,
        skipped: extraction.skipped,
        artist_count: extraction.artist_ids.len(),
        failed_chunks: resolution.failed_chunks,
    })
}
