use std::collections::HashSet;

use crate::{
    types::{PlaylistItem, TrackRecord},
    utils,
};

/// A track dropped because its release date cannot be turned into a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTrack {
    pub title: String,
    pub release_date: String,
}

#[derive(Debug, Default)]
pub struct Extraction {
    pub tracks: Vec<TrackRecord>,
    /// Distinct artist ids in the order they were first seen.
    pub artist_ids: Vec<String>,
    /// Items without a track, album or release date. They are dropped silently.
    pub missing: usize,
    pub skipped: Vec<SkippedTrack>,
}

/// Turns raw playlist items into track records and collects the distinct artist ids.
///
/// Items with no track payload, or whose track lacks an album or a release date,
/// cannot be placed on the timeline and are counted in [`Extraction::missing`].
/// A release date whose first four characters are not a year is reported in
/// [`Extraction::skipped`] instead of aborting the run.
pub fn extract_tracks(items: &[PlaylistItem]) -> Extraction {
    let mut extraction = Extraction::default();
    let mut seen: HashSet<String> = HashSet::new();

    for item in items {
        let Some(track) = &item.track else {
            extraction.missing += 1;
            continue;
        };
        let Some(album) = &track.album else {
            extraction.missing += 1;
            continue;
        };
        let Some(release_date) = album.release_date.as_deref().filter(|d| !d.is_empty()) else {
            extraction.missing += 1;
            continue;
        };

        let Some(year) = utils::parse_release_year(release_date) else {
            extraction.skipped.push(SkippedTrack {
                title: track.name.clone(),
                release_date: release_date.to_string(),
            });
            continue;
        };

        let artist_names: Vec<String> = track.artists.iter().map(|a| a.name.clone()).collect();

        let mut artist_ids = Vec::new();
        for id in track
            .artists
            .iter()
            .filter_map(|a| a.id.as_deref())
            .filter(|id| !id.is_empty())
        {
            artist_ids.push(id.to_string());
            if seen.insert(id.to_string()) {
                extraction.artist_ids.push(id.to_string());
            }
        }

        extraction.tracks.push(TrackRecord {
            year,
            title: track.name.clone(),
            authors: artist_names.join(", "),
            album: album.name.clone(),
            link: track.external_urls.spotify.clone().unwrap_or_default(),
            artist_names,
            artist_ids,
        });
    }

    extraction
}
