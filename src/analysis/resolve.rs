use std::collections::HashMap;

use crate::warning;

use super::Catalog;

/// Maximum number of ids the several-artists endpoint accepts per call.
pub const ARTIST_BATCH_SIZE: usize = 50;

#[derive(Debug, Default)]
pub struct GenreResolution {
    /// Artist id to genres. Ids that could not be resolved are absent.
    pub genres: HashMap<String, Vec<String>>,
    /// Indices of the chunks whose lookup failed.
    pub failed_chunks: Vec<usize>,
}

/// Splits ids into chunks of at most [`ARTIST_BATCH_SIZE`].
pub fn chunk_ids(ids: &[String]) -> Vec<&[String]> {
    ids.chunks(ARTIST_BATCH_SIZE).collect()
}

/// Looks up the genres of every artist id, one chunk at a time.
///
/// A failing chunk is reported and skipped; the ids in it stay unresolved and
/// count as having no genres. Null entries in a response are ignored.
pub async fn resolve_genres<C: Catalog>(catalog: &C, ids: &[String]) -> GenreResolution {
    let mut resolution = GenreResolution::default();

    for (index, chunk) in chunk_ids(ids).into_iter().enumerate() {
        match catalog.artists(chunk).await {
            Ok(response) => {
                for artist in response.artists.into_iter().flatten() {
                    resolution.genres.insert(artist.id, artist.genres);
                }
            }
            Err(e) => {
                warning!("Error fetching artists chunk: {}", e);
                resolution.failed_chunks.push(index);
            }
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        analysis::CatalogError,
        types::{Artist, PlaylistItemsPage, SeveralArtistsResponse},
    };

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("artist{}", i)).collect()
    }

    struct ArtistCatalog {
        failing_chunk: Option<usize>,
        unknown: Vec<String>,
        calls: RefCell<usize>,
    }

    impl Catalog for ArtistCatalog {
        async fn playlist_items(&self, _playlist_id: &str) -> Result<PlaylistItemsPage, CatalogError> {
            Ok(PlaylistItemsPage::default())
        }

        async fn next_page(&self, _page: &PlaylistItemsPage) -> Result<PlaylistItemsPage, CatalogError> {
            Ok(PlaylistItemsPage::default())
        }

        async fn artists(&self, ids: &[String]) -> Result<SeveralArtistsResponse, CatalogError> {
            assert!(ids.len() <= ARTIST_BATCH_SIZE);
            let call = *self.calls.borrow();
            *self.calls.borrow_mut() += 1;
            if self.failing_chunk == Some(call) {
                return Err(CatalogError::Status(500, "Server error".into()));
            }
            Ok(SeveralArtistsResponse {
                artists: ids
                    .iter()
                    .map(|id| {
                        (!self.unknown.contains(id)).then(|| Artist {
                            id: id.clone(),
                            name: id.to_uppercase(),
                            genres: vec![format!("{}-genre", id)],
                        })
                    })
                    .collect(),
            })
        }
    }

    #[test]
    fn chunks_reproduce_the_id_list() {
        for n in [0, 1, 49, 50, 51, 100, 101] {
            let all = ids(n);
            let chunks = chunk_ids(&all);

            assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= ARTIST_BATCH_SIZE));
            assert_eq!(chunks.len(), n.div_ceil(ARTIST_BATCH_SIZE));
            assert_eq!(chunks.concat(), all, "length {}", n);
        }
    }

    #[tokio::test]
    async fn resolves_every_chunk() {
        let catalog = ArtistCatalog {
            failing_chunk: None,
            unknown: Vec::new(),
            calls: RefCell::new(0),
        };
        let all = ids(120);

        let resolution = resolve_genres(&catalog, &all).await;

        assert_eq!(*catalog.calls.borrow(), 3);
        assert_eq!(resolution.genres.len(), 120);
        assert_eq!(resolution.genres["artist7"], vec!["artist7-genre"]);
        assert!(resolution.failed_chunks.is_empty());
    }

    #[tokio::test]
    async fn failed_chunk_does_not_affect_the_others() {
        let catalog = ArtistCatalog {
            failing_chunk: Some(1),
            unknown: Vec::new(),
            calls: RefCell::new(0),
        };
        let all = ids(120);

        let resolution = resolve_genres(&catalog, &all).await;

        assert_eq!(*catalog.calls.borrow(), 3);
        assert_eq!(resolution.failed_chunks, vec![1]);
        assert_eq!(resolution.genres.len(), 70);
        assert!(resolution.genres.contains_key("artist0"));
        assert!(resolution.genres.contains_key("artist49"));
        assert!(!resolution.genres.contains_key("artist50"));
        assert!(!resolution.genres.contains_key("artist99"));
        assert!(resolution.genres.contains_key("artist100"));
    }

    #[tokio::test]
    async fn null_entries_are_skipped() {
        let catalog = ArtistCatalog {
            failing_chunk: None,
            unknown: vec!["artist1".into()],
            calls: RefCell::new(0),
        };
        let all = ids(3);

        let resolution = resolve_genres(&catalog, &all).await;

        assert_eq!(resolution.genres.len(), 2);
        assert!(!resolution.genres.contains_key("artist1"));
    }

    #[tokio::test]
    async fn no_ids_means_no_calls() {
        let catalog = ArtistCatalog {
            failing_chunk: None,
            unknown: Vec::new(),
            calls: RefCell::new(0),
        };

        let resolution = resolve_genres(&catalog, &[]).await;

        assert_eq!(*catalog.calls.borrow(), 0);
        assert!(resolution.genres.is_empty());
    }
}
