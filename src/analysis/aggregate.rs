use std::collections::{BTreeMap, HashMap};

use crate::{types::TrackRecord, utils};

/// Counter that remembers the order in which keys were first seen.
///
/// Rankings sort by count only, so keys with equal counts keep their
/// first-encountered order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.order.push(key.to_string());
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The `n` most frequent keys, descending by count.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .order
            .iter()
            .map(|key| (key.clone(), self.counts[key]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    pub genres: FrequencyTable,
    pub artists: FrequencyTable,
    pub years: BTreeMap<i32, usize>,
    pub decades: BTreeMap<i32, usize>,
}

impl Aggregates {
    /// Every year from the earliest to the latest release with its count,
    /// including years without tracks.
    pub fn year_range(&self) -> Vec<(i32, usize)> {
        let (Some(first), Some(last)) = (self.years.keys().next(), self.years.keys().next_back())
        else {
            return Vec::new();
        };
        (*first..=*last)
            .map(|year| (year, self.years.get(&year).copied().unwrap_or(0)))
            .collect()
    }
}

/// Builds the frequency tables for a set of tracks.
///
/// Every credited artist of every track counts once, and every genre of every
/// artist id on a track counts once: three artists tagged "rock" on one track
/// add three to "rock". Ids missing from `genres` contribute nothing.
pub fn aggregate(tracks: &[TrackRecord], genres: &HashMap<String, Vec<String>>) -> Aggregates {
    let mut aggregates = Aggregates::default();

    for track in tracks {
        for name in &track.artist_names {
            aggregates.artists.add(name);
        }
        for id in &track.artist_ids {
            for genre in genres.get(id).map(Vec::as_slice).unwrap_or_default() {
                aggregates.genres.add(genre);
            }
        }
        *aggregates.years.entry(track.year).or_default() += 1;
        *aggregates
            .decades
            .entry(utils::decade_of(track.year))
            .or_default() += 1;
    }

    aggregates
}

/// Sorts tracks by ascending year, keeping playlist order for equal years.
pub fn sort_by_year(tracks: &mut [TrackRecord]) {
    tracks.sort_by_key(|t| t.year);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, year: i32, artists: &[(&str, Option<&str>)]) -> TrackRecord {
        TrackRecord {
            year,
            title: title.to_string(),
            authors: artists.iter().map(|a| a.0).collect::<Vec<_>>().join(", "),
            album: String::new(),
            link: String::new(),
            artist_names: artists.iter().map(|a| a.0.to_string()).collect(),
            artist_ids: artists.iter().filter_map(|a| a.1.map(str::to_string)).collect(),
        }
    }

    fn genre_map(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(id, g)| (id.to_string(), g.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn genres_are_weighted_per_artist_appearance() {
        let tracks = vec![record(
            "Jam",
            1975,
            &[("A", Some("a")), ("B", Some("b")), ("C", Some("c"))],
        )];
        let genres = genre_map(&[("a", &["rock"]), ("b", &["rock"]), ("c", &["rock", "blues"])]);

        let agg = aggregate(&tracks, &genres);

        assert_eq!(agg.genres.get("rock"), 3);
        assert_eq!(agg.genres.get("blues"), 1);
        assert_eq!(agg.artists.total(), 3);
    }

    #[test]
    fn unresolved_ids_contribute_no_genres() {
        let tracks = vec![record("Song", 2001, &[("A", Some("a")), ("X", Some("unknown"))])];
        let genres = genre_map(&[("a", &["pop"])]);

        let agg = aggregate(&tracks, &genres);

        assert_eq!(agg.genres.most_common(15), vec![("pop".to_string(), 1)]);
        assert_eq!(agg.artists.get("X"), 1);
    }

    #[test]
    fn every_track_lands_in_one_decade() {
        let tracks = vec![
            record("a", 1989, &[]),
            record("b", 1990, &[]),
            record("c", 1999, &[]),
            record("d", 2000, &[]),
        ];

        let agg = aggregate(&tracks, &HashMap::new());

        assert_eq!(agg.decades.values().sum::<usize>(), tracks.len());
        assert_eq!(
            agg.decades.into_iter().collect::<Vec<_>>(),
            vec![(1980, 1), (1990, 2), (2000, 1)]
        );
    }

    #[test]
    fn year_range_fills_gaps() {
        let tracks = vec![record("a", 2001, &[]), record("b", 2004, &[]), record("c", 2004, &[])];

        let agg = aggregate(&tracks, &HashMap::new());

        assert_eq!(agg.year_range(), vec![(2001, 1), (2002, 0), (2003, 0), (2004, 2)]);
        assert!(Aggregates::default().year_range().is_empty());
    }

    #[test]
    fn most_common_ties_keep_first_seen_order() {
        let mut table = FrequencyTable::new();
        for key in ["b", "a", "c", "a", "b", "d"] {
            table.add(key);
        }

        assert_eq!(
            table.most_common(3),
            vec![("b".to_string(), 2), ("a".to_string(), 2), ("c".to_string(), 1)]
        );
        assert_eq!(table.len(), 4);
        assert!(FrequencyTable::new().most_common(15).is_empty());
    }

    #[test]
    fn sort_is_stable_for_equal_years() {
        let mut tracks = vec![
            record("late", 2010, &[]),
            record("first-2000", 2000, &[]),
            record("early", 1990, &[]),
            record("second-2000", 2000, &[]),
        ];

        sort_by_year(&mut tracks);

        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["early", "first-2000", "second-2000", "late"]);
    }
}
