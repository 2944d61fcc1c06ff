use tabled::Table;

use crate::{
    analysis::FrequencyTable,
    types::{ArtistTableRow, GenreTableRow},
};

pub fn genre_table(genres: &FrequencyTable, top: usize) -> Option<Table> {
    let rows: Vec<GenreTableRow> = genres
        .most_common(top)
        .into_iter()
        .enumerate()
        .map(|(i, (genre, count))| GenreTableRow {
            rank: i + 1,
            genre,
            count,
        })
        .collect();

    (!rows.is_empty()).then(|| Table::new(rows))
}

pub fn artist_table(artists: &FrequencyTable, top: usize) -> Option<Table> {
    let rows: Vec<ArtistTableRow> = artists
        .most_common(top)
        .into_iter()
        .enumerate()
        .map(|(i, (artist, count))| ArtistTableRow {
            rank: i + 1,
            artist,
            count,
        })
        .collect();

    (!rows.is_empty()).then(|| Table::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_rank_from_one() {
        let mut genres = FrequencyTable::new();
        for g in ["indie", "rock", "rock"] {
            genres.add(g);
        }

        let rendered = genre_table(&genres, 15).unwrap().to_string();
        let rock_line = rendered.lines().find(|l| l.contains("rock")).unwrap();
        let indie_line = rendered.lines().find(|l| l.contains("indie")).unwrap();

        assert!(rendered.contains("genre"));
        assert!(rock_line.contains('1') && rock_line.contains('2'));
        assert!(indie_line.contains('2') && indie_line.contains('1'));
    }

    #[test]
    fn empty_tables_are_skipped() {
        assert!(genre_table(&FrequencyTable::new(), 15).is_none());
        assert!(artist_table(&FrequencyTable::new(), 15).is_none());
    }
}
