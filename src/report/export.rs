use std::{io::Write, path::Path};

use crate::{
    Res,
    types::{ExportRow, TrackRecord},
};

/// Writes the export table to `path`.
///
/// Columns are `year, Song Name, Authors, Album, Link` with a header row and
/// no index column. Rows are written in the order given; callers pass tracks
/// already sorted by year.
pub fn write_csv(path: &Path, tracks: &[TrackRecord]) -> Res<()> {
    let writer = csv::Writer::from_path(path)?;
    write_rows(writer, tracks)
}

/// Writes the export table to any writer.
pub fn write_csv_to<W: Write>(out: W, tracks: &[TrackRecord]) -> Res<()> {
    write_rows(csv::Writer::from_writer(out), tracks)
}

fn write_rows<W: Write>(mut writer: csv::Writer<W>, tracks: &[TrackRecord]) -> Res<()> {
    if tracks.is_empty() {
        writer.write_record(["year", "Song Name", "Authors", "Album", "Link"])?;
    }
    for track in tracks {
        writer.serialize(ExportRow {
            year: track.year,
            title: &track.title,
            authors: &track.authors,
            album: &track.album,
            link: &track.link,
        })?;
    }
    writer.flush()?;
    Ok(())
}
