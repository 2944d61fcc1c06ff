//! Output of an analysis run: the CSV export, the chart image and the
//! console summary tables.

mod chart;
mod export;
mod summary;

pub use chart::{CHART_SIZE, draw_chart, render_chart};
pub use export::{write_csv, write_csv_to};
pub use summary::{artist_table, genre_table};

/// Default file name of the CSV export.
pub const DEFAULT_CSV_PATH: &str = "playlist_tracks.csv";

/// Default file name of the chart image.
pub const DEFAULT_CHART_PATH: &str = "playlist_analysis.svg";

/// Number of entries in the genre and artist rankings.
pub const DEFAULT_TOP: usize = 15;
