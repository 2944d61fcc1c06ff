use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    analysis::{self, Analysis},
    config, error, info,
    management::TokenManager,
    report,
    spotify::SpotifyCatalog,
    success, utils, warning,
};

pub struct AnalyzeOutput {
    pub csv_path: PathBuf,
    pub chart_path: PathBuf,
    pub top: usize,
    pub summary: bool,
}

pub async fn analyze(output: AnalyzeOutput) {
    let credentials = match config::credentials() {
        Ok(c) => c,
        Err(e) => error!("Error: {}", e),
    };

    let playlist_id = utils::playlist_id_from_url(&config::playlist_url());
    info!("Fetching playlist {}...", playlist_id);

    let token_mgr = match TokenManager::obtain(&credentials).await {
        Ok(t) => t,
        Err(e) => error!("Authentication failed: {}", e),
    };
    let catalog = SpotifyCatalog::new(
        config::spotify_apiurl(),
        token_mgr.current_token().access_token.clone(),
    );

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = analysis::run(&catalog, &playlist_id, |fetched, total| match total {
        Some(total) => pb.set_message(format!("Fetching tracks... ({}/{})", fetched, total)),
        None => pb.set_message(format!("Fetching tracks... ({})", fetched)),
    })
    .await;
    pb.finish_and_clear();

    let analysis = match result {
        Ok(a) => a,
        Err(e) => error!("Error fetching playlist: {}", e),
    };

    report_skipped(&analysis);
    info!("Fetched details for {} artists", analysis.artist_count);
    if !analysis.failed_chunks.is_empty() {
        warning!(
            "{} artist lookups failed; their genres are missing from the statistics",
            analysis.failed_chunks.len()
        );
    }

    if let Err(e) = report::write_csv(&output.csv_path, &analysis.tracks) {
        error!("Failed to write {}: {}", output.csv_path.display(), e);
    }
    success!("Data saved to {}", output.csv_path.display());

    if let Err(e) = report::render_chart(
        &output.chart_path,
        analysis.tracks.len(),
        &analysis.aggregates,
        output.top,
    ) {
        error!("Failed to write {}: {}", output.chart_path.display(), e);
    }
    success!("Plot saved to {}", output.chart_path.display());

    if output.summary {
        print_summary(&analysis, output.top);
    }
}

fn report_skipped(analysis: &Analysis) {
    for skipped in &analysis.skipped {
        warning!(
            "Skipping \"{}\": cannot read a year from release date \"{}\"",
            skipped.title,
            skipped.release_date
        );
    }
}

fn summary_line(analysis: &Analysis) -> String {
    let years = &analysis.aggregates.years;
    let mut line = format!(
        "{} of {} playlist items analysed",
        analysis.tracks.len(),
        analysis.item_count
    );
    if let (Some(first), Some(last)) = (years.keys().next(), years.keys().next_back()) {
        line.push_str(&format!(", released between {} and {}", first, last));
    }

    let skipped = analysis.missing + analysis.skipped.len();
    if skipped > 0 {
        line.push_str(&format!(" ({} skipped)", skipped));
    }
    line
}

fn print_summary(analysis: &Analysis, top: usize) {
    let aggregates = &analysis.aggregates;

    info!("{}", summary_line(analysis));

    match report::genre_table(&aggregates.genres, top) {
        Some(table) => println!("{}", table),
        None => info!("No Genre Data Available"),
    }
    match report::artist_table(&aggregates.artists, top) {
        Some(table) => println!("{}", table),
        None => info!("No Artist Data Available"),
    }
}
