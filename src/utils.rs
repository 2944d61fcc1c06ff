/// Extracts the playlist id from a playlist link.
///
/// Takes the last path segment and strips any query string, so
/// `https://open.spotify.com/playlist/56afGpmssmu4sR9Pz92jfE?si=abc` yields
/// `56afGpmssmu4sR9Pz92jfE`. Bare ids and `spotify:playlist:<id>` URIs are
/// accepted as well.
pub fn playlist_id_from_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let segment = segment.split('?').next().unwrap_or(segment);
    let segment = segment.split('#').next().unwrap_or(segment);

    match segment.strip_prefix("spotify:playlist:") {
        Some(id) => id.to_string(),
        None => segment.to_string(),
    }
}

/// Parses the release year from the first four characters of a release date.
///
/// Release dates come as `YYYY`, `YYYY-MM` or `YYYY-MM-DD` depending on the
/// precision the catalog knows, all of which yield the same year. Returns `None`
/// when the string is shorter than four characters or the prefix is not numeric.
pub fn parse_release_year(release_date: &str) -> Option<i32> {
    let prefix = release_date.get(..4)?;
    if !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Rounds a year down to its decade, e.g. 1999 -> 1990.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}
