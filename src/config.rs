//! Configuration management for the Spotify Playlist Analysis CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, API endpoints and the playlist
//! that is analysed.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

/// Playlist analysed when `SPOTIFY_PLAYLIST_URL` is not set.
pub const DEFAULT_PLAYLIST_URL: &str = "https://open.spotify.com/playlist/56afGpmssmu4sR9Pz92jfE";

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

const CLIENT_ID_VARS: [&str; 2] = ["SPOTIFY_CLIENT_ID", "SPOTIPY_CLIENT_ID"];
const CLIENT_SECRET_VARS: [&str; 2] = ["SPOTIFY_CLIENT_SECRET", "SPOTIPY_CLIENT_SECRET"];

/// Client credentials registered on the Spotify developer dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the current working directory first and then in
/// the platform-specific local data directory under `plancli/.env`. Values that
/// are already present in the process environment are never overwritten, so a
/// variable exported in the shell always wins over a file.
///
/// # Directory Structure
///
/// The data directory file is looked up in:
/// - Linux: `~/.local/share/plancli/.env`
/// - macOS: `~/Library/Application Support/plancli/.env`
/// - Windows: `%LOCALAPPDATA%/plancli/.env`
///
/// # Returns
///
/// Returns `Ok(())` when no file exists or every existing file was loaded, or an
/// error string describing the file that could not be parsed.
///
/// # Example
///
/// ```
/// use plancli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let local = PathBuf::from(".env");
    if async_fs::metadata(&local).await.is_ok() {
        dotenv::from_path(&local).map_err(|e| format!("{}: {}", local.display(), e))?;
    }

    let data_env = data_dir().join(".env");
    if async_fs::metadata(&data_env).await.is_ok() {
        dotenv::from_path(&data_env).map_err(|e| format!("{}: {}", data_env.display(), e))?;
    }

    Ok(())
}

/// Returns the directory where `plancli` keeps its `.env` file and caches.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("plancli");
    path
}

/// Returns the client credentials from the environment.
///
/// Reads `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`, falling back to the
/// `SPOTIPY_CLIENT_ID` and `SPOTIPY_CLIENT_SECRET` names used by the Python
/// tooling so existing `.env` files keep working.
///
/// # Errors
///
/// Returns a human readable message when either value is missing or empty.
/// The caller is expected to treat this as fatal before any network call.
///
/// # Example
///
/// ```
/// let creds = credentials()?;
/// println!("Using client {}", creds.client_id);
/// ```
pub fn credentials() -> Result<Credentials, String> {
    credentials_from(|key| env::var(key).ok())
}

/// Resolves credentials through an arbitrary variable lookup.
pub fn credentials_from<F>(lookup: F) -> Result<Credentials, String>
where
    F: Fn(&str) -> Option<String>,
{
    let first_set = |names: &[&str]| {
        names
            .iter()
            .filter_map(|name| lookup(*name))
            .find(|value| !value.trim().is_empty())
    };

    match (first_set(&CLIENT_ID_VARS), first_set(&CLIENT_SECRET_VARS)) {
        (Some(client_id), Some(client_secret)) => Ok(Credentials {
            client_id,
            client_secret,
        }),
        _ => Err(format!(
            "{} and {} environment variables are required.\n\
             Please set them directly or create a .env file in the working directory or in {}.\n\
             You can get credentials at https://developer.spotify.com/dashboard",
            CLIENT_ID_VARS[0],
            CLIENT_SECRET_VARS[0],
            data_dir().display()
        )),
    }
}

/// Returns the URL of the playlist to analyse.
///
/// Reads `SPOTIFY_PLAYLIST_URL`; falls back to [`DEFAULT_PLAYLIST_URL`]. The
/// value may be a full `open.spotify.com` link (with or without query string)
/// or a bare playlist id.
pub fn playlist_url() -> String {
    env_or("SPOTIFY_PLAYLIST_URL", DEFAULT_PLAYLIST_URL)
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints, defaulting to
/// `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the Spotify OAuth token URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL used for the client credentials grant, defaulting to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    env_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn credentials_from_primary_names() {
        let creds = credentials_from(lookup(&[
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
        ]))
        .unwrap();
        assert_eq!(creds.client_id, "id");
        assert_eq!(creds.client_secret, "secret");
    }

    #[test]
    fn credentials_fall_back_to_spotipy_names() {
        let creds = credentials_from(lookup(&[
            ("SPOTIPY_CLIENT_ID", "legacy-id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
        ]))
        .unwrap();
        assert_eq!(creds.client_id, "legacy-id");
    }

    #[test]
    fn missing_or_blank_credentials_are_rejected() {
        let err = credentials_from(lookup(&[("SPOTIFY_CLIENT_ID", "id")])).unwrap_err();
        assert!(err.contains("SPOTIFY_CLIENT_SECRET"));

        let blank = credentials_from(lookup(&[
            ("SPOTIFY_CLIENT_ID", "  "),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
        ]));
        assert!(blank.is_err());
    }
}
