//! # CLI Module
//!
//! This module provides the command-line interface layer for plancli, a Spotify
//! API client that analyses the tracks of a playlist. It implements the
//! user-facing commands and coordinates the analysis pipeline, the report
//! writers and the console output.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Requests an app token with the configured client credentials and
//!   caches it; doubles as a credentials check
//!
//! ### Analysis
//!
//! - [`analyze`] - Fetches the configured playlist, resolves artist genres,
//!   writes the CSV export and the chart, and prints a summary
//!
//! ## Error Handling
//!
//! Commands report problems with the crate's console macros:
//!
//! - **Fatal**: missing credentials, a rejected token request, a playlist that
//!   cannot be fetched and output files that cannot be written end the process
//!   with exit code 1 through `error!`
//! - **Recoverable**: failed artist lookups and unreadable release dates are
//!   reported through `warning!` and the run continues with what is available
//!
//! ## Usage Patterns
//!
//! ```bash
//! plancli auth                                  # Check credentials
//! plancli analyze                               # Analyse the configured playlist
//! plancli analyze --csv out.csv --chart out.svg # Custom output files
//! plancli analyze --top 25 --no-summary         # Longer rankings, no tables
//! ```

mod analyze;
mod auth;

pub use analyze::AnalyzeOutput;
pub use analyze::analyze;
pub use auth::auth;
