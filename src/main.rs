use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use plancli::{cli, config, report, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Request and cache an app token with the configured client credentials
    Auth,

    /// Analyse the configured playlist and write the CSV export and chart
    Analyze(AnalyzeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeOptions {
    /// Where to write the track table
    #[clap(long, default_value = report::DEFAULT_CSV_PATH)]
    csv: PathBuf,

    /// Where to write the chart (SVG)
    #[clap(long, default_value = report::DEFAULT_CHART_PATH)]
    chart: PathBuf,

    /// Number of genres and artists to rank
    #[clap(long, default_value_t = report::DEFAULT_TOP, value_parser = clap::value_parser!(usize))]
    top: usize,

    /// Skip the summary tables printed after the files are written
    #[clap(long)]
    no_summary: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Analyze(opt) => {
            cli::analyze(cli::AnalyzeOutput {
                csv_path: opt.csv,
                chart_path: opt.chart,
                top: opt.top.max(1),
                summary: !opt.no_summary,
            })
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
