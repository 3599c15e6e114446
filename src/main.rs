mod sheet;

use anyhow::Context;
use log::{info, warn};
use nfl_api::client::NflApi;
use nfl_api::schedule::{NFL_TEAMS, aggregate};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let api = NflApi::new();
    let season = api.season();

    info!("fetching NFL {season} schedule from ESPN");
    let event_refs = api
        .fetch_events()
        .await
        .context("could not fetch the season event list from ESPN")?;
    if event_refs.is_empty() {
        warn!("no events found for the {season} season");
    } else {
        info!("found {} events", event_refs.len());
    }

    let resolved = api.resolve_events(&event_refs).await;
    let skipped = event_refs.len() - resolved.len();
    if skipped > 0 {
        warn!("{skipped} events could not be resolved and were skipped");
    }
    info!("processed {} games", resolved.len());

    let schedule = aggregate(&NFL_TEAMS, resolved);

    let path = output_path(season);
    sheet::write_schedule(&schedule, &NFL_TEAMS, season, &path)
        .with_context(|| format!("could not write {}", path.display()))?;
    info!("schedule written to {}", path.display());

    Ok(())
}

fn output_path(season: u16) -> PathBuf {
    std::env::var("NFLSCHED_OUTPUT")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("NFL-{season}-Season.xlsx")))
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("nflsched {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "nflsched - NFL season schedule grid generator

Fetches the season schedule from ESPN and writes a color-coded
Excel grid: green win, red loss, yellow tie, gray not played / BYE.

Usage:
  nflsched
  nflsched --help
  nflsched --version

Environment:
  NFLSCHED_SEASON   Season year to fetch (default: derived from today)
  NFLSCHED_OUTPUT   Output path (default ./NFL-<year>-Season.xlsx)
  RUST_LOG          Log filter (default info)"
}
