use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::info;
use scraper::Html;
use url::Url;
use vlr_scraping::api::SiteClient;
use vlr_scraping::export;
use vlr_scraping::parser::{match_results, standings};
use vlr_scraping::schema::{GroupName, ScoreOrder};

const DEFAULT_EVENT_URL: &str =
    "https://www.vlr.gg/event/799/champions-tour-north-america-stage-1-challengers/group-stage";

#[derive(Parser)]
struct Opts {
    /// Event group-stage page to scrape.
    #[arg(long, default_value = DEFAULT_EVENT_URL)]
    url: Url,
    #[arg(long, default_value = "groupstandings.csv")]
    standings_out: PathBuf,
    #[arg(long, default_value = "groupmatchresults.csv")]
    matches_out: PathBuf,
    /// Ordering of the two score columns; "lexicographic" reproduces the
    /// historical string sort, "numeric" sorts by map count.
    #[arg(long, default_value_t = ScoreOrder::Lexicographic)]
    score_order: ScoreOrder,
    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
    /// Extract a single group ("A" or "B") instead of both.
    #[arg(long)]
    group: Option<GroupName>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let opts = Opts::parse();

    let client = SiteClient::new(Duration::from_secs(opts.timeout))?;
    let body = client.fetch_group_stage(&opts.url).await?;
    let html = Html::parse_document(&body);

    let standings = match opts.group {
        Some(group) => standings::parse(&html, group)?,
        None => standings::parse_both(&html)?,
    };
    export::export_standings(&standings, &opts.standings_out)?;
    info!(
        "Wrote {} standings rows to {:?}",
        standings.rows().len(),
        opts.standings_out
    );

    let matches = match opts.group {
        Some(group) => match_results::parse(&html, group, opts.score_order)?,
        None => match_results::parse_both(&html, opts.score_order)?,
    };
    export::export_match_results(&matches, &opts.matches_out)?;
    info!(
        "Wrote {} match rows to {:?}",
        matches.rows().len(),
        opts.matches_out
    );
    Ok(())
}
