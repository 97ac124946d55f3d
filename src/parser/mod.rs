//! Extractors for the two tables on an event group-stage page.
//!
//! Both extractors walk the same read-only markup tree, passed in as
//! `&Html`. The page carries one `div.event-groups-container` holding the
//! Group A and Group B containers side by side; each extractor locates its
//! own pair of containers inside it.

pub mod match_results;
pub mod standings;

use anyhow::Context;
use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};

use crate::schema::GroupName;

/// Structural surprises on the page. Any of these fails the whole run; no
/// partial output is written.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("expected exactly 2 {kind} containers, found {found}")]
    GroupContainerCount { kind: &'static str, found: usize },
    #[error("standings row {row} has {found} non-empty cells but the header has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("standings columns differ between groups: {left:?} vs {right:?}")]
    HeaderMismatch {
        left: Vec<String>,
        right: Vec<String>,
    },
    #[error("expected exactly one winner-marked team out of {teams}, found {winners}")]
    AmbiguousResult { winners: usize, teams: usize },
    #[error("malformed score text {text:?}")]
    BadScore { text: String },
    #[error("team name cell {text:?} does not contain a second alphanumeric run")]
    TeamNameCell { text: String },
}

fn groups_container(html: &Html) -> anyhow::Result<ElementRef<'_>> {
    html.select(selector!("div.event-groups-container"))
        .next()
        .context("div.event-groups-container not found")
}

/// Picks one group's container out of `container`'s descendants matching
/// `selector`. Exactly two candidates must exist. Prefers the candidate
/// whose text carries the group label ("Group A"/"Group B"); when neither
/// or both do, falls back to position (A first, B second), which is how
/// the page has always ordered them.
fn select_group<'a>(
    container: ElementRef<'a>,
    selector: &Selector,
    kind: &'static str,
    group: GroupName,
) -> Result<ElementRef<'a>, ExtractError> {
    let candidates = container.select(selector).collect_vec();
    if candidates.len() != 2 {
        return Err(ExtractError::GroupContainerCount {
            kind,
            found: candidates.len(),
        });
    }
    let labeled = candidates
        .iter()
        .copied()
        .filter(|c| c.text().collect::<String>().contains(group.label()))
        .collect_vec();
    Ok(match labeled[..] {
        [only] => only,
        _ => candidates[group.position()],
    })
}
