use anyhow::Context;
use itertools::Itertools;
use scraper::{ElementRef, Html};

use crate::parser::{groups_container, select_group, ExtractError};
use crate::schema::{GroupName, MatchRecord, MatchResultsTable, ScoreOrder, TeamName};

/// Extracts one group's match results.
pub fn parse(html: &Html, group: GroupName, order: ScoreOrder) -> anyhow::Result<MatchResultsTable> {
    parse_in(groups_container(html)?, group, order)
}

/// Extracts and concatenates both groups' match results, Group A first.
pub fn parse_both(html: &Html, order: ScoreOrder) -> anyhow::Result<MatchResultsTable> {
    let container = groups_container(html)?;
    let a = parse_in(container, GroupName::A, order)?;
    let b = parse_in(container, GroupName::B, order)?;
    let rows = a
        .rows()
        .iter()
        .chain(b.rows())
        .cloned()
        .collect_vec();
    Ok(MatchResultsTable::new(rows))
}

fn parse_in(
    container: ElementRef,
    group: GroupName,
    order: ScoreOrder,
) -> anyhow::Result<MatchResultsTable> {
    let card = select_group(container, selector!("div.wf-cardzx"), "wf-cardzx", group)?;
    let rows = card
        .select(selector!("a.event-group-match.wf-module-item"))
        .map(|anchor| parse_match(anchor, order))
        .try_collect()?;
    Ok(MatchResultsTable::new(rows))
}

fn parse_match(anchor: ElementRef, order: ScoreOrder) -> anyhow::Result<MatchRecord> {
    let url = anchor
        .attr("href")
        .context("match anchor has no href")?
        .to_owned();

    // The result block has no class of its own; the page identifies it only
    // by this exact inline style.
    let result = anchor
        .select(selector!(
            r#"div[style="display: flex; justify-content: center;"]"#
        ))
        .next()
        .with_context(|| format!("result block not found in match {url}"))?;

    let (winners, losers): (Vec<_>, Vec<_>) = result
        .select(selector!("div.team"))
        .partition(|team| team.value().classes().any(|class| class == "mod-winner"));
    let ([winner], [loser]) = (&winners[..], &losers[..]) else {
        return Err(ExtractError::AmbiguousResult {
            winners: winners.len(),
            teams: winners.len() + losers.len(),
        }
        .into());
    };
    let winner = TeamName::from(winner.text().collect::<String>().trim().to_owned());
    let loser = TeamName::from(loser.text().collect::<String>().trim().to_owned());

    let score_text = result
        .select(selector!("div.score"))
        .next()
        .with_context(|| format!("score not found in match {url}"))?
        .text()
        .collect::<String>();
    let parts = score_text.split(':').map(str::trim).collect_vec();
    let [left, right] = parts[..] else {
        return Err(ExtractError::BadScore { text: score_text }.into());
    };
    let score = order
        .pair(left.to_owned(), right.to_owned())
        .map_err(|_| ExtractError::BadScore {
            text: score_text.clone(),
        })?;

    Ok(MatchRecord::new(url, winner, loser, score))
}
