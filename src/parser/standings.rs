use anyhow::Context;
use itertools::Itertools;
use scraper::{ElementRef, Html};

use crate::parser::{groups_container, select_group, ExtractError};
use crate::schema::{GroupName, GroupRecord, StandingsTable, TeamName};

/// Extracts one group's standings table.
pub fn parse(html: &Html, group: GroupName) -> anyhow::Result<StandingsTable> {
    parse_in(groups_container(html)?, group)
}

/// Extracts and concatenates both groups' standings, Group A rows first.
/// Both groups must expose the same columns.
pub fn parse_both(html: &Html) -> anyhow::Result<StandingsTable> {
    let container = groups_container(html)?;
    let a = parse_in(container, GroupName::A)?;
    let b = parse_in(container, GroupName::B)?;
    if a.columns() != b.columns() {
        return Err(ExtractError::HeaderMismatch {
            left: a.columns().clone(),
            right: b.columns().clone(),
        }
        .into());
    }
    let columns = a.columns().clone();
    let rows = a
        .rows()
        .iter()
        .chain(b.rows())
        .cloned()
        .collect_vec();
    Ok(StandingsTable::new(columns, rows))
}

fn parse_in(container: ElementRef, group: GroupName) -> anyhow::Result<StandingsTable> {
    let group_div = select_group(container, selector!("div.event-group"), "event-group", group)?;

    let header = group_div
        .select(selector!("th"))
        .map(|th| th.text().collect::<String>().trim().to_owned())
        .collect_vec();
    let tbody = group_div
        .select(selector!("tbody"))
        .next()
        .with_context(|| format!("standings table body not found for {}", group.label()))?;

    let mut rows = Vec::new();
    for (i, tr) in tbody.select(selector!("tr")).enumerate() {
        let cells = tr
            .children()
            .filter_map(ElementRef::wrap)
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .filter(|text| !text.is_empty())
            .collect_vec();
        if cells.len() != header.len() {
            return Err(ExtractError::RowWidth {
                row: i,
                expected: header.len(),
                found: cells.len(),
            }
            .into());
        }
        let team = clean_team_name(&cells[0])?;
        rows.push(GroupRecord::new(team, cells[1..].to_vec(), group));
    }

    Ok(StandingsTable::new(rename_columns(header, group), rows))
}

/// The group-labeled column holds the team names; the delta column is the
/// round differential. The constant "Group" column is appended last.
fn rename_columns(mut columns: Vec<String>, group: GroupName) -> Vec<String> {
    for column in &mut columns {
        if column == group.label() {
            *column = "Team".to_owned();
        } else if column == "Δ" {
            *column = "RD".to_owned();
        }
    }
    columns.push("Group".to_owned());
    columns
}

/// The team cell mixes a rank marker with the name. Of the alphanumeric
/// runs in the cell text, the first is the rank and the second is the name;
/// the first is discarded without interpretation.
fn clean_team_name(cell: &str) -> Result<TeamName, ExtractError> {
    regex!("[A-Za-z0-9 ]+")
        .find_iter(cell)
        .nth(1)
        .map(|m| TeamName::from(m.as_str().to_owned()))
        .ok_or_else(|| ExtractError::TeamNameCell {
            text: cell.to_owned(),
        })
}
