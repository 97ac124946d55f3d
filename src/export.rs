use std::io::{self, BufWriter};
use std::iter;
use std::path::Path;

use anyhow::Context;
use fs_err::File;

use crate::schema::{MatchResultsTable, StandingsTable};

pub const MATCH_HEADERS: [&str; 5] = ["URL", "Winner", "Loser", "Score 1", "Score 2"];

/// Writes the standings CSV: the table's own (renamed) columns as header,
/// then one row per team. The Team column doubles as the row index.
pub fn write_standings<W: io::Write>(table: &StandingsTable, writer: W) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(table.columns())?;
    for row in table.rows() {
        let team: &str = row.team().as_ref();
        csv.write_record(
            iter::once(team)
                .chain(row.stats().iter().map(String::as_str))
                .chain(iter::once(row.group().label())),
        )?;
    }
    Ok(csv.flush()?)
}

/// Writes the match results CSV. The header is written explicitly so an
/// empty table still produces a header-only file.
pub fn write_match_results<W: io::Write>(
    table: &MatchResultsTable,
    writer: W,
) -> anyhow::Result<()> {
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(MATCH_HEADERS)?;
    for row in table.rows() {
        csv.serialize(row)?;
    }
    Ok(csv.flush()?)
}

pub fn export_standings(table: &StandingsTable, path: &Path) -> anyhow::Result<()> {
    write_standings(table, BufWriter::new(File::create(path)?))
        .with_context(|| format!("While writing standings to {path:?}"))
}

pub fn export_match_results(table: &MatchResultsTable, path: &Path) -> anyhow::Result<()> {
    write_match_results(table, BufWriter::new(File::create(path)?))
        .with_context(|| format!("While writing match results to {path:?}"))
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::{write_match_results, write_standings};
    use crate::parser::{match_results, standings};
    use crate::schema::{MatchResultsTable, ScoreOrder};

    const PAGE: &str = r#"<div class="event-groups-container">
        <div class="event-group">
          <table>
            <thead><tr><th>Group A</th><th>W</th><th>L</th><th>Δ</th></tr></thead>
            <tbody>
              <tr><td><b>1.</b><b>TeamX</b></td><td>2</td><td>0</td><td>+10</td></tr>
            </tbody>
          </table>
        </div>
        <div class="event-group">
          <table>
            <thead><tr><th>Group B</th><th>W</th><th>L</th><th>Δ</th></tr></thead>
            <tbody>
              <tr><td><b>1.</b><b>TeamY</b></td><td>2</td><td>0</td><td>+4</td></tr>
            </tbody>
          </table>
        </div>
        <div class="wf-cardzx">
          <a class="event-group-match wf-module-item" href="/10001/foo-vs-bar">
            <div style="display: flex; justify-content: center;">
              <div class="team mod-winner">Foo</div>
              <div class="score">2 : 0</div>
              <div class="team">Bar</div>
            </div>
          </a>
        </div>
        <div class="wf-cardzx"></div>
    </div>"#;

    fn extract_and_render(html: &Html) -> (Vec<u8>, Vec<u8>) {
        let standings = standings::parse_both(html).unwrap();
        let matches = match_results::parse_both(html, ScoreOrder::Lexicographic).unwrap();
        let mut standings_out = Vec::new();
        write_standings(&standings, &mut standings_out).unwrap();
        let mut matches_out = Vec::new();
        write_match_results(&matches, &mut matches_out).unwrap();
        (standings_out, matches_out)
    }

    #[test]
    fn standings_csv_layout() {
        let html = Html::parse_document(PAGE);
        let (standings, _) = extract_and_render(&html);
        assert_eq!(
            String::from_utf8(standings).unwrap(),
            "Team,W,L,RD,Group\n\
             TeamX,2,0,+10,Group A\n\
             TeamY,2,0,+4,Group B\n"
        );
    }

    #[test]
    fn match_results_csv_layout() {
        let html = Html::parse_document(PAGE);
        let (_, matches) = extract_and_render(&html);
        assert_eq!(
            String::from_utf8(matches).unwrap(),
            "URL,Winner,Loser,Score 1,Score 2\n\
             /10001/foo-vs-bar,Foo,Bar,2,0\n"
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let html = Html::parse_document(PAGE);
        assert_eq!(extract_and_render(&html), extract_and_render(&html));
    }

    #[test]
    fn empty_match_table_keeps_header() {
        let mut out = Vec::new();
        write_match_results(&MatchResultsTable::new(Vec::new()), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "URL,Winner,Loser,Score 1,Score 2\n"
        );
    }
}
