//! HTML table extraction and shape-based lookup.

use scraper::{Html, Selector};

use crate::ExtractError;

/// Shape of the score summary table: one body row per side, six columns
/// ending in the final score.
const SUMMARY_SHAPE: (usize, usize) = (2, 6);
/// Shape of the stat matchup table: one row per stat, (name, away, home).
const MATCHUP_SHAPE: (usize, usize) = (25, 3);

/// Placeholder team label when no summary table is present.
pub const ABSENT_TEAM: &str = "NA";
/// Placeholder score when no summary table is present.
pub const ABSENT_POINTS: &str = "-1";

/// One `<table>` reduced to text cells: header cells plus body rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Returns `(body row count, column count of the first body row)`.
    pub fn shape(&self) -> (usize, usize) {
        (
            self.rows.len(),
            self.rows.first().map(Vec::len).unwrap_or(0),
        )
    }
}

/// The score summary of one game: side labels and final scores.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    /// Away and home side labels, in table order.
    pub teams: [String; 2],
    /// Away and home final scores, in table order.
    pub points: [String; 2],
}

impl SummaryTable {
    /// The placeholder summary used when a page carries no summary table.
    pub fn absent() -> Self {
        Self {
            teams: [ABSENT_TEAM.to_string(), ABSENT_TEAM.to_string()],
            points: [ABSENT_POINTS.to_string(), ABSENT_POINTS.to_string()],
        }
    }

    fn from_raw(table: &RawTable) -> Self {
        let side = |row: usize| -> (String, String) {
            let cells = &table.rows[row];
            (
                cells.first().cloned().unwrap_or_default(),
                cells.last().cloned().unwrap_or_default(),
            )
        };
        let (away_team, away_points) = side(0);
        let (home_team, home_points) = side(1);
        Self {
            teams: [away_team, home_team],
            points: [away_points, home_points],
        }
    }
}

/// One stat row of the matchup table.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupRow {
    pub stat: String,
    pub away: String,
    pub home: String,
}

/// The stat matchup of one game, in page order. May be empty when the
/// page carries no matchup table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchupTable {
    pub rows: Vec<MatchupRow>,
}

impl MatchupTable {
    fn from_raw(table: &RawTable) -> Self {
        let rows = table
            .rows
            .iter()
            .map(|cells| MatchupRow {
                stat: cells.first().cloned().unwrap_or_default(),
                away: cells.get(1).cloned().unwrap_or_default(),
                home: cells.get(2).cloned().unwrap_or_default(),
            })
            .collect();
        Self { rows }
    }
}

/// All tables extracted from one page, in document order.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    tables: Vec<RawTable>,
}

impl TableSet {
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns the first table whose shape matches, if any. Lookup is by
    /// shape rather than position so reordered or missing tables degrade
    /// to `None` instead of mixing tables up.
    pub fn find_by_shape(&self, rows: usize, cols: usize) -> Option<&RawTable> {
        self.tables.iter().find(|t| t.shape() == (rows, cols))
    }

    /// Returns the score summary, or the placeholder when no table of the
    /// summary shape exists.
    pub fn summary(&self) -> SummaryTable {
        match self.find_by_shape(SUMMARY_SHAPE.0, SUMMARY_SHAPE.1) {
            Some(table) => SummaryTable::from_raw(table),
            None => SummaryTable::absent(),
        }
    }

    /// Returns the stat matchup, or an empty one when no table of the
    /// matchup shape exists.
    pub fn matchup(&self) -> MatchupTable {
        match self.find_by_shape(MATCHUP_SHAPE.0, MATCHUP_SHAPE.1) {
            Some(table) => MatchupTable::from_raw(table),
            None => MatchupTable::default(),
        }
    }
}

/// Extracts every `<table>` in the document into a [`TableSet`].
///
/// Only an empty or whitespace body is an error; the HTML5 parser accepts
/// everything else, so a page without tables yields an empty set.
pub fn extract(doc: &str) -> Result<TableSet, ExtractError> {
    if doc.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    let document = Html::parse_document(doc);
    let table_selector = Selector::parse("table").expect("Invalid selector");
    let header_selector = Selector::parse("th").expect("Invalid selector");
    let row_selector = Selector::parse("tr").expect("Invalid selector");
    let cell_selector = Selector::parse("td").expect("Invalid selector");

    let mut tables = Vec::new();
    for table in document.select(&table_selector) {
        let headers: Vec<String> = table
            .select(&header_selector)
            .map(|el| cell_text(&el))
            .collect();

        let mut rows = Vec::new();
        for row in table.select(&row_selector) {
            let cells: Vec<String> = row.select(&cell_selector).map(|el| cell_text(&el)).collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }

        tables.push(RawTable { headers, rows });
    }

    Ok(TableSet { tables })
}

fn cell_text(el: &scraper::ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join("").trim().to_owned()
}
