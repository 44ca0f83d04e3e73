//! Pivoting one game's tables into a single wide record.

use gridstats_api::{MatchupTable, SummaryTable};

use crate::record::GameRecord;

/// Normalizes a stat name into a column-safe suffix: lowercase, every run
/// of non-alphanumeric characters collapsed to one `_`, trimmed at both
/// ends.
pub fn normalize_stat_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out
}

/// Reshapes one game's summary and matchup into a [`GameRecord`].
///
/// Column order: `away_team`, `home_team`, then an `away_<stat>`/`home_<stat>`
/// pair per matchup row in page order, then the `away_points`/`home_points`
/// pair synthesized from the summary score. Never fails, including on
/// placeholder inputs. Pages with the same matchup rows get the same
/// column set.
pub fn reshape(game_id: u64, summary: &SummaryTable, matchup: &MatchupTable) -> GameRecord {
    let width = 2 + 2 * (matchup.rows.len() + 1);
    let mut columns = Vec::with_capacity(width);
    let mut values = Vec::with_capacity(width);

    columns.push("away_team".to_string());
    values.push(summary.teams[0].clone());
    columns.push("home_team".to_string());
    values.push(summary.teams[1].clone());

    for row in &matchup.rows {
        let stat = normalize_stat_name(&row.stat);
        columns.push(format!("away_{}", stat));
        values.push(row.away.clone());
        columns.push(format!("home_{}", stat));
        values.push(row.home.clone());
    }

    columns.push("away_points".to_string());
    values.push(summary.points[0].clone());
    columns.push("home_points".to_string());
    values.push(summary.points[1].clone());

    GameRecord {
        game_id,
        columns,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstats_api::MatchupRow;

    fn summary() -> SummaryTable {
        SummaryTable {
            teams: ["DEN".to_string(), "KC".to_string()],
            points: ["20".to_string(), "24".to_string()],
        }
    }

    fn matchup(rows: &[(&str, &str, &str)]) -> MatchupTable {
        MatchupTable {
            rows: rows
                .iter()
                .map(|(stat, away, home)| MatchupRow {
                    stat: stat.to_string(),
                    away: away.to_string(),
                    home: home.to_string(),
                })
                .collect(),
        }
    }

    // -- Stat name normalization --

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize_stat_name("Total Yards"), "total_yards");
    }

    #[test]
    fn normalize_collapses_punctuation_runs() {
        assert_eq!(normalize_stat_name("Comp-Att"), "comp_att");
        assert_eq!(normalize_stat_name("Red Zone (Made-Att)"), "red_zone_made_att");
        assert_eq!(
            normalize_stat_name("Defensive / Special Teams TDs"),
            "defensive_special_teams_tds"
        );
    }

    #[test]
    fn normalize_trims_both_ends() {
        assert_eq!(normalize_stat_name("  3rd down efficiency "), "3rd_down_efficiency");
        assert_eq!(normalize_stat_name("(Possession)"), "possession");
    }

    #[test]
    fn normalize_keeps_digits() {
        assert_eq!(normalize_stat_name("1st Downs"), "1st_downs");
    }

    #[test]
    fn normalize_empty_input() {
        assert_eq!(normalize_stat_name(""), "");
        assert_eq!(normalize_stat_name("---"), "");
    }

    // -- Reshape --

    #[test]
    fn teams_lead_and_points_trail() {
        let record = reshape(
            1,
            &summary(),
            &matchup(&[("Total Yards", "350", "400"), ("Turnovers", "1", "2")]),
        );
        assert_eq!(
            record.columns,
            vec![
                "away_team",
                "home_team",
                "away_total_yards",
                "home_total_yards",
                "away_turnovers",
                "home_turnovers",
                "away_points",
                "home_points",
            ]
        );
        assert_eq!(
            record.values,
            vec!["DEN", "KC", "350", "400", "1", "2", "20", "24"]
        );
    }

    #[test]
    fn well_formed_page_has_54_columns() {
        let rows: Vec<(String, String, String)> = (0..25)
            .map(|i| (format!("Stat {}", i), i.to_string(), i.to_string()))
            .collect();
        let borrowed: Vec<(&str, &str, &str)> = rows
            .iter()
            .map(|(s, a, h)| (s.as_str(), a.as_str(), h.as_str()))
            .collect();
        let record = reshape(2, &summary(), &matchup(&borrowed));
        assert_eq!(record.width(), 54);
        assert_eq!(record.values.len(), 54);
    }

    #[test]
    fn placeholder_inputs_still_produce_a_record() {
        let record = reshape(3, &SummaryTable::absent(), &MatchupTable::default());
        assert_eq!(
            record.columns,
            vec!["away_team", "home_team", "away_points", "home_points"]
        );
        assert_eq!(record.values, vec!["NA", "NA", "-1", "-1"]);
        assert_eq!(record.game_id, 3);
    }

    #[test]
    fn record_carries_its_game_id() {
        let record = reshape(401547321, &summary(), &MatchupTable::default());
        assert_eq!(record.game_id, 401547321);
    }
}
