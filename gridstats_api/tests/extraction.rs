use gridstats_api::{extract, ABSENT_POINTS, ABSENT_TEAM};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn matchup_page_yields_both_tables() {
    let doc = load_fixture("matchup.html");
    let set = extract(&doc).unwrap();

    assert_eq!(set.len(), 2);
    assert!(set.find_by_shape(2, 6).is_some());
    assert!(set.find_by_shape(25, 3).is_some());
}

#[test]
fn summary_carries_teams_and_final_score() {
    let doc = load_fixture("matchup.html");
    let set = extract(&doc).unwrap();
    let summary = set.summary();

    assert_eq!(summary.teams, ["DEN".to_string(), "KC".to_string()]);
    assert_eq!(summary.points, ["20".to_string(), "24".to_string()]);
}

#[test]
fn matchup_rows_are_in_page_order() {
    let doc = load_fixture("matchup.html");
    let set = extract(&doc).unwrap();
    let matchup = set.matchup();

    assert_eq!(matchup.rows.len(), 25);
    assert_eq!(matchup.rows[0].stat, "1st Downs");
    assert_eq!(matchup.rows[0].away, "20");
    assert_eq!(matchup.rows[0].home, "24");
    assert_eq!(matchup.rows[24].stat, "Possession");
    assert_eq!(matchup.rows[24].home, "30:20");
}

#[test]
fn tableless_page_degrades_to_placeholders() {
    let set = extract("<html><body><h1>Game not found</h1></body></html>").unwrap();

    assert!(set.is_empty());
    let summary = set.summary();
    assert_eq!(summary.teams, [ABSENT_TEAM.to_string(), ABSENT_TEAM.to_string()]);
    assert_eq!(
        summary.points,
        [ABSENT_POINTS.to_string(), ABSENT_POINTS.to_string()]
    );
    assert!(set.matchup().rows.is_empty());
}
