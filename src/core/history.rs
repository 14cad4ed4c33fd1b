use crate::core::{
    section::StatSection,
    table::{PreviousYears, Row},
};
use once_cell::sync::Lazy;

/// Final combined tables of the seasons that are over, already in ranking order.
pub static PREVIOUS_YEARS: Lazy<PreviousYears> =
    Lazy::new(|| PreviousYears::from([("2021", season_2021())]));

/// Rows for a past season; unknown seasons have no rows.
pub fn previous_year(year: &str) -> Vec<Row> {
    PREVIOUS_YEARS.get(year).cloned().unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn section(
    played: u32,
    won: u32,
    lost: u32,
    tied: u32,
    no_result: u32,
    batting_runs: u32,
    batting_overs: f64,
    bowling_runs: u32,
    bowling_overs: f64,
) -> StatSection {
    StatSection {
        played,
        won,
        lost,
        tied,
        no_result,
        batting_runs,
        batting_overs,
        bowling_runs,
        bowling_overs,
    }
}

fn row(team: &str, women: StatSection, men: StatSection) -> Row {
    Row {
        team: team.to_string(),
        women,
        men,
    }
}

fn season_2021() -> Vec<Row> {
    vec![
        row(
            "Brave",
            section(8, 7, 1, 0, 0, 933, 138.0, 850, 149.0),
            section(8, 5, 2, 0, 1, 983, 134.8, 990, 136.4),
        ),
        row(
            "Phoenix",
            section(8, 4, 4, 0, 0, 1051, 154.0, 1029, 155.0),
            section(8, 6, 2, 0, 0, 1202, 147.8, 1085, 154.0),
        ),
        row(
            "Invincibles",
            section(8, 4, 3, 0, 1, 801, 136.4, 820, 140.0),
            section(8, 4, 3, 0, 1, 975, 130.6, 956, 130.2),
        ),
        row(
            "Rockets",
            section(8, 3, 4, 0, 1, 878, 138.4, 904, 136.2),
            section(8, 5, 3, 0, 0, 1070, 145.2, 1084, 147.8),
        ),
        row(
            "N S-Chargers",
            section(8, 3, 4, 0, 1, 862, 132.0, 849, 129.2),
            section(8, 3, 4, 0, 1, 1054, 139.4, 935, 132.6),
        ),
        row(
            "Originals",
            section(8, 3, 4, 0, 1, 823, 128.6, 835, 130.8),
            section(8, 2, 4, 0, 2, 780, 113.6, 860, 119.0),
        ),
        row(
            "Spirit",
            section(8, 4, 4, 0, 0, 934, 150.0, 963, 155.8),
            section(8, 1, 6, 0, 1, 944, 140.0, 1019, 138.0),
        ),
        row(
            "Fire",
            section(8, 2, 6, 0, 0, 927, 157.6, 959, 139.0),
            section(8, 3, 5, 0, 0, 1148, 159.6, 1227, 153.0),
        ),
    ]
}
