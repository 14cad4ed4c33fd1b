use crate::error::{TableError, TableResult};
use serde::Serialize;
use std::ops::Add;

// The Hundred is played with five-ball overs.
const BALLS_PER_OVER: u32 = 5;

/// Performance of a team in one of the two competitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatSection {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub no_result: u32,
    pub batting_runs: u32,
    pub batting_overs: f64,
    pub bowling_runs: u32,
    pub bowling_overs: f64,
}

impl StatSection {
    pub fn points(&self) -> u32 {
        self.won * 2 + self.tied + self.no_result
    }

    /// Runs scored per over minus runs conceded per over.
    pub fn net_run_rate(&self) -> f64 {
        runs_per_over(self.batting_runs, self.batting_overs)
            - runs_per_over(self.bowling_runs, self.bowling_overs)
    }
}

// A team that has not faced (or bowled) a ball yet has no rate to speak of.
fn runs_per_over(runs: u32, overs: f64) -> f64 {
    match overs > 0.0 {
        true => f64::from(runs) / overs,
        false => 0.0,
    }
}

impl Add for StatSection {
    type Output = StatSection;

    fn add(self, other: StatSection) -> StatSection {
        StatSection {
            played: self.played + other.played,
            won: self.won + other.won,
            lost: self.lost + other.lost,
            tied: self.tied + other.tied,
            no_result: self.no_result + other.no_result,
            batting_runs: self.batting_runs + other.batting_runs,
            batting_overs: self.batting_overs + other.batting_overs,
            bowling_runs: self.bowling_runs + other.bowling_runs,
            bowling_overs: self.bowling_overs + other.bowling_overs,
        }
    }
}

/// Aggregate "runs/overs" figure as published in points tables, e.g. `850/148.3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunsOvers {
    pub runs: u32,
    /// Decimal overs, where `.2` means a fifth of an over.
    pub overs: f64,
}

impl RunsOvers {
    pub fn parse(raw: &str) -> TableResult<Self> {
        let malformed = || TableError::MalformedInput(format!("'{raw}' is not a runs/overs figure"));

        let (runs, overs) = match raw.trim().split('/').collect::<Vec<_>>()[..] {
            [runs, overs] => (runs, overs),
            _ => return Err(malformed()),
        };
        let (whole_overs, balls) = match overs.split('.').collect::<Vec<_>>()[..] {
            [whole_overs, balls] => (whole_overs, balls),
            _ => return Err(malformed()),
        };

        let runs = runs.parse::<u32>().map_err(|_| malformed())?;
        let whole_overs = whole_overs.parse::<u32>().map_err(|_| malformed())?;
        // A single digit ball count, which can never complete an over.
        let balls = match balls.len() {
            1 => balls.parse::<u32>().map_err(|_| malformed())?,
            _ => return Err(malformed()),
        };
        if balls >= BALLS_PER_OVER {
            return Err(malformed());
        }

        // Doubling the balls turns fifths of an over into tenths.
        let overs = format!("{}.{}", whole_overs, balls * 2)
            .parse::<f64>()
            .map_err(|_| malformed())?;

        Ok(RunsOvers { runs, overs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(won: u32, tied: u32, no_result: u32) -> StatSection {
        StatSection {
            played: 8,
            won,
            lost: 8 - won - tied - no_result,
            tied,
            no_result,
            ..Default::default()
        }
    }

    #[test]
    fn balls_are_doubled_into_tenths() {
        let parsed = RunsOvers::parse("850/148.3").unwrap();
        assert_eq!(parsed.runs, 850);
        assert_eq!(parsed.overs, 148.6);

        for (raw, overs) in [
            ("900/130.0", 130.0),
            ("900/130.1", 130.2),
            ("900/130.2", 130.4),
            ("900/130.3", 130.6),
            ("900/130.4", 130.8),
            (" 12/0.4 ", 0.8),
        ] {
            assert_eq!(RunsOvers::parse(raw).unwrap().overs, overs, "{raw}");
        }
    }

    #[test]
    fn malformed_figures_are_rejected() {
        for raw in [
            "", "850", "850/148", "850/148.3/2", "850/148.3.1", "abc/148.3", "850/x.3", "850/148.5",
            "850/148.9", "850/148.12", "850/148.", "-1/148.3",
        ] {
            assert!(
                matches!(RunsOvers::parse(raw), Err(TableError::MalformedInput(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn points_count_ties_and_no_results_once() {
        assert_eq!(section(5, 0, 0).points(), 10);
        assert_eq!(section(3, 1, 2).points(), 9);
    }

    #[test]
    fn net_run_rate_ignores_sides_without_overs() {
        let mut s = StatSection {
            batting_runs: 800,
            batting_overs: 100.0,
            bowling_runs: 700,
            bowling_overs: 100.0,
            ..Default::default()
        };
        assert_eq!(s.net_run_rate(), 1.0);

        s.bowling_overs = 0.0;
        assert_eq!(s.net_run_rate(), 8.0);
        assert_eq!(StatSection::default().net_run_rate(), 0.0);
    }

    #[test]
    fn sections_add_field_wise() {
        let women = StatSection {
            played: 8,
            won: 5,
            lost: 3,
            batting_runs: 800,
            batting_overs: 120.6,
            bowling_runs: 750,
            bowling_overs: 118.2,
            ..Default::default()
        };
        let combined = women + StatSection::default();
        assert_eq!(combined, women);

        let doubled = women + women;
        assert_eq!(doubled.won, 10);
        assert_eq!(doubled.batting_runs, 1600);
        assert_eq!(doubled.bowling_overs, 236.4);
    }
}
