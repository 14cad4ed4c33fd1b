use crate::core::{section::StatSection, table::Row};
use chrono::{DateTime, Utc};
use serde::Serialize;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

#[derive(Debug, Serialize)]
pub struct DisplaySection {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub no_result: u32,
    pub points: u32,
    pub net_run_rate: String,
}

#[derive(Debug, Serialize)]
pub struct DisplayRow<'a> {
    pub position: usize,
    pub team: &'a str,
    pub women: DisplaySection,
    pub men: DisplaySection,
    pub combined: DisplaySection,
}

impl From<StatSection> for DisplaySection {
    fn from(section: StatSection) -> Self {
        DisplaySection {
            played: section.played,
            won: section.won,
            lost: section.lost,
            tied: section.tied,
            no_result: section.no_result,
            points: section.points(),
            net_run_rate: format_net_run_rate(section.net_run_rate()),
        }
    }
}

pub fn rows(rows: &[Row]) -> Vec<DisplayRow<'_>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| DisplayRow {
            // idx is zero-based
            position: idx + 1,
            team: &row.team,
            women: row.women.into(),
            men: row.men.into(),
            combined: row.combined().into(),
        })
        .collect()
}

pub fn format_net_run_rate(rate: f64) -> String {
    format!("{:+.3}", rate)
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
