use crate::core::section::StatSection;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::Serialize;
use std::{cmp::Ordering, collections::BTreeMap};

/// Sections of one competition, keyed by team name as published.
pub type Sections = BTreeMap<String, StatSection>;

/// Frozen tables of past seasons, keyed by season label.
pub type PreviousYears = BTreeMap<&'static str, Vec<Row>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub team: String,
    pub women: StatSection,
    pub men: StatSection,
}

impl Row {
    pub fn combined(&self) -> StatSection {
        self.women + self.men
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub year: String,
    pub rows: Vec<Row>,
    /// Only set for tables computed from live data.
    pub generated_at: Option<DateTime<Utc>>,
    pub previous_years: &'static PreviousYears,
}

/// Pair every team of the women's competition with its men's section.
///
/// Teams only found in the men's table are left out, and a women's team
/// missing from the men's table gets an empty men section.
pub fn merge(women: Sections, men: &Sections) -> Vec<Row> {
    women
        .into_iter()
        .map(|(team, women)| {
            let men = men.get(&team).copied().unwrap_or_default();
            Row { team, women, men }
        })
        .collect()
}

/// Order rows by combined points, then by combined net run rate, best first.
/// Rows equal on both keys keep their relative order.
pub fn rank(rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter().sorted_by(compare).collect()
}

fn compare(a: &Row, b: &Row) -> Ordering {
    let (a, b) = (a.combined(), b.combined());
    match a.points() == b.points() {
        true => b.net_run_rate().total_cmp(&a.net_run_rate()),
        false => b.points().cmp(&a.points()),
    }
}
