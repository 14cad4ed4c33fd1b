use crate::{
    core::{
        section::{RunsOvers, StatSection},
        table::Sections,
    },
    error::{TableError, TableResult},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// JSON pointer to the standings groups in the page data of a points table.
pub const STANDINGS_GROUPS_POINTER: &str = "/props/appPageProps/data/content/standings/groups";
/// Location of the groups in points table pages up to the 2021 season.
pub const LEGACY_STANDINGS_GROUPS_POINTER: &str =
    "/props/pageProps/data/pageData/content/standings/groups";

pub fn decode(payload: &str) -> TableResult<Sections> {
    decode_at(payload, STANDINGS_GROUPS_POINTER)
}

/// Sections of every team of the first standings group found at `pointer`.
pub fn decode_at(payload: &str, pointer: &str) -> TableResult<Sections> {
    // Only the fields we consume. Defined here as they are only used by this function.
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Group {
        team_stats: Vec<TeamStat>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct TeamStat {
        team_info: TeamInfo,
        matches_played: String,
        matches_won: u32,
        matches_lost: u32,
        matches_tied: u32,
        matches_no_result: u32,
        #[serde(rename = "for")]
        scored: String,
        #[serde(rename = "against")]
        conceded: String,
    }

    #[derive(Debug, Deserialize)]
    struct TeamInfo {
        name: String,
    }

    let data = serde_json::from_str::<Value>(payload)
        .map_err(|e| TableError::schema(format!("Payload is not valid JSON. {e}")))?;

    let groups = data
        .pointer(pointer)
        .ok_or_else(|| TableError::schema(format!("No standings groups at '{pointer}'")))?;
    let groups = Vec::<Group>::deserialize(groups)
        .map_err(|e| TableError::schema(format!("Unexpected standings groups. {e}")))?;
    let group = groups
        .into_iter()
        .next()
        .ok_or_else(|| TableError::schema("Standings have no group"))?;

    let mut sections = Sections::new();
    for stats in group.team_stats {
        let team = stats.team_info.name;
        let played = stats.matches_played.trim().parse::<u32>().map_err(|_| {
            TableError::schema_caused_by(
                format!("Invalid matches played for team {team}"),
                TableError::MalformedInput(format!("'{}' is not a count", stats.matches_played)),
            )
        })?;
        let batting = RunsOvers::parse(&stats.scored)
            .map_err(|e| TableError::schema_caused_by(format!("Invalid 'for' of team {team}"), e))?;
        let bowling = RunsOvers::parse(&stats.conceded).map_err(|e| {
            TableError::schema_caused_by(format!("Invalid 'against' of team {team}"), e)
        })?;

        sections.insert(
            team,
            StatSection {
                played,
                won: stats.matches_won,
                lost: stats.matches_lost,
                tied: stats.matches_tied,
                no_result: stats.matches_no_result,
                batting_runs: batting.runs,
                batting_overs: batting.overs,
                bowling_runs: bowling.runs,
                bowling_overs: bowling.overs,
            },
        );
    }

    debug!("Decoded standings of {} teams", sections.len());

    Ok(sections)
}
