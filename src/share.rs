use itertools::Itertools;
use url::form_urlencoded;

use crate::roster::Roster;
use crate::rules::{DEFAULT_CAPACITY_PER_TEAM, DEFAULT_TEAM_COUNT, Settings};


// Query parameter names are a stable wire format; changing them breaks
// previously shared links.
pub const PLAYERS_PARAM: &str = "players";
pub const TEAM_COUNT_PARAM: &str = "teamsCount";
pub const CAPACITY_PARAM: &str = "maxPlayersPerTeam";

/// Decoded form of a share query. Reproduces the same *inputs* in a new
/// session, not the same shuffle outcome.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ShareData {
    pub players: Vec<String>,
    pub settings: Settings,
}

/// Encodes the roster and settings as a URL query string. The `players`
/// field is comma-joined and omitted entirely when the roster is empty.
pub fn encode(roster: &Roster, settings: &Settings) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !roster.is_empty() {
        serializer.append_pair(PLAYERS_PARAM, &roster.players().iter().join(","));
    }
    serializer.append_pair(TEAM_COUNT_PARAM, &settings.team_count().to_string());
    serializer.append_pair(CAPACITY_PARAM, &settings.capacity_per_team().to_string());
    serializer.finish()
}

/// Decodes a share query string. Missing, non-numeric or non-positive
/// integer fields substitute the defaults; a bad seed never propagates as
/// an error. Blank player segments are dropped.
pub fn decode(query: &str) -> ShareData {
    let mut players = Vec::new();
    let mut team_count = DEFAULT_TEAM_COUNT;
    let mut capacity_per_team = DEFAULT_CAPACITY_PER_TEAM;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            PLAYERS_PARAM => {
                players = value
                    .split(',')
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty())
                    .map(|name| name.to_owned())
                    .collect();
            }
            TEAM_COUNT_PARAM => {
                team_count = parse_positive(&value).unwrap_or(DEFAULT_TEAM_COUNT);
            }
            CAPACITY_PARAM => {
                capacity_per_team = parse_positive(&value).unwrap_or(DEFAULT_CAPACITY_PER_TEAM);
            }
            _ => {}
        }
    }
    ShareData {
        players,
        settings: Settings::clamped(team_count, capacity_per_team),
    }
}

fn parse_positive(s: &str) -> Option<usize> { s.parse::<usize>().ok().filter(|&n| n >= 1) }
