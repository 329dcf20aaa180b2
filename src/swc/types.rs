//! Data-transfer structs matching the SportsWorldCentral API response shape.
//!
//! These are deliberately explicit rather than borrowed from any client
//! library's internal representation; records pass through unmodified.

use serde::{Deserialize, Serialize};

/// Player record as returned by the SportsWorldCentral API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub last_changed_date: Option<String>,
}

/// Team record; embeds players when the API includes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: i64,
    pub team_name: String,
    pub league_id: i64,
    #[serde(default)]
    pub last_changed_date: Option<String>,
    #[serde(default)]
    pub players: Vec<Player>,
}

/// League record; embeds teams when the API includes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub league_id: i64,
    pub league_name: String,
    #[serde(default)]
    pub scoring_type: Option<String>,
    #[serde(default)]
    pub last_changed_date: Option<String>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_deserializes_with_nested_teams() {
        let raw = r#"{
            "league_id": 5002,
            "league_name": "Pigskin Prodigal Fantasy League",
            "scoring_type": "PPR",
            "teams": [
                {"team_id": 1, "team_name": "Underdogs", "league_id": 5002}
            ]
        }"#;

        let league: League = serde_json::from_str(raw).unwrap();
        assert_eq!(league.league_id, 5002);
        assert_eq!(league.teams.len(), 1);
        assert_eq!(league.teams[0].team_name, "Underdogs");
        assert!(league.teams[0].players.is_empty());
    }
}
