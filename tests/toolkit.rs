//! Toolkit integration tests against a stub sports-data client.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use waiverbid::error::{Result, WaiverBidError};
use waiverbid::swc::{League, SportsDataApi, Team};
use waiverbid::toolkit::{AgentTool, SportsToolkit};

struct StubSportsApi {
    leagues: Vec<League>,
    teams: Vec<Team>,
    fail: bool,
}

impl StubSportsApi {
    fn fixture() -> Self {
        let teams = vec![
            team(101, "Underdogs", 5001),
            team(102, "Cheese Heads", 5001),
            team(201, "Monday Knights", 5002),
        ];
        let leagues = vec![
            League {
                league_id: 5001,
                league_name: "Pigskin Prodigal".to_string(),
                scoring_type: Some("PPR".to_string()),
                last_changed_date: None,
                teams: teams[..2].to_vec(),
            },
            League {
                league_id: 5002,
                league_name: "Gridiron Gurus".to_string(),
                scoring_type: Some("Standard".to_string()),
                last_changed_date: None,
                teams: teams[2..].to_vec(),
            },
        ];
        Self {
            leagues,
            teams,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            leagues: Vec::new(),
            teams: Vec::new(),
            fail: true,
        }
    }
}

fn team(team_id: i64, name: &str, league_id: i64) -> Team {
    Team {
        team_id,
        team_name: name.to_string(),
        league_id,
        last_changed_date: None,
        players: Vec::new(),
    }
}

#[async_trait]
impl SportsDataApi for StubSportsApi {
    async fn get_health_check(&self) -> Result<String> {
        if self.fail {
            return Err(WaiverBidError::Upstream(
                "SWC API health check failed: status=503 body=down".to_string(),
            ));
        }
        Ok("Sports World Central API is running".to_string())
    }

    async fn list_leagues(&self, league_name: Option<&str>) -> Result<Vec<League>> {
        if self.fail {
            return Err(WaiverBidError::Upstream("status=503".to_string()));
        }
        Ok(self
            .leagues
            .iter()
            .filter(|league| league_name.map_or(true, |name| league.league_name == name))
            .cloned()
            .collect())
    }

    async fn list_teams(
        &self,
        team_name: Option<&str>,
        league_id: Option<i64>,
    ) -> Result<Vec<Team>> {
        if self.fail {
            return Err(WaiverBidError::Upstream("status=503".to_string()));
        }
        Ok(self
            .teams
            .iter()
            .filter(|t| team_name.map_or(true, |name| t.team_name == name))
            .filter(|t| league_id.map_or(true, |id| t.league_id == id))
            .cloned()
            .collect())
    }
}

fn toolkit() -> SportsToolkit {
    SportsToolkit::new(Arc::new(StubSportsApi::fixture()))
}

fn find_tool(toolkit: &SportsToolkit, name: &str) -> Arc<dyn AgentTool> {
    toolkit
        .get_tools()
        .into_iter()
        .find(|tool| tool.name() == name)
        .unwrap()
}

#[test]
fn toolkit_exposes_three_tools_in_fixed_order() {
    let tools = toolkit().get_tools();
    let names: Vec<_> = tools.iter().map(|tool| tool.name()).collect();
    assert_eq!(names, vec!["HealthCheck", "ListLeagues", "ListTeams"]);

    for tool in &tools {
        assert!(!tool.description().is_empty());
        let schema = tool.input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"].is_object());
    }
}

#[test]
fn tool_schemas_declare_optional_filters() {
    let kit = toolkit();

    let leagues_schema = find_tool(&kit, "ListLeagues").input_schema();
    assert!(leagues_schema["properties"]["league_name"].is_object());
    assert_eq!(leagues_schema["required"], json!([]));

    let teams_schema = find_tool(&kit, "ListTeams").input_schema();
    assert!(teams_schema["properties"]["team_name"].is_object());
    assert!(teams_schema["properties"]["league_id"].is_object());
    assert_eq!(teams_schema["required"], json!([]));
}

#[tokio::test]
async fn health_check_returns_raw_status_text() {
    let kit = toolkit();
    let result = find_tool(&kit, "HealthCheck").invoke(json!({})).await.unwrap();
    assert_eq!(result, json!("Sports World Central API is running"));
}

#[tokio::test]
async fn list_leagues_null_filter_equals_absent() {
    let kit = toolkit();
    let tool = find_tool(&kit, "ListLeagues");

    let absent = tool.invoke(json!({})).await.unwrap();
    let null = tool.invoke(json!({"league_name": null})).await.unwrap();
    let no_args = tool.invoke(Value::Null).await.unwrap();

    assert_eq!(absent, null);
    assert_eq!(absent, no_args);
    assert_eq!(absent.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_leagues_filters_by_name() {
    let kit = toolkit();
    let result = find_tool(&kit, "ListLeagues")
        .invoke(json!({"league_name": "Gridiron Gurus"}))
        .await
        .unwrap();

    let leagues = result.as_array().unwrap();
    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0]["league_id"], 5002);
    // Nested teams pass through unchanged.
    assert_eq!(leagues[0]["teams"][0]["team_name"], "Monday Knights");
}

#[tokio::test]
async fn list_teams_without_filters_returns_all() {
    let kit = toolkit();
    let result = find_tool(&kit, "ListTeams").invoke(json!({})).await.unwrap();
    assert_eq!(result.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn list_teams_league_id_filter_returns_matching_subset() {
    let kit = toolkit();
    let result = find_tool(&kit, "ListTeams")
        .invoke(json!({"league_id": 5001}))
        .await
        .unwrap();

    let teams = result.as_array().unwrap();
    assert_eq!(teams.len(), 2);
    for team in teams {
        assert_eq!(team["league_id"], 5001);
    }
}

#[tokio::test]
async fn list_teams_filters_apply_independently() {
    let kit = toolkit();
    let result = find_tool(&kit, "ListTeams")
        .invoke(json!({"team_name": "Underdogs", "league_id": 5002}))
        .await
        .unwrap();

    // Name matches league 5001, id filter excludes it.
    assert!(result.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn upstream_errors_propagate_unchanged() {
    let kit = SportsToolkit::new(Arc::new(StubSportsApi::failing()));
    let err = find_tool(&kit, "HealthCheck").invoke(json!({})).await.unwrap_err();

    match err {
        WaiverBidError::Upstream(message) => assert!(message.contains("status=503")),
        other => panic!("expected upstream error, got {other}"),
    }
}

#[tokio::test]
async fn invalid_arguments_are_rejected_before_the_client_call() {
    let kit = toolkit();
    let err = find_tool(&kit, "ListTeams")
        .invoke(json!({"league_id": "five"}))
        .await
        .unwrap_err();

    assert!(matches!(err, WaiverBidError::Validation(_)));
}
