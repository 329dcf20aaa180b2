//! SportsWorldCentral agent tools.
//!
//! Each tool wraps one operation of the shared [`SportsDataApi`] client as a
//! discrete invocable capability. No local error handling: whatever the client
//! returns goes back to the calling agent unchanged.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::capability::AgentTool;
use crate::error::{Result, WaiverBidError};
use crate::swc::SportsDataApi;

fn parse_args<T: DeserializeOwned + Default>(args: Value) -> Result<T> {
    if args.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(args)
        .map_err(|e| WaiverBidError::Validation(format!("invalid tool arguments: {}", e)))
}

/// Confirms the sports-data API is responding.
pub struct HealthCheckTool {
    client: Arc<dyn SportsDataApi>,
}

impl HealthCheckTool {
    pub fn new(client: Arc<dyn SportsDataApi>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AgentTool for HealthCheckTool {
    fn name(&self) -> &'static str {
        "HealthCheck"
    }

    fn description(&self) -> &'static str {
        "Use this to confirm the API is working correctly before making other API calls."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn invoke(&self, _args: Value) -> Result<Value> {
        let text = self.client.get_health_check().await?;
        Ok(Value::String(text))
    }
}

#[derive(Debug, Default, Deserialize)]
struct LeaguesArgs {
    #[serde(default)]
    league_name: Option<String>,
}

/// Lists league records, with their teams when present.
pub struct ListLeaguesTool {
    client: Arc<dyn SportsDataApi>,
}

impl ListLeaguesTool {
    pub fn new(client: Arc<dyn SportsDataApi>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AgentTool for ListLeaguesTool {
    fn name(&self) -> &'static str {
        "ListLeagues"
    }

    fn description(&self) -> &'static str {
        "Gets league information from SportsWorldCentral. \
         If a league has teams, they are returned as well."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "league_name": {
                    "type": ["string", "null"],
                    "description": "Name of the league. Leave empty or null to get all leagues."
                }
            },
            "required": []
        })
    }

    async fn invoke(&self, args: Value) -> Result<Value> {
        let args: LeaguesArgs = parse_args(args)?;
        // Call the API with the league name, which may be None.
        let leagues = self.client.list_leagues(args.league_name.as_deref()).await?;
        Ok(serde_json::to_value(leagues)?)
    }
}

#[derive(Debug, Default, Deserialize)]
struct TeamsArgs {
    #[serde(default)]
    team_name: Option<String>,
    #[serde(default)]
    league_id: Option<i64>,
}

/// Lists team records, with their players when present.
pub struct ListTeamsTool {
    client: Arc<dyn SportsDataApi>,
}

impl ListTeamsTool {
    pub fn new(client: Arc<dyn SportsDataApi>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AgentTool for ListTeamsTool {
    fn name(&self) -> &'static str {
        "ListTeams"
    }

    fn description(&self) -> &'static str {
        "Gets a list of teams from SportsWorldCentral. \
         If a team has players, they are returned as well. \
         A league ID may be provided to get teams from a single league."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "team_name": {
                    "type": ["string", "null"],
                    "description": "Name of the team to look up. Leave empty or null to get all teams."
                },
                "league_id": {
                    "type": ["integer", "null"],
                    "description": "Numeric ID of a league. Leave empty to get teams from all leagues."
                }
            },
            "required": []
        })
    }

    async fn invoke(&self, args: Value) -> Result<Value> {
        let args: TeamsArgs = parse_args(args)?;
        let teams = self
            .client
            .list_teams(args.team_name.as_deref(), args.league_id)
            .await?;
        Ok(serde_json::to_value(teams)?)
    }
}

/// Aggregates the SportsWorldCentral tools so a calling agent can enumerate
/// available capabilities without knowing the concrete implementations.
pub struct SportsToolkit {
    client: Arc<dyn SportsDataApi>,
}

impl SportsToolkit {
    pub fn new(client: Arc<dyn SportsDataApi>) -> Self {
        Self { client }
    }

    /// The toolkit's tools, in fixed order.
    pub fn get_tools(&self) -> Vec<Arc<dyn AgentTool>> {
        vec![
            Arc::new(HealthCheckTool::new(Arc::clone(&self.client))),
            Arc::new(ListLeaguesTool::new(Arc::clone(&self.client))),
            Arc::new(ListTeamsTool::new(Arc::clone(&self.client))),
        ]
    }
}
