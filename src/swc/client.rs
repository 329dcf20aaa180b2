//! SportsWorldCentral REST adapter.
//!
//! Thin pass-through client: filters map to query parameters, responses are
//! returned unmodified, and upstream failures propagate to the caller without
//! retry or fallback.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::types::{League, Team};
use crate::error::{Result, WaiverBidError};

const LEAGUES_PATH: &str = "/v0/leagues/";
const TEAMS_PATH: &str = "/v0/teams/";

/// The three SportsWorldCentral operations consumed by the toolkit.
#[async_trait]
pub trait SportsDataApi: Send + Sync {
    /// Raw status text from the API root.
    async fn get_health_check(&self) -> Result<String>;

    /// Leagues, optionally filtered by league name. `None` means all leagues.
    async fn list_leagues(&self, league_name: Option<&str>) -> Result<Vec<League>>;

    /// Teams, optionally filtered by team name and/or league id. The filters
    /// apply independently.
    async fn list_teams(&self, team_name: Option<&str>, league_id: Option<i64>)
        -> Result<Vec<Team>>;
}

#[derive(Clone)]
pub struct SwcClient {
    http: Client,
    base_url: String,
}

impl SwcClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .user_agent("waiverbid-swc-adapter/0.1")
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                WaiverBidError::Internal(format!("failed to build SWC HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("SWC GET {} query={:?}", url, query);

        let resp = self.http.get(&url).query(query).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(WaiverBidError::Upstream(format!(
                "SWC API GET {} failed: status={} body={}",
                path, status, text
            )));
        }

        serde_json::from_str(&text).map_err(|e| {
            WaiverBidError::Upstream(format!("invalid SWC JSON response from {}: {}", path, e))
        })
    }
}

#[async_trait]
impl SportsDataApi for SwcClient {
    async fn get_health_check(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        debug!("SWC GET {}", url);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(WaiverBidError::Upstream(format!(
                "SWC API health check failed: status={} body={}",
                status, text
            )));
        }

        Ok(text)
    }

    async fn list_leagues(&self, league_name: Option<&str>) -> Result<Vec<League>> {
        let mut query = Vec::new();
        if let Some(name) = league_name {
            query.push(("league_name", name.to_string()));
        }
        self.get_json(LEAGUES_PATH, &query).await
    }

    async fn list_teams(
        &self,
        team_name: Option<&str>,
        league_id: Option<i64>,
    ) -> Result<Vec<Team>> {
        let mut query = Vec::new();
        if let Some(name) = team_name {
            query.push(("team_name", name.to_string()));
        }
        if let Some(id) = league_id {
            query.push(("league_id", id.to_string()));
        }
        self.get_json(TEAMS_PATH, &query).await
    }
}
