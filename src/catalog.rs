//! League and team catalog backed by the sports-data API.
//!
//! Leagues are fetched once at process startup and cached for every chat for
//! the life of the process. A failed startup fetch leaves the catalog empty
//! until restart; the dialogue answers menu requests with a "try again later"
//! message in that case. Team lists are fetched per (league, season) query and
//! carried inside the per-chat dialogue state, never shared between chats.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::SelectionError;
use crate::flags;

/// Only the first leagues of the API's default ordering are offered
pub const MAX_LEAGUES: usize = 10;

/// A league with the inclusive range of seasons it offers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: u64,
    pub name: String,
    pub country: String,
    /// Flag emoji (or globe for international competitions) shown on the menu
    pub flag: String,
    pub first_year: u16,
    pub last_year: u16,
}

/// A team as returned for a (league, season) query
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub name: String,
}

/// Process-wide read-only league cache
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    leagues: Vec<League>,
}

impl Catalog {
    pub fn new(leagues: Vec<League>) -> Self {
        Self { leagues }
    }

    /// Build the catalog from raw API entries, keeping at most the first
    /// [`MAX_LEAGUES`] in the API's own ordering. Entries without any season
    /// are skipped since they offer nothing to select.
    pub fn from_entries(entries: Vec<LeagueEntry>) -> Self {
        let leagues = entries
            .into_iter()
            .take(MAX_LEAGUES)
            .filter_map(League::from_entry)
            .collect();
        Self { leagues }
    }

    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }

    pub fn find_league_by_id(&self, id: u64) -> Result<&League, SelectionError> {
        self.leagues
            .iter()
            .find(|league| league.id == id)
            .ok_or(SelectionError::LeagueNotFound(id))
    }
}

impl League {
    fn from_entry(entry: LeagueEntry) -> Option<Self> {
        let first_year = entry.seasons.iter().map(|s| s.year).min()?;
        let last_year = entry.seasons.iter().map(|s| s.year).max()?;
        let flag = flags::league_symbol(&entry.country.name, entry.country.code.as_deref());
        Some(League {
            id: entry.league.id,
            name: entry.league.name,
            country: entry.country.name,
            flag,
            first_year,
            last_year,
        })
    }
}

// Wire shapes of the sports-data API responses.

#[derive(Debug, Deserialize)]
pub struct LeagueEntry {
    pub league: LeagueInfo,
    pub country: CountryInfo,
    #[serde(default)]
    pub seasons: Vec<SeasonInfo>,
}

#[derive(Debug, Deserialize)]
pub struct LeagueInfo {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CountryInfo {
    pub name: String,
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeasonInfo {
    pub year: u16,
}

#[derive(Debug, Deserialize)]
pub struct TeamEntry {
    pub team: TeamInfo,
}

#[derive(Debug, Deserialize)]
pub struct TeamInfo {
    pub id: u64,
    pub name: String,
}

/// Configuration for the sports-data API client
#[derive(Clone, Debug)]
pub struct SportsApiConfig {
    pub base_url: String,
    pub api_key: String,
    /// Header the key is sent in; part of configuration, not logic
    pub key_header: String,
}

impl SportsApiConfig {
    /// Read the client configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SPORTS_API_KEY").context("SPORTS_API_KEY must be set")?;
        let base_url = std::env::var("SPORTS_API_URL")
            .unwrap_or_else(|_| "https://v3.football.api-sports.io".to_string());
        Ok(Self {
            base_url,
            api_key,
            key_header: "x-apisports-key".to_string(),
        })
    }
}

/// Read-only HTTP client for the sports-data API
#[derive(Clone, Debug)]
pub struct SportsApiClient {
    http: reqwest::Client,
    config: SportsApiConfig,
}

impl SportsApiClient {
    pub fn new(config: SportsApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the league list and build the startup catalog.
    ///
    /// Called once from `main`; no retry loop. The caller decides what an
    /// empty catalog means for the rest of the process.
    pub async fn load_leagues(&self) -> Result<Catalog> {
        let url = format!("{}/leagues", self.config.base_url);
        debug!(url = %url, "Fetching league list");

        let entries: Vec<LeagueEntry> = self
            .http
            .get(&url)
            .header(&self.config.key_header, &self.config.api_key)
            .send()
            .await
            .context("league request failed")?
            .error_for_status()
            .context("league request rejected")?
            .json()
            .await
            .context("league response had an unexpected shape")?;

        let catalog = Catalog::from_entries(entries);
        info!(league_count = catalog.leagues().len(), "League catalog loaded");
        Ok(catalog)
    }

    /// Fetch the teams playing the given league season, in API order.
    pub async fn load_teams(&self, league_id: u64, season: u16) -> Result<Vec<Team>> {
        let url = format!("{}/teams", self.config.base_url);
        debug!(url = %url, league_id, season, "Fetching team list");

        let entries: Vec<TeamEntry> = self
            .http
            .get(&url)
            .header(&self.config.key_header, &self.config.api_key)
            .query(&[("league", league_id.to_string()), ("season", season.to_string())])
            .send()
            .await
            .context("team request failed")?
            .error_for_status()
            .context("team request rejected")?
            .json()
            .await
            .context("team response had an unexpected shape")?;

        Ok(entries
            .into_iter()
            .map(|entry| Team {
                id: entry.team.id,
                name: entry.team.name,
            })
            .collect())
    }
}
