use crate::espn::{EspnCompetition, EspnEventDetail, EspnRef, EspnTeam, EventsResponse};
use crate::{Competitor, GameStatus, ResolvedEvent, Side};
use chrono::{DateTime, Datelike, Utc};
use log::{debug, warn};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_CORE_V2: &str = "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl";
const EVENTS_PAGE_LIMIT: u32 = 1000;

/// Sleep between events so the sequential resolve loop stays inside ESPN's
/// informal rate budget.
const EVENT_PACING: Duration = Duration::from_millis(100);

/// NFL schedule client backed by ESPN's reference-linked core API.
#[derive(Debug, Clone)]
pub struct NflApi {
    client: Client,
    base_url: String,
    season: u16,
    timeout: Duration,
}

impl Default for NflApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("nflsched/0.1 (schedule grid generator)")
                .build()
                .unwrap_or_default(),
            base_url: ESPN_CORE_V2.to_owned(),
            season: season_from_env().unwrap_or_else(|| season_year(Utc::now()) as u16),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    /// Event has no competition reference to follow.
    MissingCompetition,
    /// Competition is not a 1-vs-1 matchup (carries the competitor count).
    NotHeadToHead(usize),
    /// Competitor carries no recognizable home/away designation.
    UnknownSide(String),
    /// Competitor has no team reference to follow.
    MissingTeamRef,
    /// Team record has no display name.
    MissingTeamName,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::MissingCompetition => write!(f, "event has no competition reference"),
            ApiError::NotHeadToHead(n) => {
                write!(f, "competition has {n} competitors, expected 2")
            }
            ApiError::UnknownSide(s) => write!(f, "unrecognized homeAway value: {s:?}"),
            ApiError::MissingTeamRef => write!(f, "competitor has no team reference"),
            ApiError::MissingTeamName => write!(f, "team record has no display name"),
        }
    }
}

impl std::error::Error for ApiError {}

impl NflApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client pointed at an arbitrary base URL for a fixed season.
    /// Used by tests to target a local mock server.
    pub fn with_base_url(base_url: impl Into<String>, season: u16) -> Self {
        Self {
            base_url: base_url.into(),
            season,
            ..Self::default()
        }
    }

    pub fn season(&self) -> u16 {
        self.season
    }

    /// Fetch the root list of event references for the regular season.
    /// Failure here is fatal to the run; there is nothing to aggregate.
    pub async fn fetch_events(&self) -> ApiResult<Vec<EspnRef>> {
        let url = format!(
            "{}/seasons/{}/types/2/events?limit={EVENTS_PAGE_LIMIT}",
            self.base_url, self.season
        );
        let raw: EventsResponse = self.get(&url).await?;
        Ok(raw.items.unwrap_or_default())
    }

    /// Resolve every event reference sequentially, in root-list order.
    ///
    /// Per-event failures (transport or shape) are logged and skipped; they
    /// never abort the run. A fixed pacing sleep between events keeps the
    /// request rate within budget.
    pub async fn resolve_events(&self, refs: &[EspnRef]) -> Vec<ResolvedEvent> {
        let mut resolved = Vec::with_capacity(refs.len());
        for (i, event_ref) in refs.iter().enumerate() {
            match self.resolve_event(event_ref).await {
                Ok(event) => {
                    debug!("resolved event {}/{}: week {}", i + 1, refs.len(), event.week);
                    resolved.push(event);
                }
                Err(err) => warn!("skipping event {}/{}: {err}", i + 1, refs.len()),
            }
            if i + 1 < refs.len() {
                tokio::time::sleep(EVENT_PACING).await;
            }
        }
        resolved
    }

    /// Materialize one event by following its reference chain:
    /// event detail → competition → each competitor's team.
    ///
    /// Each step is an independent fetch and an explicit abort point; any
    /// error means this one event contributes nothing.
    pub async fn resolve_event(&self, event_ref: &EspnRef) -> ApiResult<ResolvedEvent> {
        let detail: EspnEventDetail = self.get(&event_ref.href).await?;

        // Missing week numbers default to week 1 (explicit policy, not an error).
        let week = detail.week.as_ref().and_then(|w| w.number).unwrap_or(1);

        let competition_ref = detail
            .competitions
            .as_deref()
            .unwrap_or_default()
            .first()
            .cloned()
            .ok_or(ApiError::MissingCompetition)?;
        let competition: EspnCompetition = self.get(&competition_ref.href).await?;

        let status = competition
            .status
            .as_ref()
            .and_then(|s| s.status_type.as_ref())
            .and_then(|t| t.name.as_deref())
            .map(parse_status)
            .unwrap_or_default();

        let entries = competition.competitors.unwrap_or_default();
        if entries.len() != 2 {
            return Err(ApiError::NotHeadToHead(entries.len()));
        }

        let mut competitors = Vec::with_capacity(2);
        for entry in &entries {
            let side = match entry.home_away.as_deref() {
                Some("home") => Side::Home,
                Some("away") => Side::Away,
                other => {
                    return Err(ApiError::UnknownSide(other.unwrap_or("").to_owned()));
                }
            };
            let team_ref = entry.team.as_ref().ok_or(ApiError::MissingTeamRef)?;
            let team: EspnTeam = self.get(&team_ref.href).await?;
            let team_name = team.display_name.ok_or(ApiError::MissingTeamName)?;
            competitors.push(Competitor { side, team_name, winner: entry.winner });
        }

        Ok(ResolvedEvent { week, status, competitors })
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

/// Map ESPN status names to GameStatus. STATUS_FINAL_OT counts as completed;
/// everything unrecognized is treated as not yet played.
pub fn parse_status(s: &str) -> GameStatus {
    match s {
        "STATUS_IN_PROGRESS" | "STATUS_HALFTIME" | "STATUS_END_PERIOD" => GameStatus::InProgress,
        "STATUS_FINAL" | "STATUS_FINAL_OT" => GameStatus::Final,
        "STATUS_POSTPONED" | "STATUS_CANCELED" | "STATUS_SUSPENDED" => GameStatus::Postponed,
        _ => GameStatus::Scheduled,
    }
}

fn season_from_env() -> Option<u16> {
    std::env::var("NFLSCHED_SEASON")
        .ok()
        .and_then(|s| s.trim().parse().ok())
}

/// The NFL labels a season by the calendar year it kicks off in, so queries
/// in January and February (playoffs, Super Bowl) target the previous year.
fn season_year(now: DateTime<Utc>) -> i32 {
    if now.month() <= 2 { now.year() - 1 } else { now.year() }
}
