pub mod client;
pub mod espn;
pub mod schedule;

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of ESPN wire format
// ---------------------------------------------------------------------------

/// Which side of the matchup a competitor plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Scheduled,
    InProgress,
    Final,
    Postponed,
}

impl GameStatus {
    /// Only a final game carries a real win/loss/tie result.
    pub fn is_completed(&self) -> bool {
        matches!(self, GameStatus::Final)
    }
}

/// One side's record within a resolved event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    pub side: Side,
    pub team_name: String,
    pub winner: Option<bool>, // absent on games that have not been played
}

/// A fully materialized event: week, status, and both competitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEvent {
    pub week: u32,
    pub status: GameStatus,
    pub competitors: Vec<Competitor>,
}

impl ResolvedEvent {
    pub fn side(&self, side: Side) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.side == side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Tie,
    NotPlayed,
}

/// One cell of the grid: who the team played and how it went.
/// Directionality lives in the opponent string ("vs X" at home, "@ X" away).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub opponent: String,
    pub outcome: GameOutcome,
}

/// Week number → result. Sparse: a week with no entry is a bye.
pub type TeamSchedule = BTreeMap<u32, GameResult>;

/// The full grid, keyed by roster team name. Every roster team has an entry
/// from construction onward, even if its season is all byes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueSchedule {
    teams: BTreeMap<String, TeamSchedule>,
}

impl LeagueSchedule {
    /// Create an empty schedule with one (empty) entry per roster team.
    pub fn new(roster: &[&str]) -> Self {
        Self {
            teams: roster
                .iter()
                .map(|team| (team.to_string(), TeamSchedule::new()))
                .collect(),
        }
    }

    /// Record a result for a roster team. Returns false (and stores nothing)
    /// when the team name is not in the roster; a later result for the same
    /// (team, week) overwrites an earlier one.
    pub fn record(&mut self, team: &str, week: u32, result: GameResult) -> bool {
        match self.teams.get_mut(team) {
            Some(games) => {
                games.insert(week, result);
                true
            }
            None => false,
        }
    }

    pub fn team(&self, name: &str) -> Option<&TeamSchedule> {
        self.teams.get(name)
    }

    /// Highest week number with a recorded game, 0 when nothing is recorded.
    pub fn max_week(&self) -> u32 {
        self.teams
            .values()
            .filter_map(|games| games.keys().next_back().copied())
            .max()
            .unwrap_or(0)
    }

    /// Total number of recorded (team, week) cells.
    pub fn game_count(&self) -> usize {
        self.teams.values().map(BTreeMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(opponent: &str, outcome: GameOutcome) -> GameResult {
        GameResult { opponent: opponent.into(), outcome }
    }

    #[test]
    fn new_schedule_has_an_entry_for_every_roster_team() {
        let schedule = LeagueSchedule::new(&["Chicago Bears", "Detroit Lions"]);
        assert!(schedule.team("Chicago Bears").is_some());
        assert!(schedule.team("Detroit Lions").is_some());
        assert!(schedule.team("Chicago Bears").unwrap().is_empty());
        assert_eq!(schedule.max_week(), 0);
    }

    #[test]
    fn record_rejects_teams_outside_the_roster() {
        let mut schedule = LeagueSchedule::new(&["Chicago Bears"]);
        assert!(!schedule.record("London Monarchs", 1, result("vs X", GameOutcome::Win)));
        assert_eq!(schedule.game_count(), 0);
    }

    #[test]
    fn record_overwrites_duplicate_team_week_pairs() {
        let mut schedule = LeagueSchedule::new(&["Chicago Bears"]);
        schedule.record("Chicago Bears", 3, result("vs Detroit Lions", GameOutcome::Loss));
        schedule.record("Chicago Bears", 3, result("@ Green Bay Packers", GameOutcome::Win));
        let games = schedule.team("Chicago Bears").unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[&3].opponent, "@ Green Bay Packers");
        assert_eq!(games[&3].outcome, GameOutcome::Win);
    }

    #[test]
    fn max_week_spans_all_teams() {
        let mut schedule = LeagueSchedule::new(&["Chicago Bears", "Detroit Lions"]);
        schedule.record("Chicago Bears", 2, result("vs A", GameOutcome::NotPlayed));
        schedule.record("Detroit Lions", 18, result("@ B", GameOutcome::NotPlayed));
        assert_eq!(schedule.max_week(), 18);
    }

    #[test]
    fn side_lookup_finds_competitors_by_side() {
        let event = ResolvedEvent {
            week: 1,
            status: GameStatus::Scheduled,
            competitors: vec![
                Competitor { side: Side::Away, team_name: "Away Team".into(), winner: None },
                Competitor { side: Side::Home, team_name: "Home Team".into(), winner: None },
            ],
        };
        assert_eq!(event.side(Side::Home).unwrap().team_name, "Home Team");
        assert_eq!(event.side(Side::Away).unwrap().team_name, "Away Team");
    }
}
