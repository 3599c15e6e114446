//! The pure fold from resolved events into the per-team weekly grid.
//! No I/O here; everything is deterministic in the order events arrive.

use crate::{GameOutcome, GameResult, GameStatus, LeagueSchedule, ResolvedEvent, Side};

/// The 32 franchises, as ESPN spells their display names.
pub const NFL_TEAMS: [&str; 32] = [
    "Arizona Cardinals",
    "Atlanta Falcons",
    "Baltimore Ravens",
    "Buffalo Bills",
    "Carolina Panthers",
    "Chicago Bears",
    "Cincinnati Bengals",
    "Cleveland Browns",
    "Dallas Cowboys",
    "Denver Broncos",
    "Detroit Lions",
    "Green Bay Packers",
    "Houston Texans",
    "Indianapolis Colts",
    "Jacksonville Jaguars",
    "Kansas City Chiefs",
    "Las Vegas Raiders",
    "Los Angeles Chargers",
    "Los Angeles Rams",
    "Miami Dolphins",
    "Minnesota Vikings",
    "New England Patriots",
    "New Orleans Saints",
    "New York Giants",
    "New York Jets",
    "Philadelphia Eagles",
    "Pittsburgh Steelers",
    "San Francisco 49ers",
    "Seattle Seahawks",
    "Tampa Bay Buccaneers",
    "Tennessee Titans",
    "Washington Commanders",
];

/// Fold resolved events into a schedule seeded with every roster team.
///
/// Events are consumed in iteration order; a later event for the same
/// (team, week) overwrites the earlier one. Teams not in the roster are
/// silently dropped (upstream naming drift must not poison the grid).
pub fn aggregate<I>(roster: &[&str], events: I) -> LeagueSchedule
where
    I: IntoIterator<Item = ResolvedEvent>,
{
    let mut schedule = LeagueSchedule::new(roster);
    for event in events {
        fold_event(&mut schedule, &event);
    }
    schedule
}

/// Write one event's two symmetric entries, or nothing at all.
fn fold_event(schedule: &mut LeagueSchedule, event: &ResolvedEvent) {
    let (Some(home), Some(away)) = (event.side(Side::Home), event.side(Side::Away)) else {
        return;
    };

    let (home_outcome, away_outcome) = classify(
        event.status,
        home.winner.unwrap_or(false),
        away.winner.unwrap_or(false),
    );

    schedule.record(
        &home.team_name,
        event.week,
        GameResult {
            opponent: format!("vs {}", away.team_name),
            outcome: home_outcome,
        },
    );
    schedule.record(
        &away.team_name,
        event.week,
        GameResult {
            opponent: format!("@ {}", home.team_name),
            outcome: away_outcome,
        },
    );
}

/// The four-way outcome mapping, total over its inputs.
///
/// A final game with no winner flag on either side stays NotPlayed; the
/// upstream data is ambiguous there and a real tie sets both flags.
pub fn classify(status: GameStatus, home_winner: bool, away_winner: bool) -> (GameOutcome, GameOutcome) {
    if !status.is_completed() {
        return (GameOutcome::NotPlayed, GameOutcome::NotPlayed);
    }
    match (home_winner, away_winner) {
        (true, true) => (GameOutcome::Tie, GameOutcome::Tie),
        (true, false) => (GameOutcome::Win, GameOutcome::Loss),
        (false, true) => (GameOutcome::Loss, GameOutcome::Win),
        (false, false) => (GameOutcome::NotPlayed, GameOutcome::NotPlayed),
    }
}
