//! Excel grid renderer: one row per roster team, one column per week,
//! cell color keyed by outcome, BYE cells where a team has no game.

use nfl_api::{GameOutcome, LeagueSchedule, TeamSchedule};
use rust_xlsxwriter::{Format, FormatAlign, Workbook, XlsxError};
use std::path::Path;

// Cell background colors (RGB).
const WIN_COLOR: u32 = 0xD4EDDA; // light green
const LOSS_COLOR: u32 = 0xF5C6CB; // light red
const TIE_COLOR: u32 = 0xFFF3CD; // light yellow
const NOT_PLAYED_COLOR: u32 = 0xE9ECEF; // light gray, also BYE
const HEADER_COLOR: u32 = 0x4A5568; // dark gray

const TEAM_COLUMN_WIDTH: f64 = 25.0;
const WEEK_COLUMN_WIDTH: f64 = 22.0;
const HEADER_ROW_HEIGHT: f64 = 25.0;

/// Write the finished schedule as a color-coded xlsx grid.
///
/// Rows follow roster order; columns run from week 1 to the highest week
/// with a recorded game anywhere in the schedule.
pub fn write_schedule(
    schedule: &LeagueSchedule,
    roster: &[&str],
    season: u16,
    path: &Path,
) -> Result<(), XlsxError> {
    let max_week = schedule.max_week();

    let mut workbook = Workbook::new();
    let sheet = workbook
        .add_worksheet()
        .set_name(format!("NFL {season} Season"))?;

    let header = Format::new()
        .set_bold()
        .set_font_color(0xFFFFFF)
        .set_background_color(HEADER_COLOR)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let team_name = Format::new().set_bold().set_align(FormatAlign::VerticalCenter);

    sheet.write_with_format(0, 0, "Team", &header)?;
    for week in 1..=max_week {
        sheet.write_with_format(0, week as u16, format!("Week {week}"), &header)?;
    }
    sheet.set_row_height(0, HEADER_ROW_HEIGHT)?;

    let empty = TeamSchedule::new();
    for (i, team) in roster.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_with_format(row, 0, *team, &team_name)?;

        let games = schedule.team(team).unwrap_or(&empty);
        for week in 1..=max_week {
            let (text, color) = cell_for(games, week);
            let format = Format::new()
                .set_background_color(color)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter);
            sheet.write_with_format(row, week as u16, text, &format)?;
        }
    }

    sheet.set_column_width(0, TEAM_COLUMN_WIDTH)?;
    for week in 1..=max_week {
        sheet.set_column_width(week as u16, WEEK_COLUMN_WIDTH)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Text and background color for one (team, week) cell.
fn cell_for(games: &TeamSchedule, week: u32) -> (&str, u32) {
    match games.get(&week) {
        Some(game) => (game.opponent.as_str(), outcome_color(game.outcome)),
        None => ("BYE", NOT_PLAYED_COLOR),
    }
}

fn outcome_color(outcome: GameOutcome) -> u32 {
    match outcome {
        GameOutcome::Win => WIN_COLOR,
        GameOutcome::Loss => LOSS_COLOR,
        GameOutcome::Tie => TIE_COLOR,
        GameOutcome::NotPlayed => NOT_PLAYED_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfl_api::GameResult;

    fn games_with(week: u32, opponent: &str, outcome: GameOutcome) -> TeamSchedule {
        let mut games = TeamSchedule::new();
        games.insert(week, GameResult { opponent: opponent.into(), outcome });
        games
    }

    #[test]
    fn game_cells_show_the_opponent_and_outcome_color() {
        let games = games_with(3, "vs Detroit Lions", GameOutcome::Win);
        assert_eq!(cell_for(&games, 3), ("vs Detroit Lions", WIN_COLOR));

        let games = games_with(4, "@ Chicago Bears", GameOutcome::Loss);
        assert_eq!(cell_for(&games, 4), ("@ Chicago Bears", LOSS_COLOR));

        let games = games_with(5, "vs Green Bay Packers", GameOutcome::Tie);
        assert_eq!(cell_for(&games, 5), ("vs Green Bay Packers", TIE_COLOR));
    }

    #[test]
    fn unplayed_games_and_byes_share_the_gray_category() {
        let games = games_with(10, "vs Minnesota Vikings", GameOutcome::NotPlayed);
        assert_eq!(cell_for(&games, 10), ("vs Minnesota Vikings", NOT_PLAYED_COLOR));
        // No entry for week 11: bye.
        assert_eq!(cell_for(&games, 11), ("BYE", NOT_PLAYED_COLOR));
    }

    #[test]
    fn writes_a_grid_file_for_a_small_schedule() {
        use nfl_api::schedule::{NFL_TEAMS, aggregate};
        use nfl_api::{Competitor, GameStatus, ResolvedEvent, Side};

        let events = vec![ResolvedEvent {
            week: 1,
            status: GameStatus::Final,
            competitors: vec![
                Competitor { side: Side::Home, team_name: "Chicago Bears".into(), winner: Some(true) },
                Competitor { side: Side::Away, team_name: "Detroit Lions".into(), winner: Some(false) },
            ],
        }];
        let schedule = aggregate(&NFL_TEAMS, events);

        let dir = std::env::temp_dir().join("nflsched-sheet-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("grid.xlsx");
        write_schedule(&schedule, &NFL_TEAMS, 2026, &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
        std::fs::remove_dir_all(&dir).ok();
    }
}
