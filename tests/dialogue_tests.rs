use anyhow::Result;

use matchday::bot::dialogue_manager::{
    begin, choose_first_team, choose_league, choose_second_team, choose_season, confirm_search,
    error_reply, route_text, TextCommand,
};
use matchday::catalog::{Catalog, League, Team};
use matchday::dialogue::SelectionState;
use matchday::errors::SelectionError;
use matchday::localization::init_localization;

fn setup_localization() {
    // Initialize localization if not already done
    let _ = init_localization();
}

fn fixture_catalog() -> Catalog {
    Catalog::new(vec![League {
        id: 5,
        name: "L".to_string(),
        country: "England".to_string(),
        flag: "\u{1F1EC}\u{1F1E7}".to_string(),
        first_year: 2019,
        last_year: 2022,
    }])
}

fn fixture_teams() -> Vec<Team> {
    vec![
        Team {
            id: 10,
            name: "A".to_string(),
        },
        Team {
            id: 11,
            name: "B".to_string(),
        },
    ]
}

/// A season tap with no league stored is rejected, not a crash
#[test]
fn test_season_tap_without_league_is_invalid() {
    setup_localization();

    let result = choose_season(SelectionState::Idle, 2021, fixture_teams());
    assert_eq!(
        result.err(),
        Some(SelectionError::InvalidTransition("season"))
    );
}

/// Team taps out of order are rejected as well
#[test]
fn test_team_taps_require_their_preconditions() {
    setup_localization();

    let early_first = choose_first_team(SelectionState::AwaitingLeague, 10, "A".to_string());
    assert_eq!(
        early_first.err(),
        Some(SelectionError::InvalidTransition("team1"))
    );

    let early_second = choose_second_team(SelectionState::Idle, 11, "B".to_string());
    assert_eq!(
        early_second.err(),
        Some(SelectionError::InvalidTransition("team2"))
    );

    let early_confirm = confirm_search(SelectionState::AwaitingLeague);
    assert_eq!(
        early_confirm.err(),
        Some(SelectionError::InvalidTransition("findmatch"))
    );
}

/// Picking a league that is not in the catalog fails with NotFound
#[test]
fn test_unknown_league_is_not_found() {
    setup_localization();

    let result = choose_league(
        SelectionState::AwaitingLeague,
        999,
        "Ghost League".to_string(),
        &fixture_catalog(),
    );
    assert_eq!(result.err(), Some(SelectionError::LeagueNotFound(999)));
}

/// An empty catalog means the flow cannot start
#[test]
fn test_begin_with_empty_catalog_is_unavailable() {
    setup_localization();

    let result = begin(&Catalog::default());
    assert_eq!(result.err(), Some(SelectionError::CatalogUnavailable));

    let message = error_reply(&SelectionError::CatalogUnavailable);
    assert!(message.contains("try again later"));
}

/// `/start` resets the flow from any state, terminal included
#[test]
fn test_begin_resets_a_finished_flow() -> Result<()> {
    setup_localization();

    let (next, reply) = begin(&fixture_catalog())?;
    assert!(matches!(next, SelectionState::AwaitingLeague));
    assert!(reply.keyboard.is_some());
    Ok(())
}

/// Full flow: league L (id 5), season 2021, team A (id 10), team B (id 11)
#[test]
fn test_full_selection_flow() -> Result<()> {
    setup_localization();
    let catalog = fixture_catalog();

    let (state, reply) = begin(&catalog)?;
    assert!(reply.text.contains("Choose a league"));

    let (state, reply) = choose_league(state, 5, "L".to_string(), &catalog)?;
    assert!(reply.text.contains("L"));
    let season_rows = &reply.keyboard.expect("season menu expected").inline_keyboard;
    // Ascending inclusive year range of the league
    assert_eq!(season_rows.first().map(|row| row[0].text.as_str()), Some("2019"));
    assert_eq!(season_rows.last().map(|row| row[0].text.as_str()), Some("2022"));

    let (state, reply) = choose_season(state, 2021, fixture_teams())?;
    assert!(reply.text.contains("2021"));
    assert!(reply.keyboard.is_some());

    let (state, reply) = choose_first_team(state, 10, "A".to_string())?;
    assert!(reply.text.contains("A"));
    assert!(reply.keyboard.is_some());

    let (state, reply) = choose_second_team(state, 11, "B".to_string())?;

    // Stored record carries every selection
    match &state {
        SelectionState::ReadyToSearch {
            league_id,
            league_name,
            season,
            team1_id,
            team1_name,
            team2_id,
            team2_name,
        } => {
            assert_eq!(*league_id, 5);
            assert_eq!(league_name, "L");
            assert_eq!(*season, 2021);
            assert_eq!(*team1_id, 10);
            assert_eq!(team1_name, "A");
            assert_eq!(*team2_id, 11);
            assert_eq!(team2_name, "B");
        }
        other => panic!("Expected terminal state, got {other:?}"),
    }

    // Summary shows all four display values with a single confirmation button
    assert!(reply.text.contains("L"));
    assert!(reply.text.contains("2021"));
    assert!(reply.text.contains("A"));
    assert!(reply.text.contains("B"));
    let keyboard = reply.keyboard.expect("confirmation keyboard expected");
    assert_eq!(keyboard.inline_keyboard.len(), 1);
    assert_eq!(keyboard.inline_keyboard[0].len(), 1);
    assert_eq!(keyboard.inline_keyboard[0][0].text, "Find match!");

    // Confirmation acknowledges and keeps the terminal state
    let (state, reply) = confirm_search(state)?;
    assert!(matches!(state, SelectionState::ReadyToSearch { .. }));
    assert!(reply.text.contains("A"));
    assert!(reply.text.contains("B"));
    assert!(reply.keyboard.is_none());

    Ok(())
}

/// Unrecognized free text is echoed back unchanged; routing never looks at
/// the dialogue state, so the echo holds at any point of the flow
#[test]
fn test_free_text_is_echoed_verbatim() {
    assert_eq!(route_text("hello there"), TextCommand::Echo("hello there"));
    assert_eq!(
        route_text("league_39_Premier League"),
        TextCommand::Echo("league_39_Premier League")
    );
    // Near-commands are still free text
    assert_eq!(route_text("/started"), TextCommand::Echo("/started"));
    assert_eq!(route_text(" /start"), TextCommand::Echo(" /start"));
    assert_eq!(route_text(""), TextCommand::Echo(""));
    // Only the exact commands leave the echo path
    assert_eq!(route_text("/start"), TextCommand::Start);
    assert_eq!(route_text("/help"), TextCommand::Help);
}

/// A failed team fetch is surfaced to the user without advancing the state
#[test]
fn test_error_replies_are_user_readable() {
    setup_localization();

    let fetch_failed = SelectionError::UpstreamFetchFailed("timeout".to_string());
    assert!(error_reply(&fetch_failed).contains("fetch the teams"));
    assert!(error_reply(&SelectionError::InvalidTransition("season")).contains("/start"));
    assert!(error_reply(&SelectionError::LeagueNotFound(5)).contains("/start"));
}

/// Error display formatting for logs
#[test]
fn test_error_display_formatting() {
    let display = format!("{}", SelectionError::LeagueNotFound(39));
    assert_eq!(display, "League 39 not found in catalog");

    let display = format!("{}", SelectionError::InvalidTransition("season"));
    assert!(display.contains("season"));
}
