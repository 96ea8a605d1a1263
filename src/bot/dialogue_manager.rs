//! Dialogue Manager module for handling dialogue state transitions
//!
//! Each transition validates the current state before committing, returning
//! the next state together with the reply to send. Keeping these functions
//! free of transport and network concerns lets the whole flow run in tests;
//! the handlers only fetch teams, persist the returned state and send the
//! reply.

use teloxide::types::InlineKeyboardMarkup;

use crate::catalog::{Catalog, Team};
use crate::dialogue::SelectionState;
use crate::errors::SelectionError;
use crate::localization::{t, t_args};

use super::ui_builder;

/// What an incoming text message asks for. Routing ignores dialogue state:
/// free text is echoed back verbatim wherever the flow stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand<'a> {
    /// `/start`: open (or reopen) the league menu
    Start,
    /// `/help`: explain the flow
    Help,
    /// Anything else is echoed back unchanged
    Echo(&'a str),
}

/// Route an incoming text message to its handling.
pub fn route_text(text: &str) -> TextCommand<'_> {
    match text {
        "/start" => TextCommand::Start,
        "/help" => TextCommand::Help,
        other => TextCommand::Echo(other),
    }
}

/// Outbound prompt produced by a transition
#[derive(Clone, Debug)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl Reply {
    fn with_keyboard(text: String, keyboard: InlineKeyboardMarkup) -> Self {
        Self {
            text,
            keyboard: Some(keyboard),
        }
    }
}

type Transition = Result<(SelectionState, Reply), SelectionError>;

/// Start (or restart) the flow: greet and show the league menu.
///
/// Valid from any state; prior selections are discarded.
pub fn begin(catalog: &Catalog) -> Transition {
    if catalog.is_empty() {
        return Err(SelectionError::CatalogUnavailable);
    }

    let text = format!("{}\n\n{}", t("greeting"), t("choose-league"));
    let keyboard = ui_builder::league_keyboard(catalog.leagues());
    Ok((
        SelectionState::AwaitingLeague,
        Reply::with_keyboard(text, keyboard),
    ))
}

/// League tapped on the league menu: store it and show its season range.
pub fn choose_league(state: SelectionState, id: u64, name: String, catalog: &Catalog) -> Transition {
    match state {
        SelectionState::AwaitingLeague => {
            let league = catalog.find_league_by_id(id)?;
            let keyboard = ui_builder::season_keyboard(league.first_year, league.last_year);
            let text = t_args("choose-season", &[("league", name.as_str())]);
            Ok((
                SelectionState::AwaitingSeason {
                    league_id: id,
                    league_name: name,
                },
                Reply::with_keyboard(text, keyboard),
            ))
        }
        _ => Err(SelectionError::InvalidTransition("league")),
    }
}

/// Season tapped: store it together with the freshly fetched team list and
/// show the first-team menu. The handler fetches the teams beforehand so a
/// failed fetch never advances the state.
pub fn choose_season(state: SelectionState, year: u16, teams: Vec<Team>) -> Transition {
    match state {
        SelectionState::AwaitingSeason {
            league_id,
            league_name,
        } => {
            let keyboard = ui_builder::team_keyboard(&teams, ui_builder::TeamSlot::First);
            let season = year.to_string();
            let text = t_args("choose-first-team", &[("season", season.as_str())]);
            Ok((
                SelectionState::AwaitingFirstTeam {
                    league_id,
                    league_name,
                    season: year,
                    teams,
                },
                Reply::with_keyboard(text, keyboard),
            ))
        }
        _ => Err(SelectionError::InvalidTransition("season")),
    }
}

/// First team tapped: store it and re-render the same list for the second pick.
pub fn choose_first_team(state: SelectionState, id: u64, name: String) -> Transition {
    match state {
        SelectionState::AwaitingFirstTeam {
            league_id,
            league_name,
            season,
            teams,
        } => {
            let keyboard = ui_builder::team_keyboard(&teams, ui_builder::TeamSlot::Second);
            let text = t_args("choose-second-team", &[("team", name.as_str())]);
            Ok((
                SelectionState::AwaitingSecondTeam {
                    league_id,
                    league_name,
                    season,
                    team1_id: id,
                    team1_name: name,
                    teams,
                },
                Reply::with_keyboard(text, keyboard),
            ))
        }
        _ => Err(SelectionError::InvalidTransition("team1")),
    }
}

/// Second team tapped: store it and send the summary with the confirmation
/// button. Terminal state of the flow.
pub fn choose_second_team(state: SelectionState, id: u64, name: String) -> Transition {
    match state {
        SelectionState::AwaitingSecondTeam {
            league_id,
            league_name,
            season,
            team1_id,
            team1_name,
            teams: _,
        } => {
            let season_text = season.to_string();
            let text = t_args(
                "summary",
                &[
                    ("league", league_name.as_str()),
                    ("season", season_text.as_str()),
                    ("team1", team1_name.as_str()),
                    ("team2", name.as_str()),
                ],
            );
            let keyboard = ui_builder::find_match_keyboard();
            Ok((
                SelectionState::ReadyToSearch {
                    league_id,
                    league_name,
                    season,
                    team1_id,
                    team1_name,
                    team2_id: id,
                    team2_name: name,
                },
                Reply::with_keyboard(text, keyboard),
            ))
        }
        _ => Err(SelectionError::InvalidTransition("team2")),
    }
}

/// "Find match!" tapped on the summary: acknowledge the search.
pub fn confirm_search(state: SelectionState) -> Transition {
    match state {
        SelectionState::ReadyToSearch {
            ref league_name,
            season,
            ref team1_name,
            ref team2_name,
            ..
        } => {
            let season_text = season.to_string();
            let text = t_args(
                "search-started",
                &[
                    ("league", league_name.as_str()),
                    ("season", season_text.as_str()),
                    ("team1", team1_name.as_str()),
                    ("team2", team2_name.as_str()),
                ],
            );
            let reply = Reply {
                text,
                keyboard: None,
            };
            Ok((state, reply))
        }
        _ => Err(SelectionError::InvalidTransition("findmatch")),
    }
}

/// Localized reply for a failed transition, sent to the chat that caused it.
pub fn error_reply(error: &SelectionError) -> String {
    match error {
        SelectionError::CatalogUnavailable => t("catalog-unavailable"),
        SelectionError::LeagueNotFound(_) => t("league-missing"),
        SelectionError::InvalidTransition(_) => t("invalid-transition"),
        SelectionError::UpstreamFetchFailed(_) => t("teams-fetch-failed"),
    }
}
