//! Selection dialogue module for handling conversation state with users.
//!
//! One [`SelectionState`] record exists per chat, held in teloxide's
//! `InMemStorage` and looked up by chat id. The flow only moves forward;
//! every variant carries the selections made so far, so a season can never
//! exist without its league nor a second team without the first. `/start`
//! resets the record to a fresh league menu. State lives for the life of the
//! process; there is no expiry and no persistence across restarts.
//!
//! Updates replace the whole record per event. Two events racing on the same
//! chat resolve as last-write-wins, which is accepted for this flow.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::catalog::Team;

/// Per-chat conversation state, advancing strictly forward
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Idle,
    /// League menu is on screen
    AwaitingLeague,
    /// Season menu is on screen
    AwaitingSeason { league_id: u64, league_name: String },
    /// First-team menu is on screen; the fetched team list rides along so
    /// concurrent chats never observe each other's teams
    AwaitingFirstTeam {
        league_id: u64,
        league_name: String,
        season: u16,
        teams: Vec<Team>,
    },
    /// Second-team menu is on screen (same team list, re-tagged)
    AwaitingSecondTeam {
        league_id: u64,
        league_name: String,
        season: u16,
        team1_id: u64,
        team1_name: String,
        teams: Vec<Team>,
    },
    /// Terminal: all four selections made, summary with the confirmation
    /// button has been sent
    ReadyToSearch {
        league_id: u64,
        league_name: String,
        season: u16,
        team1_id: u64,
        team1_name: String,
        team2_id: u64,
        team2_name: String,
    },
}

impl SelectionState {
    /// League id a pending season tap would apply to, if the flow is at
    /// the season menu.
    pub fn awaiting_season_league(&self) -> Option<u64> {
        match self {
            SelectionState::AwaitingSeason { league_id, .. } => Some(*league_id),
            _ => None,
        }
    }
}

/// Type alias for our selection dialogue
pub type SelectionDialogue = Dialogue<SelectionState, InMemStorage<SelectionState>>;
