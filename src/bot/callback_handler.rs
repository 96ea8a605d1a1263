//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, warn};

// Import callback token types
use crate::callback::CallbackToken;

// Import catalog types
use crate::catalog::{Catalog, SportsApiClient};

// Import dialogue types
use crate::dialogue::{SelectionDialogue, SelectionState};

// Import error types
use crate::errors::SelectionError;

// Import dialogue manager functions
use super::dialogue_manager;

// Import reply plumbing
use super::send_reply;

/// Handle callback queries from inline keyboards.
///
/// Dispatches on the parsed token variant; a tap whose precondition state is
/// missing gets a guidance reply and never touches the stored record. Every
/// failure stays within this chat's handling.
pub async fn callback_handler(
    bot: Bot,
    q: teloxide::types::CallbackQuery,
    catalog: Arc<Catalog>,
    client: Arc<SportsApiClient>,
    dialogue: SelectionDialogue,
) -> Result<()> {
    debug!(user_id = %q.from.id, "Received callback query from user");

    if let Some(msg) = &q.message {
        let chat_id = msg.chat().id;
        let data = q.data.as_deref().unwrap_or("");

        match CallbackToken::parse(data) {
            Some(token) => {
                let state = dialogue.get().await?.unwrap_or_default();
                match apply(state, token, &catalog, &client).await {
                    Ok((next, reply)) => {
                        dialogue.update(next).await?;
                        send_reply(&bot, chat_id, reply).await?;
                    }
                    Err(e) => {
                        warn!(user_id = %q.from.id, error = %e, "Rejected callback event");
                        bot.send_message(chat_id, dialogue_manager::error_reply(&e))
                            .await?;
                    }
                }
            }
            None => {
                // Unrecognized or malformed token, drop it
                warn!(user_id = %q.from.id, data = %data, "Ignoring unrecognized callback data");
            }
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}

/// Route a parsed token through the matching transition. The season tap is
/// the only one that needs the network: teams are fetched before the
/// transition runs, so a failed fetch leaves the state untouched.
async fn apply(
    state: SelectionState,
    token: CallbackToken,
    catalog: &Catalog,
    client: &SportsApiClient,
) -> Result<(SelectionState, dialogue_manager::Reply), SelectionError> {
    match token {
        CallbackToken::League { id, name } => {
            dialogue_manager::choose_league(state, id, name, catalog)
        }
        CallbackToken::Season { year } => {
            let league_id = state
                .awaiting_season_league()
                .ok_or(SelectionError::InvalidTransition("season"))?;
            let teams = client.load_teams(league_id, year).await.map_err(|e| {
                error!(league_id, season = year, error = %e, "Team fetch failed");
                SelectionError::UpstreamFetchFailed(e.to_string())
            })?;
            dialogue_manager::choose_season(state, year, teams)
        }
        CallbackToken::FirstTeam { id, name } => {
            dialogue_manager::choose_first_team(state, id, name)
        }
        CallbackToken::SecondTeam { id, name } => {
            dialogue_manager::choose_second_team(state, id, name)
        }
        CallbackToken::FindMatch => dialogue_manager::confirm_search(state),
    }
}
