//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, warn};

// Import localization
use crate::localization::t;

// Import catalog types
use crate::catalog::Catalog;

// Import dialogue types
use crate::dialogue::SelectionDialogue;

// Import dialogue manager functions
use super::dialogue_manager::{self, TextCommand};

// Import reply plumbing
use super::send_reply;

/// Handle incoming messages: `/start` opens (or reopens) the league menu,
/// `/help` explains the flow, any other text is echoed back verbatim.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    catalog: Arc<Catalog>,
    dialogue: SelectionDialogue,
) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(user_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");

    match dialogue_manager::route_text(text) {
        TextCommand::Start => match dialogue_manager::begin(&catalog) {
            Ok((next, reply)) => {
                dialogue.update(next).await?;
                send_reply(&bot, msg.chat.id, reply).await?;
            }
            Err(e) => {
                warn!(user_id = %msg.chat.id, error = %e, "Could not open league menu");
                bot.send_message(msg.chat.id, dialogue_manager::error_reply(&e))
                    .await?;
            }
        },
        TextCommand::Help => {
            bot.send_message(msg.chat.id, t("help")).await?;
        }
        TextCommand::Echo(echo) => {
            bot.send_message(msg.chat.id, echo).await?;
        }
    }

    Ok(())
}
