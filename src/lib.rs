//! # Matchday Telegram Bot
//!
//! A Telegram bot that walks a user through picking a league, a season and
//! two teams via inline keyboard menus, backed by a remote sports-data API.

pub mod bot;
pub mod callback;
pub mod catalog;
pub mod dialogue;
pub mod errors;
pub mod flags;
pub mod localization;
