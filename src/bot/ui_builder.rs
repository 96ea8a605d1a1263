//! UI Builder module for creating keyboards and formatting messages
//!
//! Holds the layout engine that turns an ordered option list into an inline
//! keyboard grid, plus the builders for each menu of the selection flow.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::callback::CallbackToken;
use crate::catalog::{League, Team};
use crate::localization::t;

/// Which team slot a team menu is picking for; varies only the callback
/// token tag, never the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamSlot {
    First,
    Second,
}

/// Column count for a menu of `n` items.
///
/// Short lists read best as a single column. Larger lists prefer a column
/// count that divides them evenly (4 wins over 3), otherwise 3 columns until
/// the list is long enough that 5 keeps the grid compact.
fn column_count(n: usize) -> usize {
    if n <= 10 {
        1
    } else if n % 5 == 0 || n % 4 == 0 {
        4
    } else if n % 3 == 0 {
        3
    } else if n < 40 {
        3
    } else {
        5
    }
}

/// Partition an ordered option list into grid rows.
///
/// Order is preserved within and across rows; the last row may be short.
/// An empty list yields an empty grid.
pub fn layout_rows<T>(items: Vec<T>) -> Vec<Vec<T>> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }

    let per_row = column_count(n);
    let mut rows: Vec<Vec<T>> = Vec::with_capacity(n.div_ceil(per_row));
    let mut row = Vec::with_capacity(per_row);
    for item in items {
        row.push(item);
        if row.len() == per_row {
            rows.push(std::mem::replace(&mut row, Vec::with_capacity(per_row)));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

fn grid(buttons: Vec<InlineKeyboardButton>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(layout_rows(buttons))
}

/// Create the league menu keyboard
pub fn league_keyboard(leagues: &[League]) -> InlineKeyboardMarkup {
    let buttons = leagues
        .iter()
        .map(|league| {
            let label = if league.flag.is_empty() {
                league.name.clone()
            } else {
                format!("{} {}", league.flag, league.name)
            };
            let token = CallbackToken::League {
                id: league.id,
                name: league.name.clone(),
            };
            InlineKeyboardButton::callback(label, token.encode())
        })
        .collect();
    grid(buttons)
}

/// Create the season menu keyboard for an inclusive year range, ascending
pub fn season_keyboard(first_year: u16, last_year: u16) -> InlineKeyboardMarkup {
    let buttons = (first_year..=last_year)
        .map(|year| {
            let token = CallbackToken::Season { year };
            InlineKeyboardButton::callback(year.to_string(), token.encode())
        })
        .collect();
    grid(buttons)
}

/// Create the team menu keyboard, tagged for the given pick
pub fn team_keyboard(teams: &[Team], slot: TeamSlot) -> InlineKeyboardMarkup {
    let buttons = teams
        .iter()
        .map(|team| {
            let token = match slot {
                TeamSlot::First => CallbackToken::FirstTeam {
                    id: team.id,
                    name: team.name.clone(),
                },
                TeamSlot::Second => CallbackToken::SecondTeam {
                    id: team.id,
                    name: team.name.clone(),
                },
            };
            InlineKeyboardButton::callback(team.name.clone(), token.encode())
        })
        .collect();
    grid(buttons)
}

/// Create the single-button confirmation keyboard under the summary
pub fn find_match_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        t("find-match-button"),
        CallbackToken::FindMatch.encode(),
    )]])
}
