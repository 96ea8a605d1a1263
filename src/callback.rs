//! Callback token encoding for inline keyboard buttons.
//!
//! Every button carries a token of the form `<tag>_<id>[_<name>]`. The tag
//! namespaces the event so the callback handler can dispatch on a parsed
//! variant instead of comparing raw strings. The display name is always the
//! last segment and the parser splits at most twice, so names containing the
//! separator survive a round trip. Names are truncated on encode when the
//! payload would exceed Telegram's callback data limit; the id segment is
//! never cut.

/// Separator between token segments; ids are numeric so only names could
/// ever contain it, and they sit in the final segment.
pub const SEPARATOR: char = '_';

/// Telegram rejects callback data longer than this many bytes
const MAX_CALLBACK_BYTES: usize = 64;

/// Token for the terminal confirmation button
const FIND_MATCH: &str = "findmatch";

/// A parsed callback event from an inline keyboard button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackToken {
    /// League picked from the league menu
    League { id: u64, name: String },
    /// Season year picked from the season menu
    Season { year: u16 },
    /// First team picked from the team menu
    FirstTeam { id: u64, name: String },
    /// Second team picked from the team menu
    SecondTeam { id: u64, name: String },
    /// "Find match!" confirmation on the summary message
    FindMatch,
}

impl CallbackToken {
    /// Encode the token into callback data for a button.
    pub fn encode(&self) -> String {
        match self {
            CallbackToken::League { id, name } => encode_named("league", *id, name),
            CallbackToken::Season { year } => format!("season{SEPARATOR}{year}"),
            CallbackToken::FirstTeam { id, name } => encode_named("team1", *id, name),
            CallbackToken::SecondTeam { id, name } => encode_named("team2", *id, name),
            CallbackToken::FindMatch => FIND_MATCH.to_string(),
        }
    }

    /// Parse callback data back into a token.
    ///
    /// Returns `None` for unrecognized tags or malformed payloads; the
    /// handler logs and ignores those instead of crashing.
    pub fn parse(data: &str) -> Option<Self> {
        if data == FIND_MATCH {
            return Some(CallbackToken::FindMatch);
        }

        let mut parts = data.splitn(3, SEPARATOR);
        let tag = parts.next()?;
        let id = parts.next()?;
        let name = parts.next();

        match tag {
            "league" => Some(CallbackToken::League {
                id: id.parse().ok()?,
                name: name?.to_string(),
            }),
            "season" => Some(CallbackToken::Season {
                year: id.parse().ok()?,
            }),
            "team1" => Some(CallbackToken::FirstTeam {
                id: id.parse().ok()?,
                name: name?.to_string(),
            }),
            "team2" => Some(CallbackToken::SecondTeam {
                id: id.parse().ok()?,
                name: name?.to_string(),
            }),
            _ => None,
        }
    }
}

/// Encode a tagged id+name token, truncating the name at a character
/// boundary so the payload stays within [`MAX_CALLBACK_BYTES`]. Only the
/// display name is ever cut; the id stays intact since it is what later
/// transitions key on.
fn encode_named(tag: &str, id: u64, name: &str) -> String {
    let head = format!("{tag}{SEPARATOR}{id}{SEPARATOR}");
    let budget = MAX_CALLBACK_BYTES.saturating_sub(head.len());
    let mut end = budget.min(name.len());
    while end > 0 && !name.is_char_boundary(end) {
        end -= 1;
    }
    format!("{head}{}", &name[..end])
}
