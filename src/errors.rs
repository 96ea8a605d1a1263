//! # Selection Error Types Module
//!
//! This module defines the error conditions the selection flow can run into.
//! Each failure is isolated to the chat whose event produced it; none of them
//! may take down the dispatcher.

/// Error conditions of the selection flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The league catalog failed to load at startup and stays empty until restart
    CatalogUnavailable,
    /// The stored league id is not present in the catalog
    LeagueNotFound(u64),
    /// An event arrived whose precondition state is missing (named by event tag)
    InvalidTransition(&'static str),
    /// The sports-data API call failed or returned an unexpected shape
    UpstreamFetchFailed(String),
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::CatalogUnavailable => write!(f, "League catalog is unavailable"),
            SelectionError::LeagueNotFound(id) => write!(f, "League {id} not found in catalog"),
            SelectionError::InvalidTransition(event) => {
                write!(f, "Invalid transition: no state accepts event '{event}'")
            }
            SelectionError::UpstreamFetchFailed(msg) => write!(f, "Upstream fetch failed: {msg}"),
        }
    }
}

impl std::error::Error for SelectionError {}
