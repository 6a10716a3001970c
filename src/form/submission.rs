use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

use crate::roster::{self, uid};
use crate::split::{build_split, canonical_key, Submission, TEAM_SIZE};
use crate::store::DayState;

/// Fallback author when the submitter leaves the name field blank.
pub const ANONYMOUS: &str = "Anonymous";

/// Window in which a repeated identical proposal by the same author is
/// treated as an accidental double submit and not appended.
pub const DUPLICATE_WINDOW_MS: i64 = 60_000;

/// Split proposal coming in from the frontend: the five names picked for
/// team A. Team B is everyone else on the roster.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub author: String,
    pub team_a: Vec<String>,
}

/// Why a proposal was not appended. All of these are recoverable by
/// corrected input; none is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    IncompleteRoster,
    InvalidSelectionSize(usize),
    UnknownPlayer(String),
    DuplicateRecent,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::IncompleteRoster => {
                write!(f, "Enter 10 unique player names before submitting")
            }
            SubmitError::InvalidSelectionSize(n) => {
                write!(f, "Pick exactly {} players for team A (got {})", TEAM_SIZE, n)
            }
            SubmitError::UnknownPlayer(name) => {
                write!(f, "'{}' is not on today's roster", name)
            }
            SubmitError::DuplicateRecent => {
                write!(f, "You already submitted this split moments ago")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// Validates a proposal against the day's roster and builds the
/// submission record. The clock is passed in as unix milliseconds so the
/// duplicate guard stays a pure function of its inputs.
pub fn create_submission(
    req: &SubmitRequest,
    day: &DayState,
    now_ms: i64,
) -> Result<Submission, SubmitError> {
    if !roster::roster_ready(&day.players) {
        return Err(SubmitError::IncompleteRoster);
    }
    if req.team_a.len() != TEAM_SIZE {
        return Err(SubmitError::InvalidSelectionSize(req.team_a.len()));
    }

    let selected: HashSet<String> = req.team_a.iter().cloned().collect();
    if selected.len() != TEAM_SIZE {
        // repeated names collapse in the set
        return Err(SubmitError::InvalidSelectionSize(selected.len()));
    }
    let named = day.named_players();
    for name in &selected {
        if !named.iter().any(|p| &p.name == name) {
            return Err(SubmitError::UnknownPlayer(name.clone()));
        }
    }

    let author = req.author.trim();
    let author = if author.is_empty() {
        ANONYMOUS.to_string()
    } else {
        author.to_string()
    };

    let split = build_split(&selected, &named);
    let key = canonical_key(&split);
    let recent_same = day.submissions.iter().any(|s| {
        s.author == author
            && canonical_key(&s.split) == key
            && now_ms - s.created_at < DUPLICATE_WINDOW_MS
    });
    if recent_same {
        return Err(SubmitError::DuplicateRecent);
    }

    Ok(Submission {
        id: uid(),
        author,
        split,
        created_at: now_ms,
    })
}
