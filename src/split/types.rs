use serde::{Deserialize, Serialize};

use crate::roster::Player;

/// An unordered pair of five-a-side teams covering the day's named
/// players. Which side is called A carries no meaning for comparisons;
/// equality goes through the canonical key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Split {
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
}

/// One participant's proposed split for a day. Immutable once created;
/// the only edit is delete-and-resubmit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub author: String,
    pub split: Split,
    /// Unix milliseconds.
    pub created_at: i64,
}

/// The most-voted split among a day's submissions.
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusResult {
    pub split: Split,
    pub votes: u32,
}
