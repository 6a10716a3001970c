use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::roster::Player;

use super::codec::canonical_key;
use super::types::{ConsensusResult, Split, Submission};

/// Reduces a day's submissions to the most-voted split, or `None` while
/// the log is empty.
///
/// Groups form in scan order and a tie on the vote count keeps the group
/// seen first, so a tied day is decided by submission recency rather
/// than by the splits themselves.
pub fn resolve(submissions: &[Submission], named: &[Player]) -> Option<ConsensusResult> {
    if submissions.is_empty() {
        return None;
    }

    // Group by canonical key, first-seen order preserved. The first
    // submission of a group is its representative.
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(&Split, u32)> = Vec::new();
    for sub in submissions {
        match index.entry(canonical_key(&sub.split)) {
            Entry::Occupied(entry) => groups[*entry.get()].1 += 1,
            Entry::Vacant(entry) => {
                entry.insert(groups.len());
                groups.push((&sub.split, 1));
            }
        }
    }

    let mut best = &groups[0];
    for group in &groups[1..] {
        if group.1 > best.1 {
            best = group;
        }
    }

    Some(ConsensusResult {
        split: normalize(best.0, named),
        votes: best.1,
    })
}

/// Deterministic side labelling for display: each team's names sorted,
/// the team with the lexicographically first name on the left. Player
/// records are rebuilt from the current roster; names that were edited
/// away since the submission are dropped.
fn normalize(split: &Split, named: &[Player]) -> Split {
    let mut a_names: Vec<&str> = split.team_a.iter().map(|p| p.name.as_str()).collect();
    let mut b_names: Vec<&str> = split.team_b.iter().map(|p| p.name.as_str()).collect();
    a_names.sort_unstable();
    b_names.sort_unstable();
    let (left, right) = if a_names.first() <= b_names.first() {
        (a_names, b_names)
    } else {
        (b_names, a_names)
    };

    let to_team = |names: &[&str]| -> Vec<Player> {
        names
            .iter()
            .filter_map(|n| named.iter().find(|p| p.name == *n).cloned())
            .collect()
    };
    Split {
        team_a: to_team(&left),
        team_b: to_team(&right),
    }
}
