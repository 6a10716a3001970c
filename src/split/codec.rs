use std::collections::HashSet;

use crate::roster::Player;

use super::types::Split;

/// Players per side.
pub const TEAM_SIZE: usize = 5;

/// Partitions `players` into team A (names in `selected`) and team B
/// (the rest), preserving the original player records and slot order.
/// The caller guarantees `players` holds ten distinct names and
/// `selected` five of them; cardinality is not re-checked here.
pub fn build_split(selected: &HashSet<String>, players: &[Player]) -> Split {
    let (team_a, team_b): (Vec<Player>, Vec<Player>) = players
        .iter()
        .cloned()
        .partition(|p| selected.contains(&p.name));
    Split { team_a, team_b }
}

/// Canonical fingerprint of a split: independent of player order within
/// a team and of which side is labelled A or B.
///
/// Each side's names are sorted, the two sides are ordered by their
/// comma-joined form, and the result is `first__second` with names
/// joined by `|`. Names are unique within a day, so two splits share a
/// key exactly when they are the same partition.
pub fn canonical_key(split: &Split) -> String {
    let mut a: Vec<&str> = split.team_a.iter().map(|p| p.name.as_str()).collect();
    let mut b: Vec<&str> = split.team_b.iter().map(|p| p.name.as_str()).collect();
    a.sort_unstable();
    b.sort_unstable();
    let (first, second) = if a.join(",") <= b.join(",") {
        (a, b)
    } else {
        (b, a)
    };
    format!("{}__{}", first.join("|"), second.join("|"))
}
