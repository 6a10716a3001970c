use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of player slots per match day.
pub const ROSTER_SIZE: usize = 10;

/// One roster slot. The id is an opaque slug; the name is what players
/// type in and what submissions match on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
}

/// Generates an 8-character lowercase alphanumeric slug for player and
/// submission ids.
pub fn uid() -> String {
    const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..8)
        .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
        .collect()
}

/// Ten empty slots for a fresh day.
pub fn blank_roster() -> Vec<Player> {
    (0..ROSTER_SIZE)
        .map(|_| Player {
            id: uid(),
            name: String::new(),
        })
        .collect()
}

/// Players whose trimmed name is non-empty, in slot order.
pub fn named_players(players: &[Player]) -> Vec<Player> {
    players
        .iter()
        .filter(|p| !p.name.trim().is_empty())
        .cloned()
        .collect()
}

/// A day is ready for submissions when all ten slots are filled and the
/// names are pairwise distinct after trimming and lowercasing. Display
/// keeps the original casing.
pub fn roster_ready(players: &[Player]) -> bool {
    let named = named_players(players);
    if named.len() != ROSTER_SIZE {
        return false;
    }
    let distinct: HashSet<String> = named
        .iter()
        .map(|p| p.name.trim().to_lowercase())
        .collect();
    distinct.len() == ROSTER_SIZE
}

/// Pads or truncates a loaded roster back to exactly ten slots, keeping
/// whatever was stored first.
pub fn fix_roster_len(mut players: Vec<Player>) -> Vec<Player> {
    players.truncate(ROSTER_SIZE);
    while players.len() < ROSTER_SIZE {
        players.push(Player {
            id: uid(),
            name: String::new(),
        });
    }
    players
}
