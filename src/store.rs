use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::roster::{self, Player};
use crate::split::Submission;

/// Everything tracked for one match day: the ten roster slots and the
/// submission log, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayState {
    pub players: Vec<Player>,
    pub submissions: Vec<Submission>,
}

impl DayState {
    /// Fresh day: ten blank player slots, no submissions.
    pub fn empty() -> Self {
        DayState {
            players: roster::blank_roster(),
            submissions: Vec::new(),
        }
    }

    pub fn named_players(&self) -> Vec<Player> {
        roster::named_players(&self.players)
    }

    pub fn ready(&self) -> bool {
        roster::roster_ready(&self.players)
    }

    /// Appends at the front so the log stays most-recent-first.
    pub fn push_submission(&mut self, sub: Submission) {
        self.submissions.insert(0, sub);
    }

    /// No-op when the id is not in the log.
    pub fn remove_submission(&mut self, id: &str) {
        self.submissions.retain(|s| s.id != id);
    }
}

/// Day keys are calendar dates. Anything else is rejected before it can
/// become a file name.
pub fn valid_day_key(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

pub fn day_file(data_dir: &Path, date: &str) -> PathBuf {
    data_dir.join(format!("day-{}.json", date))
}

/// Loads a day from disk, starting a fresh one when the file is missing.
/// A file that no longer parses is discarded rather than blocking the
/// day; loaded rosters are padded back to ten slots.
pub fn load_day(data_dir: &Path, date: &str) -> DayState {
    let path = day_file(data_dir, date);
    match fs::read_to_string(&path) {
        Ok(raw) => match serde_json::from_str::<DayState>(&raw) {
            Ok(mut day) => {
                day.players = roster::fix_roster_len(day.players);
                day
            }
            Err(e) => {
                log::warn!("discarding unreadable day file {}: {}", path.display(), e);
                DayState::empty()
            }
        },
        Err(_) => DayState::empty(),
    }
}

/// Writes the whole day back as one JSON file. Concurrent editors go
/// last-write-wins at this level; the consensus vote is what reconciles
/// divergent proposals.
pub fn save_day(data_dir: &Path, date: &str, day: &DayState) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(data_dir)?;
    fs::write(day_file(data_dir, date), serde_json::to_string_pretty(day)?)?;
    Ok(())
}
