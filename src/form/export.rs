use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use csv::WriterBuilder;

use crate::roster::Player;
use crate::split::Submission;

fn team_names(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the submission log as CSV: when, who, and the two sides as
/// submitted.
pub fn submissions_to_csv(submissions: &[Submission]) -> Result<String, Box<dyn std::error::Error>> {
    let mut wtr = WriterBuilder::new().from_writer(vec![]);
    wtr.write_record(["submitted_at", "author", "team_a", "team_b"])?;

    for sub in submissions {
        let submitted_at = Utc
            .timestamp_millis_opt(sub.created_at)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        wtr.write_record([
            submitted_at,
            sub.author.clone(),
            team_names(&sub.split.team_a),
            team_names(&sub.split.team_b),
        ])?;
    }

    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes the CSV export next to the other per-day output files.
pub fn write_submissions_csv(
    path: &Path,
    submissions: &[Submission],
) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(path, submissions_to_csv(submissions)?)?;
    Ok(())
}
