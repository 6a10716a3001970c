use std::fs::File;
use std::io::Write;

use chrono::{TimeZone, Utc};

use crate::roster::Player;
use crate::split::{resolve, ConsensusResult};
use crate::store::DayState;

/// Clipboard line used to share the day's line-up in the group chat.
pub fn share_text(date: &str, named: &[Player]) -> String {
    let names: Vec<&str> = named.iter().map(|p| p.name.as_str()).collect();
    format!("Fut5 {}: {}", date, names.join(", "))
}

fn format_time(created_at: i64) -> String {
    Utc.timestamp_millis_opt(created_at)
        .single()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "??:??:??".to_string())
}

fn team_line(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints a day's roster, submission log and current consensus.
pub fn print_day_summary(date: &str, day: &DayState) {
    let named = day.named_players();
    println!("\n=== Fut5 {} ===", date);
    println!("Named players: {}/10{}", named.len(), if day.ready() { "" } else { " (not ready)" });
    if !named.is_empty() {
        println!("  {}", team_line(&named));
    }

    println!("\nSubmissions ({}):", day.submissions.len());
    for sub in &day.submissions {
        println!(
            "  {} {} -> A: {}",
            format_time(sub.created_at),
            sub.author,
            team_line(&sub.split.team_a)
        );
    }

    match resolve(&day.submissions, &named) {
        Some(consensus) => {
            println!("\nConsensus ({} vote(s)):", consensus.votes);
            println!("  Team A: {}", team_line(&consensus.split.team_a));
            println!("  Team B: {}", team_line(&consensus.split.team_b));
        }
        None => println!("\nNo consensus yet."),
    }
}

/// Writes the winning split to a file in the format pasted into group
/// chats.
pub fn write_consensus_to_file(
    date: &str,
    consensus: &ConsensusResult,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;
    writeln!(file, "** Fut5 {} ({} vote(s)) **", date, consensus.votes)?;
    writeln!(file, "Team A: {}", team_line(&consensus.split.team_a))?;
    writeln!(file, "Team B: {}", team_line(&consensus.split.team_b))?;
    Ok(())
}
