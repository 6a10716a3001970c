use std::path::{Path, PathBuf};

use chrono::Utc;

use fut5_teams::display::{print_day_summary, write_consensus_to_file};
use fut5_teams::form::export::write_submissions_csv;
use fut5_teams::split::resolve;
use fut5_teams::store::{load_day, valid_day_key};
use fut5_teams::web;

fn data_dir() -> PathBuf {
    std::env::var("FUT5_DATA_DIR")
        .unwrap_or_else(|_| "data".to_string())
        .into()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Web mode: `fut5-teams web [port]`
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        println!("Starting web server on port {}...", port);
        println!("Access the site at http://localhost:{}", port);

        web::start_server(port, data_dir()).await?;
        return Ok(());
    }

    // CLI mode: summarize one day (argument or today) and write the
    // consensus and export files
    let date = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());
    if !valid_day_key(&date) {
        return Err(format!("Invalid day '{}', expected YYYY-MM-DD", date).into());
    }

    let day = load_day(&data_dir(), &date);
    print_day_summary(&date, &day);

    if let Some(consensus) = resolve(&day.submissions, &day.named_players()) {
        let filename = format!("consensus_{}.txt", date);
        write_consensus_to_file(&date, &consensus, &filename)?;
        println!("\nConsensus saved to {}", filename);
    }
    if !day.submissions.is_empty() {
        let filename = format!("submissions_{}.csv", date);
        write_submissions_csv(Path::new(&filename), &day.submissions)?;
        println!("Submission log exported to {}", filename);
    }

    Ok(())
}
