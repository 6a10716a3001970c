use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::display::share_text;
use crate::form::export::submissions_to_csv;
use crate::form::submission::{create_submission, SubmitError, SubmitRequest};
use crate::roster::Player;
use crate::split::{resolve, ConsensusResult, Submission};
use crate::store::{self, DayState};

/// In-memory cache of day states, loaded on first touch and written back
/// to JSON files under `data_dir` after every mutation.
pub struct AppState {
    pub days: Mutex<HashMap<String, DayState>>,
    pub data_dir: PathBuf,
}

#[derive(Deserialize)]
pub struct NameUpdate {
    name: String,
}

#[derive(Serialize)]
pub struct DayResponse {
    players: Vec<Player>,
    submissions: Vec<Submission>,
    ready: bool,
    consensus: Option<ConsensusResult>,
    share_text: String,
}

fn day_response(date: &str, day: &DayState) -> DayResponse {
    let named = day.named_players();
    DayResponse {
        players: day.players.clone(),
        submissions: day.submissions.clone(),
        ready: day.ready(),
        consensus: resolve(&day.submissions, &named),
        share_text: share_text(date, &named),
    }
}

fn invalid_day_key() -> HttpResponse {
    HttpResponse::BadRequest()
        .json(serde_json::json!({"success": false, "error": "Invalid day key, expected YYYY-MM-DD"}))
}

fn persist(state: &AppState, date: &str, day: &DayState) {
    if let Err(e) = store::save_day(&state.data_dir, date, day) {
        log::error!("failed to save day {}: {}", date, e);
    }
}

// Day state endpoint: everything the page needs in one response
async fn get_day(date: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let date = date.into_inner();
    if !store::valid_day_key(&date) {
        return Ok(invalid_day_key());
    }

    let mut days = state.days.lock().unwrap();
    let day = days
        .entry(date.clone())
        .or_insert_with(|| store::load_day(&state.data_dir, &date));
    Ok(HttpResponse::Ok().json(day_response(&date, day)))
}

// Rename one roster slot
async fn update_player(
    path: web::Path<(String, String)>,
    req: web::Json<NameUpdate>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let (date, player_id) = path.into_inner();
    if !store::valid_day_key(&date) {
        return Ok(invalid_day_key());
    }

    let mut days = state.days.lock().unwrap();
    let day = days
        .entry(date.clone())
        .or_insert_with(|| store::load_day(&state.data_dir, &date));

    match day.players.iter_mut().find(|p| p.id == player_id) {
        Some(player) => player.name = req.name.clone(),
        None => {
            return Ok(HttpResponse::NotFound()
                .json(serde_json::json!({"success": false, "error": "Unknown player slot"})))
        }
    }
    persist(&state, &date, day);
    Ok(HttpResponse::Ok().json(day_response(&date, day)))
}

// Append a split proposal to the day's log
async fn submit_split(
    date: web::Path<String>,
    req: web::Json<SubmitRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let date = date.into_inner();
    if !store::valid_day_key(&date) {
        return Ok(invalid_day_key());
    }

    let mut days = state.days.lock().unwrap();
    let day = days
        .entry(date.clone())
        .or_insert_with(|| store::load_day(&state.data_dir, &date));

    match create_submission(&req, day, Utc::now().timestamp_millis()) {
        Ok(sub) => {
            log::info!("day {}: {} submitted a split", date, sub.author);
            day.push_submission(sub);
            persist(&state, &date, day);
            Ok(HttpResponse::Ok().json(day_response(&date, day)))
        }
        Err(SubmitError::DuplicateRecent) => Ok(HttpResponse::Conflict().json(
            serde_json::json!({"success": false, "error": SubmitError::DuplicateRecent.to_string()}),
        )),
        Err(e) => Ok(HttpResponse::BadRequest()
            .json(serde_json::json!({"success": false, "error": e.to_string()}))),
    }
}

// Remove one submission; removing an id that is already gone is fine
async fn delete_submission(
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let (date, id) = path.into_inner();
    if !store::valid_day_key(&date) {
        return Ok(invalid_day_key());
    }

    let mut days = state.days.lock().unwrap();
    let day = days
        .entry(date.clone())
        .or_insert_with(|| store::load_day(&state.data_dir, &date));
    day.remove_submission(&id);
    persist(&state, &date, day);
    Ok(HttpResponse::Ok().json(day_response(&date, day)))
}

// Wipe the day back to ten blank slots and an empty log
async fn reset_day(date: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let date = date.into_inner();
    if !store::valid_day_key(&date) {
        return Ok(invalid_day_key());
    }

    let mut days = state.days.lock().unwrap();
    let day = days.entry(date.clone()).or_insert_with(DayState::empty);
    *day = DayState::empty();
    log::info!("day {}: reset", date);
    persist(&state, &date, day);
    Ok(HttpResponse::Ok().json(day_response(&date, day)))
}

// CSV download of the submission log
async fn export_day(date: web::Path<String>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let date = date.into_inner();
    if !store::valid_day_key(&date) {
        return Ok(invalid_day_key());
    }

    let mut days = state.days.lock().unwrap();
    let day = days
        .entry(date.clone())
        .or_insert_with(|| store::load_day(&state.data_dir, &date));

    match submissions_to_csv(&day.submissions) {
        Ok(csv) => Ok(HttpResponse::Ok().content_type("text/csv").body(csv)),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(serde_json::json!({"success": false, "error": format!("Export failed: {}", e)}))),
    }
}

async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16, data_dir: PathBuf) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        days: Mutex::new(HashMap::new()),
        data_dir,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .route("/", web::get().to(index))
            .route("/api/day/{date}", web::get().to(get_day))
            .route("/api/day/{date}/players/{id}", web::put().to(update_player))
            .route("/api/day/{date}/submissions", web::post().to(submit_split))
            .route(
                "/api/day/{date}/submissions/{id}",
                web::delete().to(delete_submission),
            )
            .route("/api/day/{date}/reset", web::post().to(reset_day))
            .route("/api/day/{date}/export", web::get().to(export_day))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
