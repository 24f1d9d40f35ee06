use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/cycle", get(handlers::get_cycle))
        .route("/api/cycle/settings", put(handlers::update_cycle_settings))
        .route("/api/cycle/days", post(handlers::log_day))
        .route("/api/cycle/calendar", get(handlers::get_calendar))
        .route("/api/cycle/classify", get(handlers::classify))
        .route(
            "/api/wellness",
            get(handlers::get_wellness).put(handlers::update_wellness),
        )
        .route("/api/wellness/consult", post(handlers::consult))
        .route("/api/meditation", get(handlers::get_meditation))
        .route("/api/meditation/toggle", post(handlers::toggle_meditation))
        .route("/api/meditation/reset", post(handlers::reset_meditation))
        .route(
            "/api/meditation/duration",
            put(handlers::set_meditation_duration),
        )
        .route("/api/meditation/sound", put(handlers::set_meditation_sound))
        .route(
            "/api/journal",
            get(handlers::get_journal).post(handlers::save_journal),
        )
        .route("/api/insights", get(handlers::get_insights))
        .with_state(state)
}
