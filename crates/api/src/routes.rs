use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json,
    Router,
};
use serde::Serialize;

use crate::{state::AppState, ws};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/styles.css", get(styles_css))
        .route("/static/app.js", get(app_js))
        .route("/sessions", post(start_session))
        .route("/ws/game", get(ws::game_socket))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(ui::index_html())
}

async fn styles_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], ui::styles_css())
}

async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        ui::app_js(),
    )
}

#[derive(Debug, Serialize)]
struct StartSessionResponse {
    session_id: u64,
}

async fn start_session(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let session_id = state
        .start_session()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let location = format!("/sessions/{session_id}");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StartSessionResponse { session_id }),
    ))
}
