//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::scheduler::departure_board;
use crate::timetable::TimetableError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/dashboard", get(dashboard))
        .route("/api/destinations", get(list_destinations))
        .route("/api/destinations/:name", get(destination_board))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Latest combined snapshot, as published by the drivers.
async fn dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let schedule = state.schedule.borrow().clone();
    let market = state.market.borrow().clone();
    Json(DashboardResponse::from_snapshots(&schedule, &market))
}

/// Destination names in menu order.
async fn list_destinations(State(state): State<AppState>) -> Json<DestinationListResponse> {
    Json(DestinationListResponse {
        destinations: state.timetable.destinations().to_vec(),
    })
}

/// Full departure list for one destination, resolved against the clock now.
async fn destination_board(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DepartureBoardResponse>, AppError> {
    let departures = state.timetable.departures_for(&name)?;
    let board = departure_board(&name, departures, state.clock.now(), &state.urgency);
    Ok(Json(DepartureBoardResponse::from_board(&board)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
}

impl From<TimetableError> for AppError {
    fn from(e: TimetableError) -> Self {
        match e {
            TimetableError::UnknownDestination(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::warn!(%status, "{message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
