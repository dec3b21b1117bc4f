//! Web layer for the dashboard.
//!
//! Serves the latest snapshots as JSON to the watch face, which owns all
//! rendering.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
