//! Wearable dashboard server.
//!
//! Resolves the next bus to each destination from a static timetable,
//! derives a display price for 22k gold from a live spot quote, and serves
//! both alongside the weather to a watch face over HTTP.

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod pricing;
pub mod scheduler;
pub mod sources;
pub mod timetable;
pub mod web;
