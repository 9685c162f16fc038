//! Masjid prayer timetable client.
//!
//! Turns per-day records from the content store into display rows, handles
//! the Friday Jummah substitution, works out calendar windows and formats
//! countdowns.

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod schedule;
pub mod store;
pub mod utils;

pub use config::AppConfig;
pub use store::{ScheduleStore, StoreState};
