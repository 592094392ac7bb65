//! Startup and shutdown of the forum backend.
//!
//! Loads configuration, initializes logging and builds the [`AppContext`]
//! that every other component receives to reach storage.

pub mod app;
pub mod config;
pub mod logging;

pub use app::AppContext;
