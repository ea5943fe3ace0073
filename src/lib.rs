//! Checkmate - terminal client for the Checkmate Q&A service
//!
//! The library holds everything the TUI and the one-shot commands share:
//! the registration wizard, the API client, configuration, and the saved
//! login session.

pub mod api;
pub mod config;
pub mod constants;
pub mod paths;
pub mod session;
pub mod wizard;
