//! Tsudoi CLI client.
//!
//! Watches the server's notification stream over WebSocket and drives the
//! room / chat HTTP API from slash commands typed at the prompt.

pub mod api;
pub mod command;
mod domain;
pub mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use runner::run_client;
