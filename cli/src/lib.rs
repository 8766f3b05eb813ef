//! Terminal front end for the course CRUD service.
//!
//! # Overview
//! `za-crud` draws the course table, the action selector and the input
//! panel as a text page and reads one command per line. All state lives in
//! `course_core::Shell`; this crate only adds configuration, a ureq-backed
//! `Transport` and the command loop.

pub mod command;
pub mod config;
pub mod session;
pub mod transport;

pub use command::{Command, CommandError};
pub use config::{Cli, ConfigError};
pub use session::{run, Flow, Session};
pub use transport::UreqTransport;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
