//! Client core for the course CRUD service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A host supplies a
//! `Transport`; everything above it (the API facade, the shell, the input
//! panel and the table view) is deterministic and testable with fakes.
//!
//! # Design
//! - `CourseClient` is stateless; it holds only `base_url`.
//! - `CourseApi` binds a client to a transport. Reads swallow failures,
//!   mutations return `Result`.
//! - `Shell` owns the cached list, the action selector and the status banner,
//!   and reloads the list after every submission.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod action;
pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod panel;
pub mod shell;
pub mod table;
pub mod types;

pub use action::Action;
pub use api::CourseApi;
pub use client::CourseClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use panel::InputPanel;
pub use shell::Shell;
pub use table::{TableRow, TableView};
pub use types::{Course, CourseDraft, DraftField, Reply};
