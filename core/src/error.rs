//! Error types for the course API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a missing id is the most
//! common failure for update and delete. All other non-2xx responses land in
//! `HttpError` with the raw status code and body for debugging. The shell
//! does not distinguish between variants; it only shows the `Display` text.

/// Errors returned by `CourseClient` parse methods and `Transport` impls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404, the requested course does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}
