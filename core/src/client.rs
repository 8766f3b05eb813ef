//! Stateless HTTP request builder and response parser for the course API.
//!
//! # Design
//! `CourseClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{reply_message, Course, Reply};

const COLLECTION: &str = "items";

/// Synchronous, stateless client for the course API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct CourseClient {
    base_url: String,
}

impl CourseClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{COLLECTION}/", self.base_url)
    }

    fn item_url(&self, id: impl Display) -> String {
        format!("{}/{COLLECTION}/{id}", self.base_url)
    }

    pub fn build_list_courses(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `input` is usually a `Course` or a `CourseDraft`; anything that
    /// serializes to the course shape works.
    pub fn build_create_course<T: Serialize>(&self, input: &T) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    /// The id is interpolated into the path as-is; a blank id yields the
    /// collection URL and the server decides what that means.
    pub fn build_update_course<T: Serialize>(
        &self,
        id: impl Display,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_course(&self, id: impl Display) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_courses(&self, response: HttpResponse) -> Result<Vec<Course>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// A 2xx counts as created even when the body is not a full course,
    /// e.g. a bare `{"message": ...}`; `value` is then `None`.
    pub fn parse_create_course(&self, response: HttpResponse) -> Result<Reply<Option<Course>>, ApiError> {
        parse_course_reply(response)
    }

    pub fn parse_update_course(&self, response: HttpResponse) -> Result<Reply<Option<Course>>, ApiError> {
        parse_course_reply(response)
    }

    /// The acknowledgement body is free-form; an empty body becomes `null`.
    pub fn parse_delete_course(&self, response: HttpResponse) -> Result<Reply<Value>, ApiError> {
        check_status(&response)?;
        let value: Value = if response.body.trim().is_empty() {
            Value::Null
        } else {
            decode(&response.body)?
        };
        let message = reply_message(&value);
        Ok(Reply { value, message })
    }
}

fn parse_course_reply(response: HttpResponse) -> Result<Reply<Option<Course>>, ApiError> {
    check_status(&response)?;
    let body: Value = if response.body.trim().is_empty() {
        Value::Null
    } else {
        decode(&response.body)?
    };
    let message = reply_message(&body);
    let value = serde_json::from_value(body).ok();
    Ok(Reply { value, message })
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
