//! Course operations bound to a transport.
//!
//! `CourseApi` pairs the stateless `CourseClient` with a `Transport` so the
//! shell can call `list`, `create`, `update` and `delete` directly. Reads
//! never fail: any error on `list` is logged and becomes an empty vector.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::client::CourseClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Course, Reply};

#[derive(Debug, Clone)]
pub struct CourseApi<T> {
    client: CourseClient,
    transport: T,
}

impl<T: Transport> CourseApi<T> {
    pub fn new(client: CourseClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &CourseClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list(&self) -> Vec<Course> {
        let request = self.client.build_list_courses();
        tracing::debug!(path = %request.path, "listing courses");
        match self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_list_courses(response))
        {
            Ok(courses) => courses,
            Err(e) => {
                tracing::error!(error = %e, "error fetching courses");
                Vec::new()
            }
        }
    }

    pub fn create<B: Serialize>(&self, record: &B) -> Result<Reply<Option<Course>>, ApiError> {
        let request = self.client.build_create_course(record)?;
        tracing::debug!(path = %request.path, "creating course");
        let response = self.transport.execute(request)?;
        self.client.parse_create_course(response)
    }

    pub fn update<B: Serialize>(
        &self,
        id: impl Display,
        record: &B,
    ) -> Result<Reply<Option<Course>>, ApiError> {
        let request = self.client.build_update_course(id, record)?;
        tracing::debug!(path = %request.path, "updating course");
        let response = self.transport.execute(request)?;
        self.client.parse_update_course(response)
    }

    pub fn delete(&self, id: impl Display) -> Result<Reply<Value>, ApiError> {
        let request = self.client.build_delete_course(id);
        tracing::debug!(path = %request.path, "deleting course");
        let response = self.transport.execute(request)?;
        self.client.parse_delete_course(response)
    }
}
