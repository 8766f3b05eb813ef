use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

pub type Db = Arc<RwLock<BTreeMap<i64, Course>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route("/items/", get(list_courses).post(create_course))
        .route("/items/{id}", put(update_course).delete(delete_course))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_courses(State(db): State<Db>) -> Json<Vec<Course>> {
    let courses = db.read().await;
    Json(courses.values().cloned().collect())
}

async fn create_course(
    State(db): State<Db>,
    Json(input): Json<Course>,
) -> Result<Json<Course>, StatusCode> {
    let mut courses = db.write().await;
    if courses.contains_key(&input.id) {
        tracing::warn!(id = input.id, "duplicate course id");
        return Err(StatusCode::CONFLICT);
    }
    courses.insert(input.id, input.clone());
    Ok(Json(input))
}

/// Whole-record replace. The id in the path wins over the one in the body.
async fn update_course(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<Course>,
) -> Result<Json<Course>, StatusCode> {
    let mut courses = db.write().await;
    let course = courses.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *course = Course { id, ..input };
    Ok(Json(course.clone()))
}

async fn delete_course(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    let mut courses = db.write().await;
    courses
        .remove(&id)
        .map(|_| Json(json!({ "detail": "Course deleted" })))
        .ok_or(StatusCode::NOT_FOUND)
}
