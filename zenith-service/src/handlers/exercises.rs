use axum::Json;

use crate::models::{exercise, Exercise};

pub async fn list_exercises() -> Json<Vec<Exercise>> {
    Json(exercise::catalogue())
}
