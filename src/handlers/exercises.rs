use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::db::models::ExerciseRecord;
use crate::{PraxisError, router::AppState};

#[derive(Debug, Deserialize)]
pub struct ExerciseQuery {
    pub category: Option<String>,
}

/// Get exercise data based on category from the database.
///
/// Retrieves the exercises filed under the supplied category and returns
/// them as a JSON array. An absent or empty `category` is rejected before
/// any store access happens.
#[utoipa::path(
    get,
    path = "/get-exercise",
    params(
        ("category" = String, Query, description = "The category to filter exercises by (e.g. 'graphical')")
    ),
    responses(
        (status = 200, description = "A list of exercises", body = [ExerciseRecord]),
        (status = 400, description = "Missing required parameter: category"),
        (status = 404, description = "No exercises found for the given category"),
        (status = 500, description = "Error retrieving data from the database"),
    )
)]
pub async fn get_exercise(
    State(state): State<AppState>,
    Query(query): Query<ExerciseQuery>,
) -> Result<Json<Vec<ExerciseRecord>>, PraxisError> {
    let category = match query.category.as_deref() {
        Some(c) if !c.is_empty() => c,
        _ => return Err(PraxisError::MissingCategory),
    };

    let records = state.store.find_by_category(category).await?;
    if records.is_empty() {
        return Err(PraxisError::NotFound);
    }
    Ok(Json(records))
}
