use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One row of the `Numericalmethod` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ExerciseRecord {
    /// The unique identifier for the exercise.
    #[serde(rename = "ID")]
    pub id: i64,
    /// The category of the exercise.
    pub category: String,
    /// The exercise data in JSON format.
    #[schema(value_type = Object)]
    pub exercise: Value,
}
