use crate::db::models::ExerciseRecord;
use crate::db::schema::SQLITE_INIT;
use crate::error::PraxisError;
use serde_json::Value;
use sqlx::any::AnyRow;
use sqlx::{Any, Pool, Row};

pub type ExercisePool = Pool<Any>;

#[derive(Clone)]
pub struct ExerciseStore {
    pool: ExercisePool,
}

impl ExerciseStore {
    pub fn new(pool: ExercisePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &ExercisePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), PraxisError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a single record. The HTTP surface is read-only; rows are
    /// written by the external authoring pipeline, by deployment seeding,
    /// or by tests.
    pub async fn insert(&self, record: &ExerciseRecord) -> Result<(), PraxisError> {
        let payload = serde_json::to_string(&record.exercise)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        sqlx::query("INSERT INTO Numericalmethod (ID, category, exercise) VALUES (?, ?, ?)")
            .bind(record.id)
            .bind(&record.category)
            .bind(payload)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// All rows whose category equals `category` exactly, in store order.
    pub async fn find_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ExerciseRecord>, PraxisError> {
        let rows =
            sqlx::query("SELECT ID, category, exercise FROM Numericalmethod WHERE category = ?")
                .bind(category)
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    fn row_to_model(row: AnyRow) -> Result<ExerciseRecord, PraxisError> {
        let id: i64 = row.try_get("ID")?;
        let category: String = row.try_get("category")?;
        let raw: String = row.try_get("exercise")?;
        let exercise: Value =
            serde_json::from_str(&raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(ExerciseRecord {
            id,
            category,
            exercise,
        })
    }
}
