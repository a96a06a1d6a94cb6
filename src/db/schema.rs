//! SQL DDL for initializing the exercise store.
//! SQLite-first design; the production MySQL table is provisioned externally.

/// SQLite schema with:
/// - `ID` INTEGER PRIMARY KEY (unique per row)
/// - `category` TEXT, indexed for the lookup filter
/// - `exercise` TEXT holding the JSON payload, serialized as text
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS Numericalmethod (
    ID INTEGER PRIMARY KEY,
    category TEXT NOT NULL,
    exercise TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_numericalmethod_category ON Numericalmethod(category);
"#;
