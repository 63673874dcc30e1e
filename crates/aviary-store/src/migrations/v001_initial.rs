//! v001 -- Initial schema creation.
//!
//! Creates the single `birds` collection: one JSON document per row, keyed
//! by the document's `id` field.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS birds (
    id         TEXT PRIMARY KEY NOT NULL,   -- UUID v4, assigned at creation
    document   TEXT NOT NULL,               -- the full record as JSON
    created_at TEXT NOT NULL                -- ISO-8601 / RFC-3339, fixes listing order
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
