//! CRUD operations for [`Bird`] documents.
//!
//! Every write validates the incoming fields first, so a record either fully
//! satisfies the required-field constraints or nothing is persisted.

use chrono::Utc;
use rusqlite::params;

use aviary_shared::{Bird, BirdFields};

use crate::database::Database;
use crate::error::{Result, StoreError};

impl Database {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Validate `fields`, assign a fresh id, and persist the new document.
    ///
    /// Returns the stored record including its id.
    pub fn create_bird(&self, fields: &BirdFields) -> Result<Bird> {
        fields.validate()?;

        let bird = Bird {
            id: self.next_id(),
            fields: fields.clone(),
        };
        let document = serde_json::to_string(&bird)?;

        self.conn().execute(
            "INSERT INTO birds (id, document, created_at) VALUES (?1, ?2, ?3)",
            params![bird.id, document, Utc::now().to_rfc3339()],
        )?;

        tracing::debug!(id = %bird.id, "bird created");
        Ok(bird)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Fetch a single bird by id.
    pub fn get_bird(&self, id: &str) -> Result<Bird> {
        let document: String = self
            .conn()
            .query_row(
                "SELECT document FROM birds WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
                other => StoreError::Sqlite(other),
            })?;

        Ok(serde_json::from_str(&document)?)
    }

    /// List all birds in insertion order.
    pub fn list_birds(&self) -> Result<Vec<Bird>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT document FROM birds ORDER BY created_at ASC, rowid ASC")?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut birds = Vec::new();
        for row in rows {
            birds.push(serde_json::from_str(&row?)?);
        }
        Ok(birds)
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Replace the fields of an existing bird, preserving its id.
    ///
    /// Fails with [`StoreError::NotFound`] if no record has `id`; validation
    /// failure leaves the stored document untouched.
    pub fn update_bird(&self, id: &str, fields: &BirdFields) -> Result<Bird> {
        fields.validate()?;

        let bird = Bird {
            id: id.to_string(),
            fields: fields.clone(),
        };
        let document = serde_json::to_string(&bird)?;

        let affected = self.conn().execute(
            "UPDATE birds SET document = ?2 WHERE id = ?1",
            params![bird.id, document],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }

        tracing::debug!(id = %bird.id, "bird updated");
        Ok(bird)
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Remove a bird by id.  Hard delete; the id is never reassigned.
    pub fn delete_bird(&self, id: &str) -> Result<()> {
        let affected = self
            .conn()
            .execute("DELETE FROM birds WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }

        tracing::debug!(id = %id, "bird deleted");
        Ok(())
    }
}
