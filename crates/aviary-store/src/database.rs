//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and guarantees
//! that migrations are run before any other operation.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::Connection;

use crate::error::{Result, StoreError};
use crate::ids::{IdGenerator, UuidIds};
use crate::migrations;

/// Wrapper around a [`rusqlite::Connection`] plus the generator used to
/// assign ids to new documents.
pub struct Database {
    conn: Connection,
    ids: Box<dyn IdGenerator>,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/aviary/aviary.db`
    /// - macOS:   `~/Library/Application Support/com.aviary.aviary/aviary.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\aviary\aviary\data\aviary.db`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("com", "aviary", "aviary").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("aviary.db");

        tracing::info!(path = %db_path.display(), "opening database");

        Self::open_at(&db_path)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// This is the entry point used by the server (which takes the path from
    /// its configuration) and by tests.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        // Run schema migrations.
        migrations::run_migrations(&conn)?;

        Ok(Self {
            conn,
            ids: Box::new(UuidIds),
        })
    }

    /// Replace the id generator.
    ///
    /// Tests use this to make assigned ids deterministic.
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn next_id(&self) -> String {
        self.ids.generate()
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }
}
