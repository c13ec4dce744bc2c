use rusqlite::Connection;
use std::path::Path;

use crate::error::Result;

use super::migrations::MIGRATIONS;

/// The sentinel marker identifying favourites rows owned by korimako.
///
/// The store is shared process-wide in principle, so membership checks and
/// deletion always match on the marker as well as the name.
pub const FAVOURITE_SENTINEL: &str = "favorite";

/// The favourites store: a SQLite database holding one row per favourited
/// bird, keyed by common name.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and apply migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    fn apply_migrations(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        let mut stmt = self
            .conn
            .prepare("SELECT version FROM schema_migrations ORDER BY version")?;
        let applied: Vec<u32> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        for migration in MIGRATIONS {
            if !applied.contains(&migration.version) {
                log::info!(
                    "Applying migration {} ({})",
                    migration.version,
                    migration.name
                );
                self.conn.execute_batch(migration.sql)?;
                self.conn.execute(
                    "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                    rusqlite::params![migration.version, migration.name],
                )?;
            }
        }

        Ok(())
    }
}

// Favourites CRUD
impl Database {
    /// True iff `name` is currently favourited.
    pub fn is_favourite(&self, name: &str) -> Result<bool> {
        let present = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM favourites WHERE name = ?1 AND marker = ?2)",
            rusqlite::params![name, FAVOURITE_SENTINEL],
            |row| row.get(0),
        )?;
        Ok(present)
    }

    /// All favourited names, ordered by name.
    pub fn list_favourites(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM favourites WHERE marker = ?1 ORDER BY name")?;
        let names = stmt
            .query_map([FAVOURITE_SENTINEL], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    /// Add `name` to the favourites if absent, remove it if present.
    ///
    /// Runs in a single transaction so callers never observe partial state.
    /// Returns the new membership state.
    pub fn toggle_favourite(&mut self, name: &str) -> Result<bool> {
        let tx = self.conn.transaction()?;
        let present: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM favourites WHERE name = ?1 AND marker = ?2)",
            rusqlite::params![name, FAVOURITE_SENTINEL],
            |row| row.get(0),
        )?;
        if present {
            tx.execute("DELETE FROM favourites WHERE name = ?1", [name])?;
        } else {
            tx.execute(
                "INSERT OR REPLACE INTO favourites (name, marker) VALUES (?1, ?2)",
                rusqlite::params![name, FAVOURITE_SENTINEL],
            )?;
        }
        tx.commit()?;
        Ok(!present)
    }

    /// Remove every favourited row, leaving rows with other markers alone.
    ///
    /// Returns the number of favourites removed.
    pub fn clear_favourites(&self) -> Result<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM favourites WHERE marker = ?1", [FAVOURITE_SENTINEL])?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 1); // One migration applied
    }

    #[test]
    fn test_database_open_on_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("korimako.db");

        {
            let mut db = Database::open(&path).unwrap();
            db.toggle_favourite("Kea").unwrap();
        }

        // Favourites persist across re-opens.
        let db = Database::open(&path).unwrap();
        assert!(db.is_favourite("Kea").unwrap());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut db = Database::open_in_memory().unwrap();

        assert!(db.toggle_favourite("Kea").unwrap());
        assert_eq!(db.list_favourites().unwrap(), vec!["Kea".to_string()]);

        assert!(!db.toggle_favourite("Kea").unwrap());
        assert!(db.list_favourites().unwrap().is_empty());
    }

    #[test]
    fn test_list_is_ordered_by_name() {
        let mut db = Database::open_in_memory().unwrap();
        db.toggle_favourite("Weka").unwrap();
        db.toggle_favourite("Kea").unwrap();
        db.toggle_favourite("Morepork").unwrap();

        assert_eq!(
            db.list_favourites().unwrap(),
            vec!["Kea".to_string(), "Morepork".to_string(), "Weka".to_string()]
        );
    }

    #[test]
    fn test_clear_empties_favourites_for_any_prior_state() {
        let mut db = Database::open_in_memory().unwrap();
        db.toggle_favourite("Kea").unwrap();
        db.toggle_favourite("Weka").unwrap();

        assert_eq!(db.clear_favourites().unwrap(), 2);
        assert!(db.list_favourites().unwrap().is_empty());

        // Clearing an already-empty store is fine.
        assert_eq!(db.clear_favourites().unwrap(), 0);
    }

    #[test]
    fn test_foreign_markers_are_ignored_and_survive_clear() {
        let mut db = Database::open_in_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO favourites (name, marker) VALUES ('Kea', 'bookmark')",
                [],
            )
            .unwrap();
        db.toggle_favourite("Weka").unwrap();

        // A row with a foreign marker is not a favourite.
        assert!(!db.is_favourite("Kea").unwrap());
        assert_eq!(db.list_favourites().unwrap(), vec!["Weka".to_string()]);

        db.clear_favourites().unwrap();
        let survivors: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM favourites", [], |row| row.get(0))
            .unwrap();
        assert_eq!(survivors, 1);
    }
}
