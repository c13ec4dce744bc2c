/// A schema migration.
#[derive(Debug)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

const MIGRATION_001: &str = r"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Favourited birds, keyed by common name. The marker column holds the
-- sentinel value for rows korimako owns; rows with any other marker are
-- ignored and never deleted.
CREATE TABLE IF NOT EXISTS favourites (
    name TEXT PRIMARY KEY,
    marker TEXT NOT NULL
);
";

pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: MIGRATION_001,
}];
