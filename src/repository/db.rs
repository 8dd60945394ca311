//! Database Connection and Setup
//!
//! Manages the SQLite database connection and migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Tables backing the ordered content collections. All share one schema:
/// the entity payload is a JSON blob, with position/is_active mirrored into
/// real columns so SQL can order and filter.
pub const COLLECTION_TABLES: &[&str] = &[
    "testimonials",
    "faq_entries",
    "therapy_services",
    "specialties",
    "carousel_photos",
    "credentials",
    "contact_buttons",
];

/// Database state wrapper
///
/// The connection is `None` until `init_db` finishes; operations against an
/// uninitialized state fail instead of blocking.
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize database with path (":memory:" is accepted for tests)
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;

    run_migrations(&conn)?;

    let state = DbState::new();
    *state.conn.lock().await = Some(conn);

    tracing::info!(path = %db_path.display(), "database initialized");
    Ok(state)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS site_config (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER
        )",
        [],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    for table in COLLECTION_TABLES {
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    position INTEGER NOT NULL DEFAULT 0,
                    is_active INTEGER NOT NULL DEFAULT 1,
                    data TEXT NOT NULL,
                    created_at INTEGER,
                    updated_at INTEGER
                )",
                table
            ),
            [],
        )
        .map_err(|e| DomainError::Internal(format!("Failed to create {}: {}", table, e)))?;

        // Index for the display-order scans
        conn.execute(
            &format!(
                "CREATE INDEX IF NOT EXISTS idx_{}_position ON {}(position)",
                table, table
            ),
            [],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    }

    Ok(())
}
