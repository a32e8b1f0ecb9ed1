//! Database access layer with connection pooling and migrations
//!
//! This module is organized by record type:
//! - `income` - Income source CRUD
//! - `expenses` - Fixed expense CRUD
//! - `profile` - The single profile row (location, savings goal, focus)

use std::sync::Arc;

use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tempfile::TempDir;
use tracing::info;

use crate::error::{Error, Result};

mod expenses;
mod income;
mod profile;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Environment variable for database encryption key
pub const DB_KEY_ENV: &str = "TRUEBUDGET_DB_KEY";

/// Derive an encryption key from a passphrase using Argon2
///
/// Uses a fixed application salt so the same passphrase always produces the same key,
/// regardless of database path.
fn derive_key(passphrase: &str) -> Result<String> {
    use argon2::{password_hash::SaltString, Argon2, PasswordHasher};

    // Changing this would invalidate all existing encrypted databases
    const APP_SALT: &[u8; 16] = b"truebudget-salt1";

    let salt = SaltString::encode_b64(APP_SALT)
        .map_err(|e| Error::Encryption(format!("Failed to create salt: {}", e)))?;

    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(passphrase.as_bytes(), &salt)
        .map_err(|e| Error::Encryption(format!("Failed to derive key: {}", e)))?;

    let hash_str = hash
        .hash
        .ok_or_else(|| Error::Encryption("No hash output".to_string()))?;
    Ok(hex::encode(hash_str.as_bytes()))
}

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    // SQLite stores as "YYYY-MM-DD HH:MM:SS" format
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

/// Row counts for status output
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct StoreStats {
    pub income_sources: i64,
    pub expenses: i64,
    pub has_profile: bool,
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    db_path: String,
    encrypted: bool,
    // Declared after `pool` so connections close before the directory is removed
    temp_dir: Option<Arc<TempDir>>,
}

impl Database {
    /// Create a new database connection pool with encryption
    ///
    /// Requires `TRUEBUDGET_DB_KEY` environment variable to be set.
    /// Use `new_unencrypted()` for development/testing without encryption.
    pub fn new(path: &str) -> Result<Self> {
        match std::env::var(DB_KEY_ENV).ok() {
            Some(key) => Self::new_with_key(path, Some(&key)),
            None => Err(Error::Encryption(format!(
                "Database encryption required. Set {} environment variable with your passphrase, \
                or use --no-encrypt for unencrypted databases.",
                DB_KEY_ENV
            ))),
        }
    }

    /// Create a new unencrypted database connection pool
    pub fn new_unencrypted(path: &str) -> Result<Self> {
        Self::new_with_key(path, None)
    }

    /// Create a new database with an explicit encryption key
    pub fn new_with_key(path: &str, passphrase: Option<&str>) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);

        let pool = if let Some(pass) = passphrase {
            let key = derive_key(pass)?;
            let key_pragma = format!("PRAGMA key = 'x\"{}\"';", key);

            // Every new pooled connection needs the key
            let manager = manager.with_init(move |conn| {
                conn.execute_batch(&key_pragma)?;
                Ok(())
            });

            Pool::builder().max_size(4).build(manager)?
        } else {
            Pool::builder().max_size(4).build(manager)?
        };

        let db = Self {
            pool,
            db_path: path.to_string(),
            encrypted: passphrase.is_some(),
            temp_dir: None,
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Note: Uses a file in a fresh temporary directory rather than `:memory:`
    /// because each pooled connection would otherwise see its own empty database.
    /// The directory (including WAL/SHM files) is removed when the last clone drops.
    pub fn in_memory() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("truebudget_test_").tempdir()?;
        let path = dir.path().join("truebudget.db");

        let mut db = Self::new_unencrypted(&path.to_string_lossy())?;
        db.temp_dir = Some(Arc::new(dir));
        Ok(db)
    }

    /// Whether connections were opened with a SQLCipher key
    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Delete every income source, expense and the profile row
    pub fn reset(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(
            r#"
            DELETE FROM income_sources;
            DELETE FROM expenses;
            DELETE FROM profile;
            "#,
        )?;

        info!("Database reset complete");
        Ok(())
    }

    /// Count stored records
    pub fn stats(&self) -> Result<StoreStats> {
        let conn = self.conn()?;
        let income_sources: i64 =
            conn.query_row("SELECT COUNT(*) FROM income_sources", [], |row| row.get(0))?;
        let expenses: i64 = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        let profiles: i64 = conn.query_row("SELECT COUNT(*) FROM profile", [], |row| row.get(0))?;

        Ok(StoreStats {
            income_sources,
            expenses,
            has_profile: profiles > 0,
        })
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;

            -- Recurring income
            CREATE TABLE IF NOT EXISTS income_sources (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                amount REAL NOT NULL,
                frequency TEXT NOT NULL CHECK (frequency IN ('weekly','biweekly','monthly')),
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            -- Recurring fixed expenses
            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                amount REAL NOT NULL,
                frequency TEXT NOT NULL CHECK (frequency IN ('weekly','biweekly','monthly')),
                category TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category);

            -- Single profile row
            CREATE TABLE IF NOT EXISTS profile (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                location TEXT,
                savings_goal_type TEXT NOT NULL CHECK (savings_goal_type IN ('amount','percent')),
                savings_goal_value REAL NOT NULL,
                focus_categories TEXT NOT NULL
            );
            "#,
        )?;

        info!("Database schema initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
