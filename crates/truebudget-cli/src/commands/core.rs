//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `load_config` - Shared utility to load the budget config
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use truebudget_core::config::{default_config_path, BudgetConfig};
use truebudget_core::db::Database;

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .with_context(|| format!("Database path is not valid UTF-8: {}", db_path.display()))?;
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

/// Load the budget config from --config, the user config file, or built-in defaults
pub fn load_config(config_path: Option<&Path>) -> Result<BudgetConfig> {
    debug!(path = ?config_path, "Loading budget config");
    BudgetConfig::load(config_path).context("Failed to load budget config")
}

/// Describe where the effective config comes from (for status output)
pub fn config_source(config_path: Option<&Path>) -> String {
    if let Some(path) = config_path {
        return path.display().to_string();
    }
    match default_config_path() {
        Some(path) if path.exists() => path.display().to_string(),
        _ => "built-in defaults".to_string(),
    }
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path, no_encrypt)?;
    let stats = db.stats().context("Failed to read database")?;
    println!(
        "   {} income sources, {} fixed expenses",
        stats.income_sources, stats.expenses
    );

    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else {
        println!("   🔒 Encryption: ENABLED");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add income: truebudget income add --name Job --amount 2000 --frequency monthly");
    println!("  2. Add bills: truebudget expense add --name Rent --amount 900 --category Rent");
    println!("  3. Set a goal: truebudget profile set --goal-type amount --goal-value 300");
    println!("  4. See the plan: truebudget plan");

    Ok(())
}
