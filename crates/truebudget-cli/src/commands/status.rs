//! Status-related command implementations (status, reset)

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};
use truebudget_core::db::DB_KEY_ENV;

use super::{config_source, open_db};

pub fn cmd_status(db_path: &Path, config_path: Option<&Path>, no_encrypt: bool) -> Result<()> {
    use std::fs;

    println!();
    println!("📊 TrueBudget Status");
    println!("   ─────────────────────────────────────────────────────────────");

    println!("   Database: {}", db_path.display());

    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
    }

    println!("   Config: {}", config_source(config_path));

    let has_key = std::env::var(DB_KEY_ENV).is_ok();
    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else if has_key {
        println!("   🔒 Encryption: ENABLED ({}=***)", DB_KEY_ENV);
    } else {
        println!("   ❌ Encryption: REQUIRED but {} not set", DB_KEY_ENV);
    }

    if db_path.exists() {
        match open_db(db_path, no_encrypt) {
            Ok(db) => {
                if db.is_encrypted() {
                    println!("   Opened with SQLCipher key");
                } else {
                    println!("   Opened without encryption");
                }
                if let Ok(stats) = db.stats() {
                    println!();
                    println!("   Income sources: {}", stats.income_sources);
                    println!("   Fixed expenses: {}", stats.expenses);
                    println!(
                        "   Profile: {}",
                        if stats.has_profile { "saved" } else { "not set" }
                    );
                }
            }
            Err(e) => {
                println!();
                println!("   ❌ Error opening database: {}", e);
                if !no_encrypt && !has_key {
                    println!("      Set {} or use --no-encrypt", DB_KEY_ENV);
                } else if has_key {
                    println!("      (Check if {} is correct)", DB_KEY_ENV);
                }
            }
        }
    }

    println!();
    Ok(())
}

/// Delete all income sources, expenses and the profile
pub fn cmd_reset(db_path: &Path, yes: bool, no_encrypt: bool) -> Result<()> {
    if !db_path.exists() {
        bail!("Database not found: {}", db_path.display());
    }

    if !yes {
        print!("⚠️  This will delete all income sources, fixed expenses and your profile.\n\n");
        print!("Are you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let db = open_db(db_path, no_encrypt)?;
    db.reset()?;

    println!("✅ Database reset complete.");
    println!("   Cleared: income sources, fixed expenses, profile");

    Ok(())
}
