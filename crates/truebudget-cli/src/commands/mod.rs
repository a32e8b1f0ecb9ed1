//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Init command and shared utilities (open_db, load_config)
//! - `income` - Income source commands (list, add, delete)
//! - `expenses` - Fixed expense commands (list, add, delete)
//! - `profile` - Profile commands (show, set)
//! - `plan` - Monthly plan dashboard
//! - `advice` - Local LLM advice and Ollama status
//! - `status` - Status and reset commands

pub mod advice;
pub mod core;
pub mod expenses;
pub mod income;
pub mod plan;
pub mod profile;
pub mod status;

// Re-export command functions for main.rs
pub use advice::*;
pub use core::*;
pub use expenses::*;
pub use income::*;
pub use plan::*;
pub use profile::*;
pub use status::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a dollar amount with thousands separators, e.g. `$1,234.56`
pub fn money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
