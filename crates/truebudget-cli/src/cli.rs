//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// TrueBudget - Plan a monthly budget from income, bills and a savings goal
#[derive(Parser)]
#[command(name = "truebudget")]
#[command(about = "Local-first monthly budgeting assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "truebudget.db", global = true)]
    pub db: PathBuf,

    /// Budget config file (weights, frequency factors, focus boost)
    ///
    /// Defaults to ~/.local/share/truebudget/config/budget.toml when present,
    /// otherwise the built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set TRUEBUDGET_DB_KEY environment variable with your passphrase.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Show database status (encryption, record counts)
    Status,

    /// Manage income sources (list, add, delete)
    Income {
        #[command(subcommand)]
        action: Option<IncomeAction>,
    },

    /// Manage fixed expenses (list, add, delete)
    Expense {
        #[command(subcommand)]
        action: Option<ExpenseAction>,
    },

    /// Show or update the profile (location, savings goal, focus categories)
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },

    /// Show the monthly plan
    Plan {
        /// Try a different monthly savings target without saving it
        #[arg(long)]
        savings: Option<f64>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the local LLM to explain the plan
    Advise {
        /// Model name (overrides OLLAMA_MODEL)
        #[arg(short, long)]
        model: Option<String>,

        /// Try a different monthly savings target without saving it
        #[arg(long)]
        savings: Option<f64>,
    },

    /// Local LLM (Ollama) utilities
    Ollama {
        #[command(subcommand)]
        action: OllamaAction,
    },

    /// Delete all income, expenses and the profile
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum IncomeAction {
    /// List income sources (newest first)
    List,
    /// Add an income source
    Add {
        /// Name (e.g., "Job", "Side gig")
        #[arg(short, long)]
        name: String,
        /// Amount per period
        #[arg(short, long)]
        amount: f64,
        /// Frequency: weekly, biweekly, monthly
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
    },
    /// Delete an income source by ID
    Delete {
        /// Income ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ExpenseAction {
    /// List fixed expenses (newest first)
    List,
    /// Add a fixed expense
    Add {
        /// Name (e.g., "Rent", "Phone bill")
        #[arg(short, long)]
        name: String,
        /// Amount per period
        #[arg(short, long)]
        amount: f64,
        /// Frequency: weekly, biweekly, monthly
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// Category: Rent, Bills, Insurance, Debt, Subscriptions, Other Fixed (or your own)
        #[arg(short, long, default_value = "Other Fixed")]
        category: String,
    },
    /// Delete a fixed expense by ID
    Delete {
        /// Expense ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the saved profile
    Show,
    /// Update profile fields (unspecified fields keep their current value)
    Set {
        /// Location (optional context for advice)
        #[arg(long)]
        location: Option<String>,
        /// Savings goal type: amount ($/month) or percent (of income)
        #[arg(long)]
        goal_type: Option<String>,
        /// Savings goal value
        #[arg(long)]
        goal_value: Option<f64>,
        /// Focus categories, comma-separated (e.g., "Groceries, Social")
        #[arg(long)]
        focus: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum OllamaAction {
    /// Check whether the Ollama server is reachable
    Status {
        /// Model name (overrides OLLAMA_MODEL)
        #[arg(short, long)]
        model: Option<String>,
    },
}
