//! TrueBudget Core Library
//!
//! Shared functionality for the TrueBudget budgeting assistant:
//! - Budget arithmetic (frequency normalization, aggregation, savings target,
//!   discretionary allocation, feasibility warnings)
//! - Monthly plan evaluation and health metrics
//! - Budget configuration (weights, frequency factors, focus boost)
//! - SQLite record store for income, expenses and the profile
//! - Pluggable local advice backends (Ollama)

pub mod advice;
pub mod budget;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod plan;

/// Test utilities including mock Ollama server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use advice::{clean_advice, AdviceBackend, AdviceClient, AdvicePayload, MockBackend, OllamaBackend};
pub use budget::{
    allocate_variable_budget, compute_savings_target, round_cents, summarize_fixed_expenses,
    summarize_income, to_monthly, warnings, VariableAllocation,
};
pub use config::{BudgetConfig, CategoryWeight, FrequencyFactors};
pub use db::Database;
pub use error::{Error, Result};
pub use models::{FixedExpense, Frequency, GoalType, IncomeSource, NewExpense, NewIncome, Profile};
pub use plan::{BudgetHealth, BudgetPlan, HealthStatus};
