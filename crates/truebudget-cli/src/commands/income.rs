//! Income source command implementations

use anyhow::{bail, Result};
use truebudget_core::budget::{summarize_income_with, to_monthly_with};
use truebudget_core::config::BudgetConfig;
use truebudget_core::db::Database;
use truebudget_core::models::{Frequency, NewIncome};

use super::{money, truncate};

/// Parse a frequency tag typed on the command line
pub fn parse_frequency(raw: &str) -> Result<Frequency> {
    Ok(raw.trim().to_lowercase().parse()?)
}

pub fn cmd_income_list(db: &Database, config: &BudgetConfig) -> Result<()> {
    let incomes = db.list_income()?;

    if incomes.is_empty() {
        println!("No income sources yet. Add one with:");
        println!("  truebudget income add --name Job --amount 2000 --frequency monthly");
        return Ok(());
    }

    println!();
    println!("💵 Income Sources");
    println!(
        "   {:>4}  {:<24} {:>12}  {:<9} {:>12}",
        "ID", "Name", "Amount", "Frequency", "Monthly"
    );
    println!("   ─────────────────────────────────────────────────────────────────");

    for income in &incomes {
        let monthly = to_monthly_with(&config.frequency, income.amount, &income.frequency)
            .map(money)
            .unwrap_or_else(|_| "invalid".to_string());
        println!(
            "   {:>4}  {:<24} {:>12}  {:<9} {:>12}",
            income.id,
            truncate(&income.name, 24),
            money(income.amount),
            income.frequency,
            monthly
        );
    }

    let total = summarize_income_with(config, &incomes)?;
    println!();
    println!("   Estimated monthly income: {}", money(total));

    Ok(())
}

pub fn cmd_income_add(db: &Database, name: &str, amount: f64, frequency: &str) -> Result<i64> {
    let frequency = parse_frequency(frequency)?;
    let income = NewIncome::new(name, amount, frequency);
    let id = db.add_income(&income)?;

    println!(
        "✅ Added income #{}: {} {} {}",
        id,
        income.name,
        money(income.amount),
        frequency
    );
    Ok(id)
}

pub fn cmd_income_delete(db: &Database, id: i64) -> Result<()> {
    if !db.delete_income(id)? {
        bail!("Income source {} not found", id);
    }
    println!("🗑️  Deleted income #{}", id);
    Ok(())
}
