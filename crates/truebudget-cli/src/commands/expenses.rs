//! Fixed expense command implementations

use anyhow::{bail, Result};
use truebudget_core::budget::{summarize_fixed_expenses_with, to_monthly_with};
use truebudget_core::config::BudgetConfig;
use truebudget_core::db::Database;
use truebudget_core::models::{NewExpense, SUGGESTED_EXPENSE_CATEGORIES};

use super::{money, parse_frequency, truncate};

pub fn cmd_expense_list(db: &Database, config: &BudgetConfig) -> Result<()> {
    let expenses = db.list_expenses()?;

    if expenses.is_empty() {
        println!("No fixed expenses yet. Add one with:");
        println!("  truebudget expense add --name Rent --amount 900 --category Rent");
        return Ok(());
    }

    println!();
    println!("🧾 Fixed Expenses");
    println!(
        "   {:>4}  {:<22} {:<14} {:>12}  {:<9} {:>12}",
        "ID", "Name", "Category", "Amount", "Frequency", "Monthly"
    );
    println!("   ───────────────────────────────────────────────────────────────────────────────");

    for expense in &expenses {
        let monthly = to_monthly_with(&config.frequency, expense.amount, &expense.frequency)
            .map(money)
            .unwrap_or_else(|_| "invalid".to_string());
        println!(
            "   {:>4}  {:<22} {:<14} {:>12}  {:<9} {:>12}",
            expense.id,
            truncate(&expense.name, 22),
            truncate(&expense.category, 14),
            money(expense.amount),
            expense.frequency,
            monthly
        );
    }

    let (total, _) = summarize_fixed_expenses_with(config, &expenses)?;
    println!();
    println!("   Estimated monthly fixed expenses: {}", money(total));

    Ok(())
}

pub fn cmd_expense_add(
    db: &Database,
    name: &str,
    amount: f64,
    frequency: &str,
    category: &str,
) -> Result<i64> {
    let frequency = parse_frequency(frequency)?;
    let expense = NewExpense::new(name, amount, frequency, category);
    let id = db.add_expense(&expense)?;

    println!(
        "✅ Added expense #{}: {} {} {} ({})",
        id,
        expense.name,
        money(expense.amount),
        frequency,
        expense.category
    );
    if !SUGGESTED_EXPENSE_CATEGORIES.contains(&expense.category.as_str()) {
        println!(
            "   💡 Custom category. Suggested: {}",
            SUGGESTED_EXPENSE_CATEGORIES.join(", ")
        );
    }
    Ok(id)
}

pub fn cmd_expense_delete(db: &Database, id: i64) -> Result<()> {
    if !db.delete_expense(id)? {
        bail!("Expense {} not found", id);
    }
    println!("🗑️  Deleted expense #{}", id);
    Ok(())
}
