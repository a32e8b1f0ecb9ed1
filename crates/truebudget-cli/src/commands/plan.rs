//! Monthly plan dashboard

use anyhow::{Context, Result};
use truebudget_core::config::BudgetConfig;
use truebudget_core::db::Database;
use truebudget_core::models::Profile;
use truebudget_core::plan::BudgetPlan;

use super::money;

/// Load the stored records and evaluate the plan
///
/// Returns the saved profile alongside the plan so callers can reuse its location.
pub fn load_plan(
    db: &Database,
    config: &BudgetConfig,
    savings_override: Option<f64>,
) -> Result<(BudgetPlan, Option<Profile>)> {
    let incomes = db.list_income()?;
    let expenses = db.list_expenses()?;
    let profile = db.get_profile()?;

    let plan = BudgetPlan::compute(config, &incomes, &expenses, profile.as_ref(), savings_override)
        .context("Failed to compute budget plan")?;
    Ok((plan, profile))
}

pub fn cmd_plan(
    db: &Database,
    config: &BudgetConfig,
    savings_override: Option<f64>,
    json: bool,
) -> Result<()> {
    let (plan, _) = load_plan(db, config, savings_override)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          💰 TrueBudget Monthly Plan     │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Monthly income:     {:>14}", money(plan.monthly_income));
    println!("  Fixed expenses:     {:>14}", money(plan.fixed_total));
    println!("  Savings target:     {:>14}", money(plan.savings_target));
    println!("  Discretionary left: {:>14}", money(plan.discretionary));
    if let Some(value) = savings_override {
        println!("  (what-if: savings target set to {}, not saved)", money(value.max(0.0)));
    }

    println!();
    println!("  📦 Monthly split");
    for (name, amount, share) in plan.buckets() {
        println!("     {:<20} {:>14}  {:>5.1}%", name, money(amount), share);
    }
    if !plan.is_feasible() {
        println!("     Short by {} each month", money(-plan.discretionary));
    }

    if !plan.fixed_by_category.is_empty() {
        let mut by_category: Vec<_> = plan.fixed_by_category.iter().collect();
        by_category.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));

        println!();
        println!("  🧾 Fixed by category");
        for (category, amount) in by_category {
            println!("     {:<20} {:>14}", category, money(*amount));
        }
    }

    println!();
    println!("  🎯 Suggested variable targets");
    if plan.focus_categories.is_empty() {
        println!("     (no focus categories)");
    } else {
        println!("     Focus: {}", plan.focus_categories.join(", "));
    }
    for (category, amount) in plan.variable_targets.sorted_desc() {
        let marker = if plan.focus_categories.iter().any(|f| f.as_str() == category) {
            "⭐"
        } else {
            "  "
        };
        println!("   {} {:<20} {:>14}", marker, category, money(amount));
    }

    println!();
    println!("  🩺 Health");
    println!("     Rent:    {:>5.1}% of income", plan.health.rent_pct);
    println!("     Fixed:   {:>5.1}% of income", plan.health.fixed_pct);
    println!("     Savings: {:>5.1}% of income", plan.health.savings_pct);
    println!();
    if plan.health.status.is_ok() {
        println!("  ✅ {}", plan.health.status.message());
    } else {
        println!("  ❌ {}", plan.health.status.message());
    }

    if !plan.warnings.is_empty() {
        println!();
        for warning in &plan.warnings {
            println!("  ⚠️  {}", warning);
        }
    }

    println!();
    Ok(())
}
