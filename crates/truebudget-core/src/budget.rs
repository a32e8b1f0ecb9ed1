//! Budget arithmetic
//!
//! Pure functions turning income, fixed expenses and a savings goal into a
//! monthly split. Nothing here touches storage or the network; every function
//! has a `*_with` variant taking an explicit [`BudgetConfig`] and a plain
//! variant using the defaults.
//!
//! Rounding: variable targets are rounded to cents half away from zero
//! (`0.125` becomes `0.13`), see [`round_cents`].

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::config::{BudgetConfig, FrequencyFactors};
use crate::error::Result;
use crate::models::{FixedExpense, Frequency, GoalType, IncomeSource, SavingsGoal};

/// Share of income above which fixed expenses are flagged as very high
pub const FIXED_PCT_HIGH: f64 = 60.0;

/// Share of income above which fixed expenses get a milder warning
pub const FIXED_PCT_WATCH: f64 = 45.0;

/// Round to two decimals, ties away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a periodic amount to its monthly equivalent
///
/// Fails with `InvalidFrequency` for anything but weekly, biweekly or monthly.
pub fn to_monthly(amount: f64, frequency: &str) -> Result<f64> {
    to_monthly_with(&FrequencyFactors::default(), amount, frequency)
}

pub fn to_monthly_with(factors: &FrequencyFactors, amount: f64, frequency: &str) -> Result<f64> {
    let frequency: Frequency = frequency.parse()?;
    Ok(amount * factors.factor(frequency))
}

/// Total monthly income across all sources
pub fn summarize_income(incomes: &[IncomeSource]) -> Result<f64> {
    summarize_income_with(&BudgetConfig::default(), incomes)
}

pub fn summarize_income_with(config: &BudgetConfig, incomes: &[IncomeSource]) -> Result<f64> {
    let mut total = 0.0;
    for income in incomes {
        total += to_monthly_with(&config.frequency, income.amount, &income.frequency)?;
    }
    debug!(sources = incomes.len(), total, "Summarized income");
    Ok(total)
}

/// Total monthly fixed expenses plus a per-category breakdown
pub fn summarize_fixed_expenses(
    expenses: &[FixedExpense],
) -> Result<(f64, BTreeMap<String, f64>)> {
    summarize_fixed_expenses_with(&BudgetConfig::default(), expenses)
}

pub fn summarize_fixed_expenses_with(
    config: &BudgetConfig,
    expenses: &[FixedExpense],
) -> Result<(f64, BTreeMap<String, f64>)> {
    let mut total = 0.0;
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();

    for expense in expenses {
        let monthly = to_monthly_with(&config.frequency, expense.amount, &expense.frequency)?;
        total += monthly;
        *by_category.entry(expense.category.clone()).or_insert(0.0) += monthly;
    }

    debug!(
        expenses = expenses.len(),
        categories = by_category.len(),
        total,
        "Summarized fixed expenses"
    );
    Ok((total, by_category))
}

/// Monthly savings target for a goal given as a type tag and value
///
/// Fails with `InvalidGoalType` for anything but amount or percent.
pub fn compute_savings_target(monthly_income: f64, goal_type: &str, goal_value: f64) -> Result<f64> {
    let goal_type: GoalType = goal_type.parse()?;
    Ok(savings_target(
        monthly_income,
        &SavingsGoal {
            goal_type,
            goal_value,
        },
    ))
}

/// Monthly savings target for a typed goal; never negative
pub fn savings_target(monthly_income: f64, goal: &SavingsGoal) -> f64 {
    let raw = match goal.goal_type {
        GoalType::Amount => goal.goal_value,
        GoalType::Percent => monthly_income * (goal.goal_value / 100.0),
    };
    // f64::max returns the non-NaN operand
    0.0_f64.max(raw)
}

/// Suggested monthly targets for the variable categories, in config order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableAllocation {
    targets: Vec<(String, f64)>,
}

impl VariableAllocation {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.targets
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.targets.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    /// Sum of all targets (may differ from the input by a few cents of rounding)
    pub fn total(&self) -> f64 {
        self.targets.iter().map(|(_, amount)| amount).sum()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets sorted largest first, for display
    pub fn sorted_desc(&self) -> Vec<(&str, f64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
        sorted
    }
}

impl Serialize for VariableAllocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.targets.len()))?;
        for (name, amount) in &self.targets {
            map.serialize_entry(name, amount)?;
        }
        map.end()
    }
}

/// Split the discretionary amount across the variable categories
pub fn allocate_variable_budget<S: AsRef<str>>(
    discretionary: f64,
    focus_categories: &[S],
) -> VariableAllocation {
    allocate_variable_budget_with(&BudgetConfig::default(), discretionary, focus_categories)
}

/// Split the discretionary amount using the config's weights and boost
///
/// Every focus entry naming a known category adds `focus_boost` to its weight
/// (repeats stack, unknown names are ignored), then weights are renormalized
/// to sum to 1. A zero, negative or NaN amount maps every category to 0, as
/// does a weight table whose total is not positive.
pub fn allocate_variable_budget_with<S: AsRef<str>>(
    config: &BudgetConfig,
    discretionary: f64,
    focus_categories: &[S],
) -> VariableAllocation {
    let all_zero = || VariableAllocation {
        targets: config
            .categories
            .iter()
            .map(|c| (c.name.clone(), 0.0))
            .collect(),
    };

    if discretionary.is_nan() || discretionary <= 0.0 {
        return all_zero();
    }

    let mut weights: Vec<f64> = config.categories.iter().map(|c| c.weight).collect();
    for focus in focus_categories {
        if let Some(idx) = config
            .categories
            .iter()
            .position(|c| c.name == focus.as_ref())
        {
            weights[idx] += config.focus_boost;
        }
    }

    // Only reachable with a config that skipped validate()
    let total_weight: f64 = weights.iter().sum();
    if !total_weight.is_finite() || total_weight <= 0.0 {
        warn!(total_weight, "Variable weights do not sum to a positive number");
        return all_zero();
    }

    let targets = config
        .categories
        .iter()
        .zip(&weights)
        .map(|(category, weight)| {
            let share = weight / total_weight;
            (category.name.clone(), round_cents(discretionary * share))
        })
        .collect();

    let allocation = VariableAllocation { targets };
    debug!(
        discretionary,
        focus = focus_categories.len(),
        allocated = allocation.total(),
        "Allocated variable budget"
    );
    allocation
}

/// Threshold-based feasibility warnings, in a fixed order
///
/// Never fails: with no income a single message is returned and nothing else
/// is checked.
pub fn warnings(monthly_income: f64, fixed_total: f64, savings_target: f64) -> Vec<String> {
    let mut out = Vec::new();

    if monthly_income <= 0.0 {
        out.push("No income entered yet. Add at least one income source.".to_string());
        return out;
    }

    let fixed_pct = fixed_total / monthly_income * 100.0;
    if fixed_pct > FIXED_PCT_HIGH {
        out.push(format!(
            "Fixed expenses are {:.0}% of income. That's high; flexibility may be limited.",
            fixed_pct
        ));
    } else if fixed_pct > FIXED_PCT_WATCH {
        out.push(format!(
            "Fixed expenses are {:.0}% of income. Watch discretionary spending carefully.",
            fixed_pct
        ));
    }

    if fixed_total + savings_target > monthly_income {
        let gap = (fixed_total + savings_target) - monthly_income;
        out.push(format!(
            "Your fixed expenses + savings goal exceed income by about ${:.2}/month.",
            gap
        ));
    }

    out
}
