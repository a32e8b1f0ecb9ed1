//! Monthly budget plan
//!
//! Runs the budget functions in dependency order (normalize, aggregate,
//! savings target, allocate, warn) and bundles every derived figure. Plans are
//! computed fresh from the records on each evaluation and never stored.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::budget::{
    allocate_variable_budget_with, round_cents, savings_target, summarize_fixed_expenses_with,
    summarize_income_with, warnings, VariableAllocation, FIXED_PCT_HIGH,
};
use crate::config::BudgetConfig;
use crate::error::Result;
use crate::models::{FixedExpense, IncomeSource, Profile, SavingsGoal};

/// Fixed expense category used for the rent share metric
pub const RENT_CATEGORY: &str = "Rent";

/// Rent share of income above which the plan is flagged
pub const RENT_PCT_HIGH: f64 = 40.0;

/// Overall verdict on a plan, first matching condition wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    NoIncome,
    Infeasible,
    HighFixed,
    HighRent,
    Feasible,
}

impl HealthStatus {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoIncome => "Add an income source to evaluate your budget.",
            Self::Infeasible => {
                "Your plan is not feasible: fixed + savings is higher than income."
            }
            Self::HighFixed => {
                "Fixed costs are very high. You'll have limited flexibility month-to-month."
            }
            Self::HighRent => {
                "Rent is a large share of income. Consider ways to reduce housing pressure if possible."
            }
            Self::Feasible => "Budget looks feasible. Next step: track actual spending vs targets.",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Feasible)
    }
}

/// Percent-of-income ratios and the resulting verdict
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetHealth {
    pub rent_pct: f64,
    pub fixed_pct: f64,
    pub savings_pct: f64,
    pub status: HealthStatus,
}

impl BudgetHealth {
    pub fn evaluate(
        monthly_income: f64,
        fixed_total: f64,
        rent_total: f64,
        savings_target: f64,
        discretionary: f64,
    ) -> Self {
        let rent_pct = pct(rent_total, monthly_income);
        let fixed_pct = pct(fixed_total, monthly_income);
        let savings_pct = pct(savings_target, monthly_income);

        let status = if monthly_income <= 0.0 {
            HealthStatus::NoIncome
        } else if discretionary < 0.0 {
            HealthStatus::Infeasible
        } else if fixed_pct > FIXED_PCT_HIGH {
            HealthStatus::HighFixed
        } else if rent_pct > RENT_PCT_HIGH {
            HealthStatus::HighRent
        } else {
            HealthStatus::Feasible
        };

        Self {
            rent_pct,
            fixed_pct,
            savings_pct,
            status,
        }
    }
}

fn pct(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Every derived figure for one month
#[derive(Debug, Clone, Serialize)]
pub struct BudgetPlan {
    pub monthly_income: f64,
    pub fixed_total: f64,
    pub fixed_by_category: BTreeMap<String, f64>,
    pub savings_goal: SavingsGoal,
    pub savings_target: f64,
    /// Income minus fixed and savings, rounded to cents; negative when infeasible
    pub discretionary: f64,
    pub focus_categories: Vec<String>,
    pub variable_targets: VariableAllocation,
    pub warnings: Vec<String>,
    pub health: BudgetHealth,
}

impl BudgetPlan {
    /// Evaluate the plan for the given records
    ///
    /// Without a profile the savings goal is zero and no category is focused.
    /// `savings_override` replaces the computed savings target for a what-if
    /// run; negative overrides count as zero.
    pub fn compute(
        config: &BudgetConfig,
        incomes: &[IncomeSource],
        expenses: &[FixedExpense],
        profile: Option<&Profile>,
        savings_override: Option<f64>,
    ) -> Result<Self> {
        let monthly_income = summarize_income_with(config, incomes)?;
        let (fixed_total, fixed_by_category) = summarize_fixed_expenses_with(config, expenses)?;

        let savings_goal = profile.map(Profile::goal).unwrap_or_default();
        let focus_categories = profile.map(Profile::focus_list).unwrap_or_default();

        let savings_target = match savings_override {
            Some(value) => 0.0_f64.max(value),
            None => savings_target(monthly_income, &savings_goal),
        };

        let discretionary = round_cents(monthly_income - fixed_total - savings_target);
        let variable_targets =
            allocate_variable_budget_with(config, discretionary.max(0.0), &focus_categories);
        let warnings = warnings(monthly_income, fixed_total, savings_target);

        let rent_total = fixed_by_category
            .get(RENT_CATEGORY)
            .copied()
            .unwrap_or(0.0);
        let health = BudgetHealth::evaluate(
            monthly_income,
            fixed_total,
            rent_total,
            savings_target,
            discretionary,
        );

        debug!(
            monthly_income,
            fixed_total,
            savings_target,
            discretionary,
            warnings = warnings.len(),
            status = ?health.status,
            "Computed budget plan"
        );

        Ok(Self {
            monthly_income,
            fixed_total,
            fixed_by_category,
            savings_goal,
            savings_target,
            discretionary,
            focus_categories,
            variable_targets,
            warnings,
            health,
        })
    }

    /// Whether fixed expenses and savings fit within income
    pub fn is_feasible(&self) -> bool {
        self.discretionary >= 0.0
    }

    /// Fixed / savings / discretionary split as (name, amount, percent of income)
    ///
    /// A negative remainder shows as 0; percentages are 0 without income.
    pub fn buckets(&self) -> [(&'static str, f64, f64); 3] {
        let discretionary = self.discretionary.max(0.0);
        [
            ("Fixed", self.fixed_total, pct(self.fixed_total, self.monthly_income)),
            ("Savings", self.savings_target, pct(self.savings_target, self.monthly_income)),
            ("Discretionary", discretionary, pct(discretionary, self.monthly_income)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::GoalType;
    use chrono::Utc;

    fn income(amount: f64, frequency: &str) -> IncomeSource {
        IncomeSource {
            id: 1,
            name: "Job".to_string(),
            amount,
            frequency: frequency.to_string(),
            created_at: Utc::now(),
        }
    }

    fn expense(amount: f64, category: &str) -> FixedExpense {
        FixedExpense {
            id: 1,
            name: category.to_string(),
            amount,
            frequency: "monthly".to_string(),
            category: category.to_string(),
            created_at: Utc::now(),
        }
    }

    fn profile(goal_type: GoalType, goal_value: f64, focus: &str) -> Profile {
        Profile {
            location: None,
            savings_goal_type: goal_type,
            savings_goal_value: goal_value,
            focus_categories: focus.to_string(),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let config = BudgetConfig::default();
        let profile = profile(GoalType::Amount, 300.0, "Groceries");
        let plan = BudgetPlan::compute(
            &config,
            &[income(2000.0, "monthly")],
            &[expense(600.0, "Rent")],
            Some(&profile),
            None,
        )
        .unwrap();

        assert_eq!(plan.monthly_income, 2000.0);
        assert_eq!(plan.fixed_total, 600.0);
        assert_eq!(plan.fixed_by_category["Rent"], 600.0);
        assert_eq!(plan.savings_target, 300.0);
        assert_eq!(plan.discretionary, 1100.0);
        assert!(plan.variable_targets.get("Groceries").unwrap() > 0.30 * 1100.0);
        assert!((plan.variable_targets.total() - 1100.0).abs() < 0.05);
        assert!(plan.warnings.is_empty());
        assert_eq!(plan.health.status, HealthStatus::Feasible);
        assert_eq!(plan.health.fixed_pct, 30.0);
    }

    #[test]
    fn test_no_profile_means_no_savings_or_focus() {
        let plan = BudgetPlan::compute(
            &BudgetConfig::default(),
            &[income(1000.0, "monthly")],
            &[],
            None,
            None,
        )
        .unwrap();

        assert_eq!(plan.savings_target, 0.0);
        assert!(plan.focus_categories.is_empty());
        assert_eq!(plan.discretionary, 1000.0);
        assert_eq!(plan.variable_targets.get("Groceries"), Some(300.0));
    }

    #[test]
    fn test_empty_records() {
        let plan = BudgetPlan::compute(&BudgetConfig::default(), &[], &[], None, None).unwrap();
        assert_eq!(plan.monthly_income, 0.0);
        assert_eq!(plan.warnings.len(), 1);
        assert_eq!(plan.health.status, HealthStatus::NoIncome);
        assert_eq!(plan.health.fixed_pct, 0.0);
        assert!(plan.variable_targets.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_infeasible_plan_allocates_nothing() {
        let profile = profile(GoalType::Percent, 50.0, "");
        let plan = BudgetPlan::compute(
            &BudgetConfig::default(),
            &[income(1000.0, "monthly")],
            &[expense(700.0, "Rent")],
            Some(&profile),
            None,
        )
        .unwrap();

        assert_eq!(plan.savings_target, 500.0);
        assert_eq!(plan.discretionary, -200.0);
        assert!(!plan.is_feasible());
        assert!(plan.variable_targets.iter().all(|(_, v)| v == 0.0));
        assert_eq!(plan.health.status, HealthStatus::Infeasible);
        assert_eq!(plan.warnings.len(), 2);
        assert!(plan.warnings[1].contains("$200.00"));
        assert_eq!(plan.buckets()[2], ("Discretionary", 0.0, 0.0));
    }

    #[test]
    fn test_buckets_share_of_income() {
        let profile = profile(GoalType::Amount, 300.0, "");
        let plan = BudgetPlan::compute(
            &BudgetConfig::default(),
            &[income(2000.0, "monthly")],
            &[expense(600.0, "Rent")],
            Some(&profile),
            None,
        )
        .unwrap();

        let buckets = plan.buckets();
        let names: Vec<_> = buckets.iter().map(|b| b.0).collect();
        assert_eq!(names, vec!["Fixed", "Savings", "Discretionary"]);
        assert_eq!(buckets[2].1, 1100.0);
        assert!((buckets[0].2 - 30.0).abs() < 1e-9);
        assert!((buckets[1].2 - 15.0).abs() < 1e-9);
        assert!((buckets[2].2 - 55.0).abs() < 1e-9);

        let empty = BudgetPlan::compute(&BudgetConfig::default(), &[], &[], None, None).unwrap();
        assert!(empty.buckets().iter().all(|b| b.2 == 0.0));
    }

    #[test]
    fn test_savings_override() {
        let profile = profile(GoalType::Amount, 300.0, "");
        let incomes = [income(2000.0, "monthly")];

        let plan = BudgetPlan::compute(
            &BudgetConfig::default(),
            &incomes,
            &[],
            Some(&profile),
            Some(500.0),
        )
        .unwrap();
        assert_eq!(plan.savings_target, 500.0);
        assert_eq!(plan.discretionary, 1500.0);
        // The goal itself is untouched
        assert_eq!(plan.savings_goal.goal_value, 300.0);

        let plan = BudgetPlan::compute(
            &BudgetConfig::default(),
            &incomes,
            &[],
            Some(&profile),
            Some(-10.0),
        )
        .unwrap();
        assert_eq!(plan.savings_target, 0.0);
    }

    #[test]
    fn test_discretionary_rounded_to_cents() {
        let plan = BudgetPlan::compute(
            &BudgetConfig::default(),
            &[income(100.0, "weekly")],
            &[],
            None,
            None,
        )
        .unwrap();
        // 100 * 52 / 12 = 433.333...
        assert_eq!(plan.discretionary, 433.33);
    }

    #[test]
    fn test_invalid_frequency_propagates() {
        let result = BudgetPlan::compute(
            &BudgetConfig::default(),
            &[income(100.0, "daily")],
            &[],
            None,
            None,
        );
        assert!(matches!(result, Err(Error::InvalidFrequency(_))));
    }

    #[test]
    fn test_health_high_rent() {
        let health = BudgetHealth::evaluate(1000.0, 450.0, 450.0, 0.0, 550.0);
        assert_eq!(health.status, HealthStatus::HighRent);
        assert_eq!(health.rent_pct, 45.0);
    }

    #[test]
    fn test_health_high_fixed_beats_rent() {
        let health = BudgetHealth::evaluate(1000.0, 700.0, 500.0, 0.0, 300.0);
        assert_eq!(health.status, HealthStatus::HighFixed);
        assert!(!health.status.is_ok());
    }

    #[test]
    fn test_health_savings_pct() {
        let health = BudgetHealth::evaluate(2000.0, 0.0, 0.0, 200.0, 1800.0);
        assert_eq!(health.savings_pct, 10.0);
        assert!(health.status.is_ok());
    }
}
