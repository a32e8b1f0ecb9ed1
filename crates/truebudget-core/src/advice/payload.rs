//! Structured payload handed to the advice service

use std::collections::BTreeMap;

use serde::Serialize;

use crate::budget::VariableAllocation;
use crate::models::GoalType;
use crate::plan::BudgetPlan;

/// Instruction carried inside the payload itself
pub const PAYLOAD_NOTE: &str = "The app computed all numbers. Use these numbers exactly.";

/// Already-computed figures the advice text must be based on
#[derive(Debug, Clone, Serialize)]
pub struct AdvicePayload {
    pub location: String,
    pub monthly_income: f64,
    pub fixed_expenses_total: f64,
    pub fixed_expenses_by_category: BTreeMap<String, f64>,
    pub savings_goal_type: GoalType,
    pub savings_goal_value: f64,
    pub savings_target_monthly: f64,
    pub discretionary_left: f64,
    pub focus_categories: Vec<String>,
    pub suggested_variable_targets: VariableAllocation,
    pub warnings: Vec<String>,
    pub note: String,
}

impl AdvicePayload {
    /// Copy the plan's figures verbatim
    pub fn from_plan(plan: &BudgetPlan, location: Option<&str>) -> Self {
        Self {
            location: location.unwrap_or_default().to_string(),
            monthly_income: plan.monthly_income,
            fixed_expenses_total: plan.fixed_total,
            fixed_expenses_by_category: plan.fixed_by_category.clone(),
            savings_goal_type: plan.savings_goal.goal_type,
            savings_goal_value: plan.savings_goal.goal_value,
            savings_target_monthly: plan.savings_target,
            discretionary_left: plan.discretionary,
            focus_categories: plan.focus_categories.clone(),
            suggested_variable_targets: plan.variable_targets.clone(),
            warnings: plan.warnings.clone(),
            note: PAYLOAD_NOTE.to_string(),
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
