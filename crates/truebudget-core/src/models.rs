//! Domain models for TrueBudget

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed expense categories offered when adding an expense.
///
/// Not enforced: any non-empty category name is accepted.
pub const SUGGESTED_EXPENSE_CATEGORIES: &[&str] = &[
    "Rent",
    "Bills",
    "Insurance",
    "Debt",
    "Subscriptions",
    "Other Fixed",
];

/// How often a recurring amount is paid or received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn all() -> &'static [Frequency] {
        &[Self::Weekly, Self::Biweekly, Self::Monthly]
    }
}

impl std::str::FromStr for Frequency {
    type Err = Error;

    /// Tags are matched exactly; "Weekly" or " weekly" are rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(Error::InvalidFrequency(s.to_string())),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the savings goal value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Fixed dollar amount per month
    #[default]
    Amount,
    /// Percentage of monthly income
    Percent,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Percent => "percent",
        }
    }
}

impl std::str::FromStr for GoalType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "amount" => Ok(Self::Amount),
            "percent" => Ok(Self::Percent),
            _ => Err(Error::InvalidGoalType(s.to_string())),
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurring income source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    /// Stored frequency tag, re-validated when normalized
    pub frequency: String,
    pub created_at: DateTime<Utc>,
}

/// A recurring fixed expense (rent, bills, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedExpense {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    /// Stored frequency tag, re-validated when normalized
    pub frequency: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Request to record a new income source
#[derive(Debug, Clone)]
pub struct NewIncome {
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
}

impl NewIncome {
    pub fn new(name: &str, amount: f64, frequency: Frequency) -> Self {
        Self {
            name: name.trim().to_string(),
            amount,
            frequency,
        }
    }

    /// Reject empty names and non-positive amounts
    pub fn validate(&self) -> Result<()> {
        validate_entry(&self.name, self.amount)
    }
}

/// Request to record a new fixed expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub category: String,
}

impl NewExpense {
    pub fn new(name: &str, amount: f64, frequency: Frequency, category: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            amount,
            frequency,
            category: category.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_entry(&self.name, self.amount)?;
        if self.category.is_empty() {
            return Err(Error::InvalidData("Expense category is required".into()));
        }
        Ok(())
    }
}

fn validate_entry(name: &str, amount: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidData("Please enter a name".into()));
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidData(format!(
            "Amount must be > 0 (got {})",
            amount
        )));
    }
    Ok(())
}

/// The single user profile row: location, savings goal and focus categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub location: Option<String>,
    pub savings_goal_type: GoalType,
    pub savings_goal_value: f64,
    /// Comma-separated category names, as entered by the user
    pub focus_categories: String,
}

impl Default for Profile {
    /// First-run profile shown before anything has been saved
    fn default() -> Self {
        Self {
            location: None,
            savings_goal_type: GoalType::Amount,
            savings_goal_value: 300.0,
            focus_categories: "Groceries, Social".to_string(),
        }
    }
}

impl Profile {
    /// Focus categories in entry order; duplicates are kept
    pub fn focus_list(&self) -> Vec<String> {
        parse_focus_categories(&self.focus_categories)
    }

    pub fn goal(&self) -> SavingsGoal {
        SavingsGoal {
            goal_type: self.savings_goal_type,
            goal_value: self.savings_goal_value,
        }
    }
}

/// Split a comma-separated focus list, trimming and dropping empty entries
pub fn parse_focus_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A savings goal, interpreted relative to monthly income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub goal_type: GoalType,
    pub goal_value: f64,
}

impl Default for SavingsGoal {
    fn default() -> Self {
        Self {
            goal_type: GoalType::Amount,
            goal_value: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_round_trip_tags() {
        for freq in Frequency::all() {
            let parsed: Frequency = freq.as_str().parse().unwrap();
            assert_eq!(parsed, *freq);
        }
    }

    #[test]
    fn test_frequency_rejects_unknown_tag() {
        for tag in ["daily", "Weekly", " monthly", "", "yearly"] {
            let err = tag.parse::<Frequency>().unwrap_err();
            assert!(matches!(err, Error::InvalidFrequency(ref t) if t == tag));
        }
    }

    #[test]
    fn test_goal_type_parse() {
        assert_eq!("amount".parse::<GoalType>().unwrap(), GoalType::Amount);
        assert_eq!("percent".parse::<GoalType>().unwrap(), GoalType::Percent);
        assert!(matches!(
            "ratio".parse::<GoalType>(),
            Err(Error::InvalidGoalType(_))
        ));
    }

    #[test]
    fn test_focus_list_trims_and_keeps_duplicates() {
        let profile = Profile {
            focus_categories: " Groceries, ,Social,Groceries ,".to_string(),
            ..Profile::default()
        };
        assert_eq!(
            profile.focus_list(),
            vec!["Groceries", "Social", "Groceries"]
        );
    }

    #[test]
    fn test_focus_list_empty() {
        assert!(parse_focus_categories("").is_empty());
        assert!(parse_focus_categories(" , ,").is_empty());
    }

    #[test]
    fn test_new_income_validation() {
        assert!(NewIncome::new("Job", 2000.0, Frequency::Monthly)
            .validate()
            .is_ok());
        assert!(NewIncome::new("   ", 2000.0, Frequency::Monthly)
            .validate()
            .is_err());
        assert!(NewIncome::new("Job", 0.0, Frequency::Monthly)
            .validate()
            .is_err());
        assert!(NewIncome::new("Job", f64::NAN, Frequency::Monthly)
            .validate()
            .is_err());
    }

    #[test]
    fn test_new_expense_requires_category() {
        let expense = NewExpense::new("Rent", 1200.0, Frequency::Monthly, "  ");
        assert!(matches!(expense.validate(), Err(Error::InvalidData(_))));

        let expense = NewExpense::new(" Rent ", 1200.0, Frequency::Monthly, "Rent");
        assert_eq!(expense.name, "Rent");
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_profile_default_matches_first_run() {
        let profile = Profile::default();
        assert_eq!(profile.savings_goal_type, GoalType::Amount);
        assert_eq!(profile.savings_goal_value, 300.0);
        assert_eq!(profile.focus_list(), vec!["Groceries", "Social"]);
    }
}
