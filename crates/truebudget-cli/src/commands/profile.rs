//! Profile command implementations

use anyhow::Result;
use truebudget_core::db::Database;
use truebudget_core::models::{GoalType, Profile};

use super::money;

/// Fields given to `profile set`; `None` keeps the current value
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub location: Option<String>,
    pub goal_type: Option<String>,
    pub goal_value: Option<f64>,
    pub focus: Option<String>,
}

impl ProfileUpdate {
    /// Apply the given fields on top of `profile`
    ///
    /// An empty `--location ""` clears the location.
    pub fn apply(self, mut profile: Profile) -> Result<Profile> {
        if let Some(location) = self.location {
            let location = location.trim();
            profile.location = (!location.is_empty()).then(|| location.to_string());
        }
        if let Some(goal_type) = self.goal_type {
            profile.savings_goal_type = goal_type.trim().to_lowercase().parse()?;
        }
        if let Some(goal_value) = self.goal_value {
            profile.savings_goal_value = goal_value;
        }
        if let Some(focus) = self.focus {
            profile.focus_categories = focus.trim().to_string();
        }
        Ok(profile)
    }
}

fn describe_goal(profile: &Profile) -> String {
    match profile.savings_goal_type {
        GoalType::Amount => format!("{} per month", money(profile.savings_goal_value)),
        GoalType::Percent => format!("{}% of income", profile.savings_goal_value),
    }
}

fn print_profile(profile: &Profile) {
    println!(
        "   Location:         {}",
        profile.location.as_deref().unwrap_or("(not set)")
    );
    println!("   Savings goal:     {}", describe_goal(profile));
    let focus = profile.focus_list();
    if focus.is_empty() {
        println!("   Focus categories: (none)");
    } else {
        println!("   Focus categories: {}", focus.join(", "));
    }
}

pub fn cmd_profile_show(db: &Database) -> Result<()> {
    println!();
    println!("👤 Profile");
    println!("   ─────────────────────────────");

    match db.get_profile()? {
        Some(profile) => print_profile(&profile),
        None => {
            print_profile(&Profile::default());
            println!();
            println!("   (defaults, not saved yet; run 'truebudget profile set' to save)");
        }
    }

    Ok(())
}

pub fn cmd_profile_set(db: &Database, update: ProfileUpdate) -> Result<Profile> {
    let current = db.get_profile()?.unwrap_or_default();
    let profile = update.apply(current)?;
    db.upsert_profile(&profile)?;

    println!("✅ Profile saved");
    print_profile(&profile);

    Ok(profile)
}
