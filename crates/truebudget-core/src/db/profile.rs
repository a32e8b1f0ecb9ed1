//! Profile operations (single row)

use rusqlite::{params, OptionalExtension};
use tracing::{info, warn};

use super::Database;
use crate::error::{Error, Result};
use crate::models::{GoalType, Profile};

impl Database {
    /// Insert or replace the profile row
    pub fn upsert_profile(&self, profile: &Profile) -> Result<()> {
        if !profile.savings_goal_value.is_finite() || profile.savings_goal_value < 0.0 {
            return Err(Error::InvalidData(format!(
                "Savings goal value must be >= 0 (got {})",
                profile.savings_goal_value
            )));
        }

        let location = profile
            .location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO profile (id, location, savings_goal_type, savings_goal_value, focus_categories)
            VALUES (1, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                location = excluded.location,
                savings_goal_type = excluded.savings_goal_type,
                savings_goal_value = excluded.savings_goal_value,
                focus_categories = excluded.focus_categories
            "#,
            params![
                location,
                profile.savings_goal_type.as_str(),
                profile.savings_goal_value,
                profile.focus_categories
            ],
        )?;

        info!(
            goal_type = %profile.savings_goal_type,
            goal_value = profile.savings_goal_value,
            "Saved profile"
        );
        Ok(())
    }

    /// Get the profile row, if one has been saved
    pub fn get_profile(&self) -> Result<Option<Profile>> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT location, savings_goal_type, savings_goal_value, focus_categories FROM profile WHERE id = 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, Option<String>>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, f64>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;

        let Some((location, goal_type, goal_value, focus_categories)) = row else {
            return Ok(None);
        };

        let savings_goal_type: GoalType = goal_type.parse().map_err(|e| {
            warn!(goal_type = %goal_type, "Stored profile has an unknown goal type");
            e
        })?;

        Ok(Some(Profile {
            location,
            savings_goal_type,
            savings_goal_value: goal_value,
            focus_categories,
        }))
    }
}
