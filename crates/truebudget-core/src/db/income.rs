//! Income source operations

use rusqlite::params;
use tracing::info;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{IncomeSource, NewIncome};

impl Database {
    /// Record a new income source, returning its ID
    pub fn add_income(&self, income: &NewIncome) -> Result<i64> {
        income.validate()?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO income_sources (name, amount, frequency) VALUES (?, ?, ?)",
            params![income.name, income.amount, income.frequency.as_str()],
        )?;

        let id = conn.last_insert_rowid();
        info!(id, name = %income.name, "Added income source");
        Ok(id)
    }

    /// List all income sources, newest first
    pub fn list_income(&self) -> Result<Vec<IncomeSource>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, amount, frequency, created_at FROM income_sources ORDER BY id DESC",
        )?;

        let incomes = stmt
            .query_map([], |row| {
                let created_at_str: String = row.get(4)?;
                Ok(IncomeSource {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    amount: row.get(2)?,
                    frequency: row.get(3)?,
                    created_at: parse_datetime(&created_at_str),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(incomes)
    }

    /// Delete an income source; returns false if no row had that ID
    pub fn delete_income(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM income_sources WHERE id = ?", params![id])?;
        if deleted > 0 {
            info!(id, "Deleted income source");
        }
        Ok(deleted > 0)
    }
}
