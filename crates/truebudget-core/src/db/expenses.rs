//! Fixed expense operations

use rusqlite::params;
use tracing::info;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{FixedExpense, NewExpense};

impl Database {
    /// Record a new fixed expense, returning its ID
    pub fn add_expense(&self, expense: &NewExpense) -> Result<i64> {
        expense.validate()?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO expenses (name, amount, frequency, category) VALUES (?, ?, ?, ?)",
            params![
                expense.name,
                expense.amount,
                expense.frequency.as_str(),
                expense.category
            ],
        )?;

        let id = conn.last_insert_rowid();
        info!(id, name = %expense.name, category = %expense.category, "Added fixed expense");
        Ok(id)
    }

    /// List all fixed expenses, newest first
    pub fn list_expenses(&self) -> Result<Vec<FixedExpense>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, amount, frequency, category, created_at FROM expenses ORDER BY id DESC",
        )?;

        let expenses = stmt
            .query_map([], |row| {
                let created_at_str: String = row.get(5)?;
                Ok(FixedExpense {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    amount: row.get(2)?,
                    frequency: row.get(3)?,
                    category: row.get(4)?,
                    created_at: parse_datetime(&created_at_str),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// Delete a fixed expense; returns false if no row had that ID
    pub fn delete_expense(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;
        if deleted > 0 {
            info!(id, "Deleted fixed expense");
        }
        Ok(deleted > 0)
    }
}
