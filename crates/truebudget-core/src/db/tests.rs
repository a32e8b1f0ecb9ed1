//! Database tests

use super::*;
use crate::models::*;

#[test]
fn test_in_memory_db() {
    let db = Database::in_memory().unwrap();
    assert!(db.list_income().unwrap().is_empty());
    assert!(db.list_expenses().unwrap().is_empty());
    assert!(db.get_profile().unwrap().is_none());
}

#[test]
fn test_schema_exists() {
    let db = Database::in_memory().unwrap();
    let conn = db.conn().unwrap();

    let result: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('expenses') WHERE name IN ('id', 'name', 'amount', 'frequency', 'category', 'created_at')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(result, 6, "expenses table should have 6 expected columns");

    let result: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('profile') WHERE name IN ('id', 'location', 'savings_goal_type', 'savings_goal_value', 'focus_categories')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(result, 5, "profile table should have 5 expected columns");
}

#[test]
fn test_income_crud() {
    let db = Database::in_memory().unwrap();

    let first = db
        .add_income(&NewIncome::new("Job", 2000.0, Frequency::Monthly))
        .unwrap();
    let second = db
        .add_income(&NewIncome::new(" Side gig ", 150.0, Frequency::Weekly))
        .unwrap();
    assert!(second > first);

    let incomes = db.list_income().unwrap();
    assert_eq!(incomes.len(), 2);
    // Newest first
    assert_eq!(incomes[0].id, second);
    assert_eq!(incomes[0].name, "Side gig");
    assert_eq!(incomes[0].frequency, "weekly");
    assert_eq!(incomes[1].amount, 2000.0);

    assert!(db.delete_income(first).unwrap());
    assert!(!db.delete_income(first).unwrap());
    assert_eq!(db.list_income().unwrap().len(), 1);
}

#[test]
fn test_add_income_validates() {
    let db = Database::in_memory().unwrap();
    assert!(matches!(
        db.add_income(&NewIncome::new("", 10.0, Frequency::Monthly)),
        Err(Error::InvalidData(_))
    ));
    assert!(matches!(
        db.add_income(&NewIncome::new("Job", -1.0, Frequency::Monthly)),
        Err(Error::InvalidData(_))
    ));
    assert!(db.list_income().unwrap().is_empty());
}

#[test]
fn test_frequency_check_constraint() {
    let db = Database::in_memory().unwrap();
    let conn = db.conn().unwrap();
    let result = conn.execute(
        "INSERT INTO income_sources (name, amount, frequency) VALUES ('Job', 10.0, 'daily')",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn test_expense_crud() {
    let db = Database::in_memory().unwrap();

    let rent = db
        .add_expense(&NewExpense::new(
            "Rent",
            1200.0,
            Frequency::Monthly,
            "Rent",
        ))
        .unwrap();
    db.add_expense(&NewExpense::new(
        "Gym",
        10.0,
        Frequency::Weekly,
        "Custom Category",
    ))
    .unwrap();

    let expenses = db.list_expenses().unwrap();
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].category, "Custom Category");
    assert_eq!(expenses[1].name, "Rent");

    assert!(db.delete_expense(rent).unwrap());
    assert!(!db.delete_expense(9999).unwrap());
    assert_eq!(db.list_expenses().unwrap().len(), 1);
}

#[test]
fn test_profile_upsert_replaces_single_row() {
    let db = Database::in_memory().unwrap();

    let mut profile = Profile {
        location: Some("Toronto".to_string()),
        savings_goal_type: GoalType::Percent,
        savings_goal_value: 15.0,
        focus_categories: "Groceries, Food Out".to_string(),
    };
    db.upsert_profile(&profile).unwrap();
    assert_eq!(db.get_profile().unwrap(), Some(profile.clone()));

    profile.savings_goal_type = GoalType::Amount;
    profile.savings_goal_value = 250.0;
    profile.location = Some("   ".to_string());
    db.upsert_profile(&profile).unwrap();

    let stored = db.get_profile().unwrap().unwrap();
    assert_eq!(stored.savings_goal_type, GoalType::Amount);
    assert_eq!(stored.savings_goal_value, 250.0);
    assert_eq!(stored.location, None);

    let conn = db.conn().unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM profile", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_profile_rejects_negative_goal() {
    let db = Database::in_memory().unwrap();
    let profile = Profile {
        savings_goal_value: -5.0,
        ..Profile::default()
    };
    assert!(matches!(
        db.upsert_profile(&profile),
        Err(Error::InvalidData(_))
    ));
    assert!(db.get_profile().unwrap().is_none());
}

#[test]
fn test_reset_and_stats() {
    let db = Database::in_memory().unwrap();
    db.add_income(&NewIncome::new("Job", 2000.0, Frequency::Monthly))
        .unwrap();
    db.add_expense(&NewExpense::new("Rent", 600.0, Frequency::Monthly, "Rent"))
        .unwrap();
    db.upsert_profile(&Profile::default()).unwrap();

    let stats = db.stats().unwrap();
    assert_eq!(stats.income_sources, 1);
    assert_eq!(stats.expenses, 1);
    assert!(stats.has_profile);

    db.reset().unwrap();
    let stats = db.stats().unwrap();
    assert_eq!(stats.income_sources, 0);
    assert_eq!(stats.expenses, 0);
    assert!(!stats.has_profile);
}

#[test]
fn test_on_disk_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budget.db");
    let path = path.to_str().unwrap();

    {
        let db = Database::new_unencrypted(path).unwrap();
        db.add_income(&NewIncome::new("Job", 1000.0, Frequency::Biweekly))
            .unwrap();
    }

    let db = Database::new_unencrypted(path).unwrap();
    assert_eq!(db.path(), path);
    let incomes = db.list_income().unwrap();
    assert_eq!(incomes.len(), 1);
    assert_eq!(incomes[0].frequency, "biweekly");
}

#[test]
fn test_derive_key_is_deterministic() {
    let a = derive_key("correct horse").unwrap();
    let b = derive_key("correct horse").unwrap();
    let c = derive_key("battery staple").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_is_encrypted_reflects_key() {
    let dir = tempfile::tempdir().unwrap();
    let plain_path = dir.path().join("plain.db");
    let keyed_path = dir.path().join("keyed.db");

    let plain = Database::new_unencrypted(plain_path.to_str().unwrap()).unwrap();
    assert!(!plain.is_encrypted());

    let keyed = Database::new_with_key(keyed_path.to_str().unwrap(), Some("hunter2")).unwrap();
    assert!(keyed.is_encrypted());
    keyed
        .add_income(&NewIncome::new("Job", 1000.0, Frequency::Monthly))
        .unwrap();
    drop(keyed);

    // The keyed file is unreadable without the passphrase
    assert!(Database::new_unencrypted(keyed_path.to_str().unwrap()).is_err());

    let reopened = Database::new_with_key(keyed_path.to_str().unwrap(), Some("hunter2")).unwrap();
    assert_eq!(reopened.list_income().unwrap().len(), 1);
}

#[test]
fn test_in_memory_removes_files_on_drop() {
    let db = Database::in_memory().unwrap();
    db.add_income(&NewIncome::new("Job", 1000.0, Frequency::Monthly))
        .unwrap();
    let path = std::path::PathBuf::from(db.path());
    let dir = path.parent().unwrap().to_path_buf();
    assert!(path.exists());

    // Clones share the directory; it goes away with the last one
    let clone = db.clone();
    drop(db);
    assert!(path.exists());
    assert_eq!(clone.list_income().unwrap().len(), 1);

    drop(clone);
    assert!(!dir.exists());
}
