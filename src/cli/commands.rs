//! CLI command handlers
//!
//! Bridges clap argument parsing with the session manager. Each handler
//! performs exactly one core operation against the logged-in session; the
//! caller is responsible for authentication before and logout (which saves)
//! after.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::{Settings, SpendbookPaths};
use crate::display::{format_expense_list, format_total};
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::Amount;
use crate::services::SessionManager;

/// Arguments for adding an expense
#[derive(Debug, Clone)]
pub struct AddArgs {
    /// What the expense was for
    pub description: String,
    /// Raw amount text; unparsable input is coerced to zero with a warning
    pub amount: String,
    /// Category label; defaults to the first configured category
    pub category: Option<String>,
    /// Expense date (YYYY-MM-DD); defaults to today
    pub date: Option<String>,
    /// Expense time (HH:MM or HH:MM:SS); defaults to midnight
    pub time: Option<String>,
}

/// Register a new user (auto-logs-in; caller logs out to persist)
pub fn handle_register(
    session: &mut SessionManager,
    username: &str,
    password: &str,
) -> SpendbookResult<()> {
    session.register(username, password)?;
    println!("Registered user '{}'.", username);
    Ok(())
}

/// Add an expense to the logged-in user's ledger
pub fn handle_add(
    session: &mut SessionManager,
    settings: &Settings,
    args: AddArgs,
) -> SpendbookResult<()> {
    let category = match args.category {
        Some(c) => c,
        None => settings
            .categories
            .first()
            .cloned()
            .unwrap_or_else(|| "Others".to_string()),
    };

    if !settings.has_category(&category) {
        return Err(SpendbookError::Validation(format!(
            "Unknown category: '{}'. Configured categories: {}",
            category,
            settings.categories.join(", ")
        )));
    }

    let timestamp = parse_timestamp(args.date.as_deref(), args.time.as_deref())?;

    let (amount, coerced) = Amount::parse_lenient(&args.amount);
    if coerced {
        eprintln!(
            "warning: amount '{}' could not be parsed; recording 0.00",
            args.amount
        );
    }

    session
        .ledger_mut()?
        .add(args.description.clone(), timestamp, category, amount)?;

    println!("Added expense: {}", args.description);
    Ok(())
}

/// List the logged-in user's expenses in ledger order
pub fn handle_list(session: &SessionManager) -> SpendbookResult<()> {
    let expenses = session.expenses().ok_or(SpendbookError::NotLoggedIn)?;
    print!("{}", format_expense_list(expenses));
    Ok(())
}

/// Remove the expense at a position
pub fn handle_remove(session: &mut SessionManager, position: usize) -> SpendbookResult<()> {
    let removed = session.ledger_mut()?.remove_at(position)?;
    println!("Removed expense: {}", removed);
    Ok(())
}

/// Sort the logged-in user's expenses by timestamp and show the result
pub fn handle_sort(session: &mut SessionManager) -> SpendbookResult<()> {
    session.ledger_mut()?.sort_by_timestamp();
    let expenses = session.expenses().ok_or(SpendbookError::NotLoggedIn)?;
    print!("{}", format_expense_list(expenses));
    Ok(())
}

/// Show the total of the logged-in user's expenses
pub fn handle_total(session: &SessionManager) -> SpendbookResult<()> {
    let total = session
        .current_user()
        .ok_or(SpendbookError::NotLoggedIn)?
        .expenses
        .total();
    println!("{}", format_total(total));
    Ok(())
}

/// Show the configured categories
pub fn handle_categories(settings: &Settings) {
    for category in &settings.categories {
        println!("{}", category);
    }
}

/// Show configuration paths
pub fn handle_config(paths: &SpendbookPaths) {
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("User data file:  {}", paths.user_data_file().display());
}

/// Combine optional date and time text into a timestamp
///
/// The date defaults to today; the time defaults to midnight, matching the
/// picker defaults of the original interface.
fn parse_timestamp(date: Option<&str>, time: Option<&str>) -> SpendbookResult<NaiveDateTime> {
    let date = match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
            SpendbookError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", d))
        })?,
        None => Local::now().date_naive(),
    };

    let time = match time {
        Some(t) => NaiveTime::parse_from_str(t, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
            .map_err(|_| {
                SpendbookError::Validation(format!("Invalid time: '{}'. Use HH:MM[:SS]", t))
            })?,
        None => NaiveTime::MIN,
    };

    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::UserStore;
    use tempfile::TempDir;

    fn logged_in_session(temp_dir: &TempDir) -> SessionManager {
        let store = UserStore::new(temp_dir.path().join("userdata.txt"));
        let mut session = SessionManager::open(store).unwrap();
        session.register("alice", "p1").unwrap();
        session
    }

    #[test]
    fn test_parse_timestamp_explicit() {
        let ts = parse_timestamp(Some("2025-01-03"), Some("12:30:05")).unwrap();
        assert_eq!(ts.to_string(), "2025-01-03 12:30:05");
    }

    #[test]
    fn test_parse_timestamp_short_time() {
        let ts = parse_timestamp(Some("2025-01-03"), Some("12:30")).unwrap();
        assert_eq!(ts.to_string(), "2025-01-03 12:30:00");
    }

    #[test]
    fn test_parse_timestamp_defaults_to_midnight() {
        let ts = parse_timestamp(Some("2025-01-03"), None).unwrap();
        assert_eq!(ts.to_string(), "2025-01-03 00:00:00");
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp(Some("not-a-date"), None).is_err());
        assert!(parse_timestamp(Some("2025-01-03"), Some("noon")).is_err());
    }

    #[test]
    fn test_handle_add_uses_first_category_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = logged_in_session(&temp_dir);
        let settings = Settings::default();

        handle_add(
            &mut session,
            &settings,
            AddArgs {
                description: "Lunch".into(),
                amount: "12.50".into(),
                category: None,
                date: Some("2025-01-03".into()),
                time: None,
            },
        )
        .unwrap();

        let expenses = session.expenses().unwrap();
        assert_eq!(expenses[0].category, "Food");
        assert_eq!(expenses[0].amount, Amount::from_cents(1250));
    }

    #[test]
    fn test_handle_add_rejects_unknown_category() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = logged_in_session(&temp_dir);
        let settings = Settings::default();

        let err = handle_add(
            &mut session,
            &settings,
            AddArgs {
                description: "Lunch".into(),
                amount: "12.50".into(),
                category: Some("Nonsense".into()),
                date: None,
                time: None,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(session.expenses().unwrap().is_empty());
    }

    #[test]
    fn test_handle_add_coerces_bad_amount_to_zero() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = logged_in_session(&temp_dir);
        let settings = Settings::default();

        handle_add(
            &mut session,
            &settings,
            AddArgs {
                description: "Mystery".into(),
                amount: "twelve".into(),
                category: Some("Others".into()),
                date: Some("2025-01-03".into()),
                time: None,
            },
        )
        .unwrap();

        assert_eq!(session.expenses().unwrap()[0].amount, Amount::zero());
    }

    #[test]
    fn test_handle_remove_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = logged_in_session(&temp_dir);

        let err = handle_remove(&mut session, 0).unwrap_err();
        assert!(matches!(err, SpendbookError::OutOfRange { .. }));
    }
}
