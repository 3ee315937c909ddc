//! Expense display formatting
//!
//! Formats a user's ledger for terminal output: a position-indexed register
//! of expense rows and the total line.

use crate::models::{Amount, Expense, TIMESTAMP_FORMAT};

/// Format a single expense as a register row
pub fn format_expense_row(position: usize, expense: &Expense) -> String {
    format!(
        "{:>3}  {}  {:15} {:>10}  {}",
        position,
        expense.timestamp.format(TIMESTAMP_FORMAT),
        truncate(&expense.category, 15),
        expense.amount.format_with_symbol("$"),
        expense.description
    )
}

/// Format a list of expenses as a register
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:19}  {:15} {:>10}  {}\n",
        "Pos", "Date/Time", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for (position, expense) in expenses.iter().enumerate() {
        output.push_str(&format_expense_row(position, expense));
        output.push('\n');
    }

    output
}

/// Format the ledger total
pub fn format_total(total: Amount) -> String {
    format!("Total Expenses: {}", total.format_with_symbol("$"))
}

/// Truncate a string to a maximum width, adding an ellipsis if needed
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
