//! Text codec for the persisted user file
//!
//! The on-disk format is line oriented. Each user block is:
//!
//! ```text
//! username;password
//! description;timestamp;category;amount
//! ...
//! <blank line>
//! ```
//!
//! Timestamps are `yyyy-MM-dd HH:mm:ss`; amounts are fixed-point decimals
//! with two fraction digits. Users appear in directory iteration order and
//! nothing follows the last blank line.
//!
//! Decoding is total: it never fails on the input as a whole. An expense
//! line that does not split into exactly four fields, or whose timestamp or
//! amount does not parse, is silently dropped. The codec performs no file
//! I/O; that is the store's job.

use chrono::NaiveDateTime;

use crate::models::{Amount, Directory, Expense, Ledger, User, TIMESTAMP_FORMAT};

/// Encode a directory into the persisted text form
pub fn encode(directory: &Directory) -> String {
    let mut out = String::new();

    for user in directory {
        out.push_str(&user.username);
        out.push(';');
        out.push_str(&user.password);
        out.push('\n');

        for expense in &user.expenses {
            out.push_str(&format!(
                "{};{};{};{}\n",
                expense.description,
                expense.timestamp.format(TIMESTAMP_FORMAT),
                expense.category,
                expense.amount
            ));
        }

        // Blank line terminates the user block
        out.push('\n');
    }

    out
}

/// Decode persisted text into a directory
///
/// Accumulates whatever validly parses; malformed expense lines are dropped
/// and a duplicate username keeps only the first occurrence.
pub fn decode(input: &str) -> Directory {
    let mut directory = Directory::new();
    // Open user block: header fields plus the expenses decoded so far
    let mut current: Option<(User, Vec<Expense>)> = None;

    for line in input.lines() {
        if current.is_none() {
            if !line.is_empty() {
                // A new user block: `username;password`, split on the
                // first separator so passwords may contain one.
                let (username, password) = line.split_once(';').unwrap_or((line, ""));
                current = Some((User::new(username, password), Vec::new()));
            }
        } else if line.is_empty() {
            // Blank line closes the open block
            if let Some((user, expenses)) = current.take() {
                insert_decoded(&mut directory, user, expenses);
            }
        } else if let Some(expense) = decode_expense_line(line) {
            if let Some((_, expenses)) = current.as_mut() {
                expenses.push(expense);
            }
        }
    }

    // End of input closes an open block
    if let Some((user, expenses)) = current.take() {
        insert_decoded(&mut directory, user, expenses);
    }

    directory
}

fn insert_decoded(directory: &mut Directory, mut user: User, expenses: Vec<Expense>) {
    user.expenses = Ledger::from_entries(expenses);
    // A duplicate username in the file keeps only the first occurrence
    let _ = directory.insert(user);
}

/// Parse one expense line, returning `None` if it is malformed
fn decode_expense_line(line: &str) -> Option<Expense> {
    let parts: Vec<&str> = line.split(';').collect();
    if parts.len() != 4 {
        return None;
    }

    let timestamp = NaiveDateTime::parse_from_str(parts[1], TIMESTAMP_FORMAT).ok()?;
    let amount = Amount::parse(parts[3]).ok()?;

    Some(Expense::new(parts[0], timestamp, parts[2], amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample_directory() -> Directory {
        let mut dir = Directory::new();

        let mut alice = User::new("alice", "p1");
        alice
            .expenses
            .add("Lunch", ts(3), "Food", Amount::from_cents(1250))
            .unwrap();
        alice
            .expenses
            .add("Bus", ts(1), "Transportation", Amount::from_cents(275))
            .unwrap();
        dir.insert(alice).unwrap();

        dir.insert(User::new("bob", "secret")).unwrap();
        dir
    }

    #[test]
    fn test_encode_exact_layout() {
        let encoded = encode(&sample_directory());
        assert_eq!(
            encoded,
            "alice;p1\n\
             Lunch;2025-01-03 12:00:00;Food;12.50\n\
             Bus;2025-01-01 12:00:00;Transportation;2.75\n\
             \n\
             bob;secret\n\
             \n"
        );
    }

    #[test]
    fn test_round_trip() {
        let dir = sample_directory();
        assert_eq!(decode(&encode(&dir)), dir);
    }

    #[test]
    fn test_round_trip_empty_directory() {
        let dir = Directory::new();
        assert_eq!(encode(&dir), "");
        assert_eq!(decode(""), dir);
    }

    #[test]
    fn test_decode_drops_short_expense_line() {
        let input = "alice;p1\n\
                     Lunch;2025-01-03 12:00:00;Food;12.50\n\
                     Bus;2025-01-01 12:00:00;Transportation\n\
                     \n";
        let dir = decode(input);
        let alice = dir.get("alice").unwrap();
        assert_eq!(alice.expenses.len(), 1);
        assert_eq!(alice.expenses.get(0).unwrap().description, "Lunch");
    }

    #[test]
    fn test_decode_drops_bad_timestamp_and_amount() {
        let input = "alice;p1\n\
                     Lunch;not a timestamp;Food;12.50\n\
                     Dinner;2025-01-03 12:00:00;Food;twelve\n\
                     Coffee;2025-01-03 09:00:00;Food;4.50\n\
                     \n";
        let dir = decode(input);
        let alice = dir.get("alice").unwrap();
        assert_eq!(alice.expenses.len(), 1);
        assert_eq!(alice.expenses.get(0).unwrap().description, "Coffee");
    }

    #[test]
    fn test_decode_closes_block_at_end_of_input() {
        // No trailing blank line: end of input closes the block
        let input = "alice;p1\nLunch;2025-01-03 12:00:00;Food;12.50";
        let dir = decode(input);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("alice").unwrap().expenses.len(), 1);
    }

    #[test]
    fn test_decode_header_without_separator() {
        // A header with no `;` becomes a username with an empty password
        let dir = decode("alice\n\n");
        assert_eq!(dir.get("alice").unwrap().password, "");
    }

    #[test]
    fn test_decode_password_containing_separator() {
        let dir = decode("alice;p;1\n\n");
        assert_eq!(dir.get("alice").unwrap().password, "p;1");
    }

    #[test]
    fn test_decode_keeps_first_of_duplicate_usernames() {
        let input = "alice;p1\n\nalice;p2\n\n";
        let dir = decode(input);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("alice").unwrap().password, "p1");
    }

    #[test]
    fn test_decode_drops_overflowing_amount() {
        // An amount whose cents exceed the i64 range is malformed; the line
        // is dropped like any other unparsable amount
        let input = "alice;p1\n\
                     Yacht;2025-01-03 12:00:00;Others;922337203685477581\n\
                     Coffee;2025-01-03 09:00:00;Food;4.50\n\
                     \n";
        let dir = decode(input);
        let alice = dir.get("alice").unwrap();
        assert_eq!(alice.expenses.len(), 1);
        assert_eq!(alice.expenses.get(0).unwrap().description, "Coffee");
    }

    #[test]
    fn test_decode_never_fails_on_garbage() {
        let dir = decode(";;;;\n\x00garbage\n\n;\n12.50\n");
        // Whatever parses is kept; nothing panics
        assert!(dir.len() <= 3);
    }
}
