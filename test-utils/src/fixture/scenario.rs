//! Scenario table fixtures, header row first.

/// Users table as a scenario author would write it.
///
/// | Name  | Age |
/// |-------|-----|
/// | Alice | 30  |
/// | Bob   | 41  |
pub fn users() -> Vec<Vec<String>> {
    rows(&[&["Name", "Age"], &["Alice", "30"], &["Bob", "41"]])
}

/// Accounts table using labels that need header translation.
///
/// | Username | E-mail            | Active | Balance |
/// |----------|-------------------|--------|---------|
/// | alice    | alice@example.com | yes    | 10.5    |
/// | bob      | bob@example.com   | no     | 0       |
pub fn accounts() -> Vec<Vec<String>> {
    rows(&[
        &["Username", "E-mail", "Active", "Balance"],
        &["alice", "alice@example.com", "yes", "10.5"],
        &["bob", "bob@example.com", "no", "0"],
    ])
}

/// Converts string slices into owned scenario rows.
pub fn rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}
