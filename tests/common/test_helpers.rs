//! Helper functions for integration tests

#![allow(dead_code)]

use std::path::Path;

/// Assert that every value is strictly greater than the previous one
pub fn assert_strictly_increasing(values: &[f64], message: &str) {
    for (i, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] > pair[0],
            "{}: element {} ({}) is not greater than element {} ({})",
            message,
            i + 1,
            pair[1],
            i,
            pair[0]
        );
    }
}

/// Assert that no value is greater than the previous one
pub fn assert_non_increasing(values: &[f64], message: &str) {
    for (i, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] <= pair[0],
            "{}: element {} ({}) rises above element {} ({})",
            message,
            i + 1,
            pair[1],
            i,
            pair[0]
        );
    }
}

/// Number of data rows in a CSV file (comments and header excluded)
pub fn count_csv_rows(path: &Path) -> usize {
    let content = std::fs::read_to_string(path).unwrap();
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .skip(1)
        .filter(|line| !line.is_empty())
        .count()
}
