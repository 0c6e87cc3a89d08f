//! Custom assertion helpers for rendered frames

#![allow(unused_imports)]
#![allow(unused_macros)]

use ratatui::buffer::Buffer;

/// Assert that some row of a buffer contains the text
macro_rules! assert_screen_contains {
    ($buffer:expr, $needle:expr) => {
        let lines = $crate::common::buffer_lines(&$buffer);
        if !lines.iter().any(|line| line.contains($needle)) {
            eprintln!("Screen:");
            for line in &lines {
                eprintln!("|{}|", line);
            }
            panic!("Expected screen to contain {:?}", $needle);
        }
    };
}

/// Assert that no row of a buffer contains the text
macro_rules! assert_screen_lacks {
    ($buffer:expr, $needle:expr) => {
        let lines = $crate::common::buffer_lines(&$buffer);
        if let Some(line) = lines.iter().find(|line| line.contains($needle)) {
            panic!("Expected screen not to contain {:?}, found in {:?}", $needle, line);
        }
    };
}

pub(crate) use assert_screen_contains;
pub(crate) use assert_screen_lacks;

/// Assert that the cell at (x, y) shows the given symbol
pub fn assert_symbol(buffer: &Buffer, x: u16, y: u16, expected: &str) {
    let actual = buffer[(x, y)].symbol();
    assert_eq!(
        actual, expected,
        "cell ({}, {}) should be {:?} but was {:?}",
        x, y, expected, actual
    );
}

/// Assert that two renders of the same model are identical
pub fn assert_same_frame(first: &Buffer, second: &Buffer, context: &str) {
    assert_eq!(first, second, "{} should render identically", context);
}
