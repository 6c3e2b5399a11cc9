//! Japanese numeral and date normalization.
//!
//! [`normalize_number`] turns kanji, full-width or mixed numerals into
//! integers; [`normalize_text`] rewrites era-based, kanji and delimited
//! date notations in running text into `YYYY-MM-DD`. [`TextCleaner`]
//! provides independent web-text cleaning filters.

pub mod calendar;
pub mod cleaner;
pub mod date;
pub mod era;
pub mod numeral;
pub mod scanner;

pub use cleaner::{CleanerConfig, TextCleaner};
pub use era::Era;
pub use jp_textnorm_types::{DateMatch, DateNotation};

/// Numeral token → integer. Unrecognized input is 0; "元" is 1.
pub fn normalize_number(token: &str) -> u64 {
    numeral::normalize_number(token)
}

/// Fold full-width digits, then rewrite every recognized date.
pub fn normalize_text(text: &str) -> String {
    date::rewrite(text)
}

/// [`normalize_text`], also returning each date that was rewritten.
pub fn normalize_text_with_report(text: &str) -> (String, Vec<DateMatch>) {
    date::rewrite_with_report(text)
}
