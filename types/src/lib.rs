use serde::{Deserialize, Serialize};

// ── Date notation ────────────────────────────────────────────────────────

/// Which surface form a rewritten date was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateNotation {
    /// 令和五年三月二日
    EraName,
    /// 二〇二三年三月二日
    Gregorian,
    /// R5.3.2
    EraAbbreviation,
    /// 2023/3/2
    Delimited,
}

// ── Rewritten date ───────────────────────────────────────────────────────

/// One date span that was rewritten into canonical `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMatch {
    pub notation: DateNotation,
    /// Matched text, as seen by the pass that rewrote it
    pub raw: String,
    pub canonical: String,
    pub year: u64,
    pub month: u64,
    pub day: u64,
}

// ── CLI output records ───────────────────────────────────────────────────

/// A single normalized line, emitted by `text --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedLine {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<DateMatch>,
}

/// Per-file summary written by `batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Path relative to the corpus root
    pub file: String,
    pub output_file: String,
    pub chars_in: usize,
    pub chars_out: usize,
    pub dates: Vec<DateMatch>,
}

/// Whole-corpus summary written to `report.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub root: String,
    pub files: Vec<FileReport>,
    pub total_dates: usize,
}

impl BatchReport {
    pub fn new(root: String, files: Vec<FileReport>) -> Self {
        let total_dates = files.iter().map(|f| f.dates.len()).sum();
        Self {
            root,
            files,
            total_dates,
        }
    }
}
