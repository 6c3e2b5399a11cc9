//! Date rewriting: recognize Japanese date notations in running text and
//! replace each with a canonical `YYYY-MM-DD` string.
//!
//! Passes run in a fixed order over the output of the previous pass:
//!
//!   0. full-width digits → ASCII
//!   1. era-name dates        令和五年三月二日
//!   2. Gregorian kanji dates 二〇二三年三月二日
//!   3. era-letter dates      R5.3.2
//!   4. delimited dates       2023/3/2
//!
//! Order matters: an era-name date would also satisfy the Gregorian
//! pattern from its year digits onward, so era names must go first.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::calendar::days_in_month;
use crate::era::{self, Era};
use crate::numeral::normalize_number;
use jp_textnorm_types::{DateMatch, DateNotation};

// ── Regex patterns ─────────────────────────────────────────────────

/// One numeral character in month/day and era-year position.
const NUM: &str = "[元0-9一二三四五六七八九十百〇]";

// Pattern 1: {era}{year}年{month}月{day}日 / {era}{year}年{month}月末日
static RE_ERA_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "({era})({NUM}+)年({NUM}+)月(末日|{NUM}+日)",
        era = era::build_era_regex()
    ))
    .expect("era date regex")
});

// Pattern 2: {year}年{month}月{day}日, year of 2–4 numeral characters
static RE_GREGORIAN_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "([０-９0-9〇一二三四五六七八九十百千]{{2,4}})年({NUM}+)月(末日|{NUM}+日)"
    ))
    .expect("gregorian date regex")
});

// Pattern 3: R5.3.2, H31/4/30, R元年5月1日, S64.1.末日
static RE_ABBREVIATED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "({abbr})([元0-9]+)[年./]([0-9]{{1,2}})[月./](末日|[0-9]{{1,2}})日?",
        abbr = era::build_abbreviation_class()
    ))
    .expect("abbreviated date regex")
});

// Pattern 4: 2023/3/2, 2023.03.02
static RE_DELIMITED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})[./]([0-9]{1,2})[./]([0-9]{1,2})").expect("delimited date regex")
});

// ── Date components ────────────────────────────────────────────────

/// Day position of a date: a numeral or 末日 (last day of the month).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayToken {
    Day(u64),
    EndOfMonth,
}

impl DayToken {
    fn parse(token: &str) -> Self {
        if token == "末日" {
            return Self::EndOfMonth;
        }
        let digits = token.strip_suffix('日').unwrap_or(token);
        Self::Day(normalize_number(digits))
    }
}

/// Resolve the day and format. `None` only when 末日 meets a month that
/// has no length (outside 1–12).
fn resolve(year: u64, month: u64, day: DayToken) -> Option<(u64, u64, u64)> {
    let day = match day {
        DayToken::Day(d) => d,
        DayToken::EndOfMonth => days_in_month(year, month)?,
    };
    Some((year, month, day))
}

/// Format as `YYYY-MM-DD`. Values wider than the field are not truncated.
pub fn format_canonical(year: u64, month: u64, day: u64) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

// ── Passes ─────────────────────────────────────────────────────────

/// Replace full-width digits (０–９) with ASCII digits. Nothing else changes.
pub fn fold_fullwidth_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            _ => c,
        })
        .collect()
}

/// Run one substitution pass. Matches that `components` cannot resolve
/// are left as they are.
fn substitute<F>(
    re: &Regex,
    text: &str,
    notation: DateNotation,
    dates: &mut Vec<DateMatch>,
    components: F,
) -> String
where
    F: Fn(&Captures) -> Option<(u64, u64, u64)>,
{
    let before = dates.len();
    let out = re.replace_all(text, |caps: &Captures| {
        let raw = &caps[0];
        match components(caps) {
            Some((year, month, day)) => {
                let canonical = format_canonical(year, month, day);
                dates.push(DateMatch {
                    notation,
                    raw: raw.to_string(),
                    canonical: canonical.clone(),
                    year,
                    month,
                    day,
                });
                canonical
            }
            None => {
                log::debug!("{notation:?}: cannot resolve {raw:?}, left unchanged");
                raw.to_string()
            }
        }
    });
    log::trace!("{notation:?}: {} date(s) rewritten", dates.len() - before);
    out.into_owned()
}

fn era_name_components(caps: &Captures) -> Option<(u64, u64, u64)> {
    let era = Era::from_name(&caps[1])?;
    let year = era.gregorian_year(normalize_number(&caps[2]));
    resolve(year, normalize_number(&caps[3]), DayToken::parse(&caps[4]))
}

fn gregorian_components(caps: &Captures) -> Option<(u64, u64, u64)> {
    resolve(
        normalize_number(&caps[1]),
        normalize_number(&caps[2]),
        DayToken::parse(&caps[3]),
    )
}

fn abbreviated_components(caps: &Captures) -> Option<(u64, u64, u64)> {
    let era = Era::from_abbreviation(&caps[1])?;
    let year = era.gregorian_year(normalize_number(&caps[2]));
    resolve(year, normalize_number(&caps[3]), DayToken::parse(&caps[4]))
}

fn delimited_components(caps: &Captures) -> Option<(u64, u64, u64)> {
    Some((
        normalize_number(&caps[1]),
        normalize_number(&caps[2]),
        normalize_number(&caps[3]),
    ))
}

/// Rewrite every recognized date in `text` and report what was rewritten,
/// in pass order.
pub fn rewrite_with_report(text: &str) -> (String, Vec<DateMatch>) {
    let mut dates = Vec::new();

    let text = fold_fullwidth_digits(text);
    let text = substitute(
        &RE_ERA_DATE,
        &text,
        DateNotation::EraName,
        &mut dates,
        era_name_components,
    );
    let text = substitute(
        &RE_GREGORIAN_DATE,
        &text,
        DateNotation::Gregorian,
        &mut dates,
        gregorian_components,
    );
    let text = substitute(
        &RE_ABBREVIATED_DATE,
        &text,
        DateNotation::EraAbbreviation,
        &mut dates,
        abbreviated_components,
    );
    let text = substitute(
        &RE_DELIMITED_DATE,
        &text,
        DateNotation::Delimited,
        &mut dates,
        delimited_components,
    );

    (text, dates)
}

/// Rewrite every recognized date in `text` into `YYYY-MM-DD`.
/// Unrecognized text passes through unchanged.
pub fn rewrite(text: &str) -> String {
    rewrite_with_report(text).0
}
