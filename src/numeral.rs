//! Kanji numeral interpretation.
//!
//! Two parsing modes share one entry point: strings without any unit
//! character are read digit by digit ("二〇二三" → 2023), strings with a
//! unit (十/百/千/万/億/兆) are evaluated positionally ("二千二十三" → 2023).

/// Kanji digit → value 0–9. Both 〇 and 零 are zero.
fn kanji_digit(c: char) -> Option<u64> {
    match c {
        '〇' | '零' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

/// ASCII or full-width decimal digit → value 0–9.
fn literal_digit(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(c as u64 - '0' as u64),
        '０'..='９' => Some(c as u64 - '０' as u64),
        _ => None,
    }
}

/// 十/百/千 → positional multiplier.
fn small_unit(c: char) -> Option<u64> {
    match c {
        '十' => Some(10),
        '百' => Some(100),
        '千' => Some(1_000),
        _ => None,
    }
}

/// 万/億/兆 → magnitude multiplier.
fn large_unit(c: char) -> Option<u64> {
    match c {
        '万' => Some(10_000),
        '億' => Some(100_000_000),
        '兆' => Some(1_000_000_000_000),
        _ => None,
    }
}

fn is_unit(c: char) -> bool {
    small_unit(c).is_some() || large_unit(c).is_some()
}

/// Evaluate a numeral below 10,000 (no large units).
///
/// A digit sets the pending multiplier, overwriting any earlier one; a
/// small unit consumes it (1 when nothing is pending). Characters that are
/// neither are ignored.
pub fn parse_small(s: &str) -> u64 {
    let mut total: u64 = 0;
    let mut num: u64 = 0;
    for ch in s.chars() {
        if let Some(d) = kanji_digit(ch) {
            num = d;
        } else if let Some(unit) = small_unit(ch) {
            if num == 0 {
                num = 1;
            }
            total = total.saturating_add(num.saturating_mul(unit));
            num = 0;
        }
    }
    total.saturating_add(num)
}

/// Convert a kanji numeral to an integer, choosing digit-string or
/// positional mode by whether any unit character appears.
pub fn kanji_to_int(s: &str) -> u64 {
    if s.is_empty() {
        return 0;
    }

    if s.chars().any(is_unit) {
        let mut total: u64 = 0;
        let mut segment_start = 0;
        for (i, ch) in s.char_indices() {
            if let Some(unit) = large_unit(ch) {
                // A bare large unit ("万") counts as one of it.
                let val = match parse_small(&s[segment_start..i]) {
                    0 => 1,
                    v => v,
                };
                total = total.saturating_add(val.saturating_mul(unit));
                segment_start = i + ch.len_utf8();
            }
        }
        total.saturating_add(parse_small(&s[segment_start..]))
    } else {
        let digits: String = s
            .chars()
            .filter_map(|c| kanji_digit(c).or_else(|| literal_digit(c)))
            .filter_map(|d| char::from_digit(d as u32, 10))
            .collect();
        digits.parse().unwrap_or(0)
    }
}

/// Normalize a numeral token (kanji, ASCII, full-width or mixed) to an
/// integer. Returns 0 for empty or unrecognized input.
///
/// "元" (first year of an era) is 1.
pub fn normalize_number(s: &str) -> u64 {
    if s == "元" {
        return 1;
    }
    if !s.is_empty() && s.chars().all(|c| literal_digit(c).is_some()) {
        return s
            .chars()
            .filter_map(literal_digit)
            .try_fold(0u64, |acc, d| acc.checked_mul(10)?.checked_add(d))
            .unwrap_or(0);
    }
    kanji_to_int(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_small ──────────────────────────────────────────────────

    #[test]
    fn test_parse_small_tens() {
        assert_eq!(parse_small("十"), 10);
        assert_eq!(parse_small("十一"), 11);
        assert_eq!(parse_small("二十"), 20);
        assert_eq!(parse_small("九十九"), 99);
    }

    #[test]
    fn test_parse_small_hundreds_and_thousands() {
        assert_eq!(parse_small("百"), 100);
        assert_eq!(parse_small("二百三十四"), 234);
        assert_eq!(parse_small("千"), 1000);
        assert_eq!(parse_small("二千二十三"), 2023);
        assert_eq!(parse_small("千九百八十九"), 1989);
    }

    #[test]
    fn test_parse_small_last_digit_wins() {
        // 二三十: the pending 二 is overwritten by 三 before 十 applies
        assert_eq!(parse_small("二三十"), 30);
    }

    #[test]
    fn test_parse_small_empty_and_unknown() {
        assert_eq!(parse_small(""), 0);
        assert_eq!(parse_small("年"), 0);
    }

    // ── normalize_number: positional mode ────────────────────────────

    #[test]
    fn test_normalize_number_small_units() {
        assert_eq!(normalize_number("十"), 10);
        assert_eq!(normalize_number("二十三"), 23);
        assert_eq!(normalize_number("百"), 100);
        assert_eq!(normalize_number("二百三十四"), 234);
    }

    #[test]
    fn test_normalize_number_large_units() {
        assert_eq!(normalize_number("一万"), 10_000);
        assert_eq!(normalize_number("三万二千一"), 32_001);
        assert_eq!(normalize_number("十二万"), 120_000);
        assert_eq!(normalize_number("一億二千万"), 120_000_000);
        assert_eq!(normalize_number("三兆"), 3_000_000_000_000);
    }

    #[test]
    fn test_normalize_number_bare_large_unit() {
        assert_eq!(normalize_number("万"), 10_000);
        assert_eq!(normalize_number("億"), 100_000_000);
        assert_eq!(normalize_number("兆"), 1_000_000_000_000);
        assert_eq!(normalize_number("億万"), 100_010_000);
    }

    #[test]
    fn test_normalize_number_literal_digits_ignored_with_units() {
        // Positional mode only reads kanji digits
        assert_eq!(normalize_number("3万"), 10_000);
        assert_eq!(normalize_number("1十"), 10);
    }

    // ── normalize_number: digit-string mode ──────────────────────────

    #[test]
    fn test_normalize_number_digit_string() {
        assert_eq!(normalize_number("二〇二三"), 2023);
        assert_eq!(normalize_number("二三"), 23);
        assert_eq!(normalize_number("一九八九"), 1989);
        assert_eq!(normalize_number("零七"), 7);
    }

    #[test]
    fn test_normalize_number_mixed_digit_string() {
        assert_eq!(normalize_number("2〇23"), 2023);
        assert_eq!(normalize_number("２〇２３"), 2023);
    }

    #[test]
    fn test_normalize_number_ascii_and_fullwidth() {
        assert_eq!(normalize_number("2023"), 2023);
        assert_eq!(normalize_number("007"), 7);
        assert_eq!(normalize_number("１２"), 12);
    }

    #[test]
    fn test_normalize_number_gan() {
        assert_eq!(normalize_number("元"), 1);
        // 元 only counts on its own
        assert_eq!(normalize_number("元年"), 0);
    }

    #[test]
    fn test_normalize_number_unrecognized() {
        assert_eq!(normalize_number(""), 0);
        assert_eq!(normalize_number("abc"), 0);
        assert_eq!(normalize_number("年"), 0);
    }

    #[test]
    fn test_normalize_number_overflow() {
        assert_eq!(normalize_number("99999999999999999999999"), 0);
        assert_eq!(normalize_number("九九九九九九九九九九九九九九九九九九九九九"), 0);
        let huge = format!("{}兆", "九千".repeat(3000));
        assert_eq!(normalize_number(&huge), u64::MAX);
    }
}
