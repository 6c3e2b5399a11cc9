//! General-purpose cleaning filters for Japanese web text.
//!
//! Each filter is a standalone `&str -> String` function. [`TextCleaner`]
//! chains them in a fixed order:
//! NFKC → URLs → mentions/hashtags → symbols → emojis → whitespace.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// ── Regex patterns ─────────────────────────────────────────────────

static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url regex"));

static RE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[\w\-\x{3000}-\x{9FFF}]+").expect("mention regex"));

static RE_HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[\w\-\x{3000}-\x{9FFF}]+").expect("hashtag regex"));

// Brackets become a space so the words they enclose stay apart.
static RE_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[「」【】『』［］〈〉《》〔〕（）()]").expect("bracket regex"));

static RE_DECORATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[●■□※◆◇☆★○◎→←↑↓]").expect("decoration regex"));

static RE_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}", // emoticons
        r"\x{1F300}-\x{1F5FF}", // symbols & pictographs
        r"\x{1F680}-\x{1F6FF}", // transport & map
        r"\x{1F1E0}-\x{1F1FF}", // flags
        r"\x{1F900}-\x{1F9FF}", // supplemental pictographs
        r"\x{2600}-\x{26FF}",   // misc symbols
        r"\x{2700}-\x{27BF}",   // dingbats
        r"\x{FE0F}",            // variation selector-16
        "]+",
    ))
    .expect("emoji regex")
});

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

// ── Filters ────────────────────────────────────────────────────────

/// Unicode NFKC: full-width ASCII, half-width katakana and compatibility
/// spaces are folded to their canonical forms.
pub fn normalize_str(s: &str) -> String {
    s.nfkc().collect()
}

/// Remove `http://` and `https://` URLs up to the next whitespace.
pub fn remove_urls(s: &str) -> String {
    RE_URL.replace_all(s, "").into_owned()
}

pub fn remove_mentions_and_hashtags(s: &str) -> String {
    let s = RE_MENTION.replace_all(s, "");
    RE_HASHTAG.replace_all(&s, "").into_owned()
}

/// Replace brackets with a space and delete decorative symbols.
pub fn remove_symbols(s: &str) -> String {
    let s = RE_BRACKETS.replace_all(s, " ");
    RE_DECORATIONS.replace_all(&s, "").into_owned()
}

pub fn remove_emojis(s: &str) -> String {
    RE_EMOJI.replace_all(s, "").into_owned()
}

/// Collapse every whitespace run (including 　 and newlines) into a single
/// ASCII space and trim both ends.
pub fn unify_whitespaces(s: &str) -> String {
    RE_WHITESPACE.replace_all(s, " ").trim().to_string()
}

// ── Cleaner ────────────────────────────────────────────────────────

/// Configuration options for [`TextCleaner`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanerConfig {
    /// Leave emoji in place instead of deleting them.
    pub keep_emojis: bool,
}

/// Runs every filter in order.
///
/// ```
/// use jp_textnorm::TextCleaner;
///
/// let cleaner = TextCleaner::default();
/// assert_eq!(cleaner.clean("【告知】　ＡＢＣ  https://example.com"), "告知 ABC");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCleaner {
    config: CleanerConfig,
}

impl TextCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    pub fn clean(&self, s: &str) -> String {
        let s = normalize_str(s);
        let s = remove_urls(&s);
        let s = remove_mentions_and_hashtags(&s);
        let s = remove_symbols(&s);
        let s = if self.config.keep_emojis {
            s
        } else {
            remove_emojis(&s)
        };
        unify_whitespaces(&s)
    }

    /// Like [`clean`](Self::clean), but absent input yields an empty string.
    pub fn clean_opt(&self, s: Option<&str>) -> String {
        s.map(|s| self.clean(s)).unwrap_or_default()
    }
}
