//! Static table of modern Japanese eras (元号).
//!
//! Each era maps to the Gregorian year in which its year 1 (元年) falls,
//! under both its kanji name (令和) and its single-letter abbreviation (R).

// ── Era ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    Meiji,  // 明治
    Taisho, // 大正
    Showa,  // 昭和
    Heisei, // 平成
    Reiwa,  // 令和
}

impl Era {
    /// All eras, oldest first.
    pub const ALL: [Era; 5] = [
        Era::Meiji,
        Era::Taisho,
        Era::Showa,
        Era::Heisei,
        Era::Reiwa,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Meiji => "明治",
            Self::Taisho => "大正",
            Self::Showa => "昭和",
            Self::Heisei => "平成",
            Self::Reiwa => "令和",
        }
    }

    pub fn abbreviation(&self) -> char {
        match self {
            Self::Meiji => 'M',
            Self::Taisho => 'T',
            Self::Showa => 'S',
            Self::Heisei => 'H',
            Self::Reiwa => 'R',
        }
    }

    /// Gregorian year of 元年.
    pub fn start_year(&self) -> u64 {
        match self {
            Self::Meiji => 1868,
            Self::Taisho => 1912,
            Self::Showa => 1926,
            Self::Heisei => 1989,
            Self::Reiwa => 2019,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    pub fn from_abbreviation(letter: &str) -> Option<Self> {
        let mut chars = letter.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.into_iter().find(|e| e.abbreviation() == c)
    }

    /// Gregorian year for the `ordinal`-th year of this era (元年 = 1).
    ///
    /// Ordinal 0 is not rejected; it lands on the year before 元年.
    pub fn gregorian_year(&self, ordinal: u64) -> u64 {
        self.start_year().saturating_add(ordinal).saturating_sub(1)
    }
}

// ── Regex fragments ──────────────────────────────────────────────────

/// Regex alternation matching any era name, longest first.
pub fn build_era_regex() -> String {
    let mut names: Vec<&str> = Era::ALL.iter().map(|e| e.name()).collect();
    names.sort_by_key(|n| std::cmp::Reverse(n.chars().count()));
    format!("(?:{})", names.join("|"))
}

/// Regex character class matching any era abbreviation letter.
pub fn build_abbreviation_class() -> String {
    let letters: String = Era::ALL.iter().rev().map(|e| e.abbreviation()).collect();
    format!("[{letters}]")
}
