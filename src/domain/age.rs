use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whole years between `dob` and `as_of`. `None` when `as_of` precedes `dob`.
pub fn age_on(dob: NaiveDate, as_of: NaiveDate) -> Option<u32> {
    let mut years = as_of.year() - dob.year();
    if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "U11-U13")]
    U11ToU13,
    #[serde(rename = "U14-U16")]
    U14ToU16,
    #[serde(rename = "U17-U19")]
    U17ToU19,
    #[serde(rename = "U20+")]
    U20Plus,
    Unknown,
}

impl AgeBracket {
    pub fn from_age(age: Option<u32>) -> Self {
        match age {
            None => AgeBracket::Unknown,
            Some(a) if a <= 13 => AgeBracket::U11ToU13,
            Some(a) if a <= 16 => AgeBracket::U14ToU16,
            Some(a) if a <= 19 => AgeBracket::U17ToU19,
            Some(_) => AgeBracket::U20Plus,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AgeBracket::U11ToU13 => "U11-U13",
            AgeBracket::U14ToU16 => "U14-U16",
            AgeBracket::U17ToU19 => "U17-U19",
            AgeBracket::U20Plus => "U20+",
            AgeBracket::Unknown => "Unknown",
        }
    }
}

/// An age-group label such as "U14" or "Open/Senior".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Open,
    Under(u32),
    Unrecognised,
}

impl AgeGroup {
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("open") || lower.starts_with("senior") {
            return AgeGroup::Open;
        }
        let digits: String = trimmed
            .trim_start_matches(['U', 'u'])
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        match digits.parse() {
            Ok(n) if n > 0 => AgeGroup::Under(n),
            _ => AgeGroup::Unrecognised,
        }
    }

    /// Upper age the group is meant for. Open cricket counts as `open_age`.
    pub fn ceiling(&self, open_age: u32) -> Option<u32> {
        match self {
            AgeGroup::Open => Some(open_age),
            AgeGroup::Under(n) => Some(*n),
            AgeGroup::Unrecognised => None,
        }
    }
}
