//! Free-text durations ("3 months", "2 weeks 3 days") and the task counts they imply.

use once_cell::sync::Lazy;
use regex::Regex;

static MONTHS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*month[s]?").unwrap());
static WEEKS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*week[s]?").unwrap());
static DAYS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*day[s]?").unwrap());

/// A month is always 30 days and 4 weeks.
const DAYS_PER_MONTH: u64 = 30;
const WEEKS_PER_MONTH: u64 = 4;
const DAYS_PER_WEEK: u64 = 7;

/// Units found in a duration string. Units that are not mentioned are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationSpec {
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
}

/// How many tasks a plan carries at each granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTotals {
    pub days: u64,
    pub weeks: u64,
    pub months: u64,
}

/// Reads the first number attached to each unit, case-insensitively.
pub fn parse_duration(duration: &str) -> DurationSpec {
    let lowered = duration.trim().to_lowercase();
    DurationSpec {
        months: first_count(&MONTHS_RE, &lowered),
        weeks: first_count(&WEEKS_RE, &lowered),
        days: first_count(&DAYS_RE, &lowered),
    }
}

// Digits too large for u64 saturate so the plan-length check can reject them
fn first_count(re: &Regex, text: &str) -> u64 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

impl DurationSpec {
    pub fn totals(&self) -> PlanTotals {
        let raw_days = self
            .months
            .saturating_mul(DAYS_PER_MONTH)
            .saturating_add(self.weeks.saturating_mul(DAYS_PER_WEEK))
            .saturating_add(self.days);

        let weeks = if self.weeks > 0 || self.months > 0 {
            self.months
                .saturating_mul(WEEKS_PER_MONTH)
                .saturating_add(self.weeks)
        } else if raw_days >= DAYS_PER_WEEK {
            raw_days / DAYS_PER_WEEK
        } else {
            0
        };

        PlanTotals {
            days: raw_days.max(1),
            weeks,
            months: self.months,
        }
    }
}
