//! Date extraction for receipts.
//!
//! Candidates are collected from every pattern family, but only the first
//! candidate is ever parsed. A candidate that does not resolve to a real
//! calendar date yields the fallback date; later candidates are not tried.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use super::patterns::date_families;
use super::{ExtractionMatch, FieldExtractor};

/// Preferences for reading ambiguous numeric dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateOrder {
    /// Prefer day before month (`05/03/24` is 5 March).
    pub day_first: bool,
    /// Prefer a leading year (`24-03-05` is 2024-03-05).
    pub year_first: bool,
}

/// Date candidate extractor.
///
/// Produces raw date-shaped tokens: all slash matches, then all dash
/// matches, then all ISO matches, each family in text order.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for (family, pattern) in date_families() {
            for m in pattern.find_iter(text) {
                trace!("Date candidate {:?} ({} family)", m.as_str(), family);
                results.push(
                    ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                        .with_position(m.start(), m.end()),
                );
            }
        }

        results
    }
}

/// Transaction date for `text`: the first candidate if it parses, else `today`.
pub fn select_transaction_date(text: &str, today: NaiveDate, order: DateOrder) -> NaiveDate {
    let Some(candidate) = DateExtractor::new().extract(text) else {
        debug!("No date found, using {}", today);
        return today;
    };

    match parse_date_token(&candidate.value, today, order) {
        Some(date) => date,
        None => {
            debug!("Could not parse date {:?}, using {}", candidate.value, today);
            today
        }
    }
}

/// Parse a numeric date token such as `03/15/2024`, `15-3-24` or `2024-3-15`.
///
/// Field order is resolved from the values themselves: a field longer than
/// two digits or above 31 in front is a year, a leading field above 12 is a
/// day, and anything else reads as month/day/year unless `order` says
/// otherwise. Two-digit years land within 50 years of `today`.
pub fn parse_date_token(token: &str, today: NaiveDate, order: DateOrder) -> Option<NaiveDate> {
    let fields: Vec<&str> = token.split(['/', '-']).collect();
    let [first, second, third] = fields.as_slice() else {
        return None;
    };

    let values = [
        first.parse::<u32>().ok()?,
        second.parse::<u32>().ok()?,
        third.parse::<u32>().ok()?,
    ];
    let long_fields: Vec<bool> = [first, second, third].iter().map(|f| f.len() > 2).collect();
    let century_specified = long_fields.iter().any(|&long| long);
    let leading_year = long_fields[0];

    let [a, b, c] = values;
    let (year, month, day) = if a > 31 || leading_year || (order.year_first && b <= 12 && c <= 31) {
        if order.day_first && c <= 12 {
            (a, c, b)
        } else {
            (a, b, c)
        }
    } else if a > 12 || (order.day_first && b <= 12) {
        (c, b, a)
    } else {
        (c, a, b)
    };

    let year = if century_specified {
        i32::try_from(year).ok()?
    } else {
        expand_two_digit_year(year, today)?
    };

    if year < 1 {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn expand_two_digit_year(year: u32, today: NaiveDate) -> Option<i32> {
    let year = i32::try_from(year).ok()?;
    if year >= 100 {
        return Some(year);
    }

    let current = today.year();
    let mut expanded = year + current / 100 * 100;
    if expanded >= current + 50 {
        expanded -= 100;
    } else if expanded < current - 50 {
        expanded += 100;
    }
    Some(expanded)
}
