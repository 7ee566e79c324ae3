//! Amount extraction for receipts.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::trace;

use super::patterns::AMOUNT;
use super::{ExtractionMatch, FieldExtractor};

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        select_total(&self.extract_all(text))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for m in AMOUNT.find_iter(text) {
            match parse_amount(m.as_str()) {
                Some(amount) => results.push(
                    ExtractionMatch::new(amount, m.as_str()).with_position(m.start(), m.end()),
                ),
                None => trace!("Skipping unparsable amount {:?}", m.as_str()),
            }
        }

        results
    }
}

/// Parse an amount token such as `$12.50`, `42` or `7.`.
///
/// Returns `None` for tokens a `Decimal` cannot hold (e.g. very long digit runs).
pub fn parse_amount(token: &str) -> Option<Decimal> {
    let cleaned = token.replace('$', "");
    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned).ok()
}

/// Pick the receipt total: the largest amount, first occurrence on ties.
pub fn select_total(amounts: &[ExtractionMatch<Decimal>]) -> Option<ExtractionMatch<Decimal>> {
    amounts
        .iter()
        .reduce(|best, candidate| if candidate.value > best.value { candidate } else { best })
        .cloned()
}

/// Total amount in `text`, or zero when nothing parses.
pub fn extract_total(text: &str) -> Decimal {
    AmountExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$12.50"), Some(dec("12.50")));
        assert_eq!(parse_amount("42"), Some(dec("42")));
        assert_eq!(parse_amount("$9.9"), Some(dec("9.9")));
        assert_eq!(parse_amount("7."), Some(dec("7")));
        assert_eq!(parse_amount("$"), None);
    }

    #[test]
    fn test_total_is_largest_amount() {
        let text = "Subtotal $10.00 Tax $1.20 Total $11.20";
        assert_eq!(extract_total(text), dec("11.20"));
    }

    #[test]
    fn test_no_digits_is_zero() {
        assert_eq!(extract_total("Thank you for shopping!"), Decimal::ZERO);
        assert_eq!(extract_total(""), Decimal::ZERO);
    }

    #[test]
    fn test_larger_number_wins_even_when_not_a_price() {
        // Phone numbers and similar noise are accepted false positives.
        let text = "Total $23.99\nCall 5551234";
        assert_eq!(extract_total(text), dec("5551234"));
    }

    #[test]
    fn test_oversized_digit_run_is_skipped() {
        let text = "Ref 123456789012345678901234567890123 Total $5.00";
        assert_eq!(extract_total(text), dec("5.00"));
    }

    #[test]
    fn test_non_ascii_digits_are_not_amounts() {
        assert_eq!(extract_total("Total $٤٢.٥٠ paid ９９ cash 3.50"), dec("3.50"));
    }

    #[test]
    fn test_extract_all_keeps_order_and_positions() {
        let extractor = AmountExtractor::new();
        let results = extractor.extract_all("A $1.50 B 2");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].source, "$1.50");
        assert_eq!(results[0].position, Some((2, 7)));
        assert_eq!(results[1].value, dec("2"));
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let extractor = AmountExtractor::new();
        let best = extractor.extract("5.0 then 5.00").unwrap();
        assert_eq!(best.source, "5.0");
    }
}
