//! Receipt data models produced by the extraction pipeline.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::ParseCategoryError;

/// Spending category assigned to a receipt.
///
/// The set is closed; `Others` is the catch-all when no keyword table matches.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    #[default]
    Others,
}

impl Category {
    /// All labels, in classifier priority order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Others,
    ];

    /// The label as stored and exported.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| ParseCategoryError(label.to_string()))
    }
}

/// Round to whole cents for display, half away from zero.
///
/// `Decimal`'s `{:.2}` formatting truncates, so amounts are rounded first.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Fields derived from receipt text by the field extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Largest amount found in the text, or zero.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Transaction date, or the extraction date when none parsed.
    #[serde(rename = "date")]
    pub transaction_date: NaiveDate,

    /// First few words of the text, or a placeholder.
    pub description: String,
}

/// A fully processed receipt: extracted fields plus category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// Transaction date.
    #[serde(rename = "date")]
    pub transaction_date: NaiveDate,

    /// Total amount (non-negative, zero when nothing parsed).
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Spending category.
    pub category: Category,

    /// Short description.
    pub description: String,
}

impl ReceiptRecord {
    /// Merge field extractor output with a classification.
    pub fn from_parts(fields: ExtractedFields, category: Category) -> Self {
        Self {
            transaction_date: fields.transaction_date,
            amount: fields.amount,
            category,
            description: fields.description,
        }
    }

    /// Month key (`YYYY-MM`) used for monthly aggregation.
    pub fn month_key(&self) -> String {
        self.transaction_date.format("%Y-%m").to_string()
    }

    /// One-line confirmation, e.g. `Amount: $11.20, Category: Food`.
    pub fn summary_line(&self) -> String {
        format!(
            "Amount: ${:.2}, Category: {}",
            round_cents(self.amount),
            self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("Food".parse::<Category>(), Ok(Category::Food));
        assert_eq!("bills".parse::<Category>(), Ok(Category::Bills));
        assert_eq!(" TRANSPORT ".parse::<Category>(), Ok(Category::Transport));
        assert_eq!(
            "Travel".parse::<Category>(),
            Err(ParseCategoryError("Travel".to_string()))
        );
    }

    #[test]
    fn test_category_display_roundtrips_labels() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert_eq!(Category::default(), Category::Others);
    }

    #[test]
    fn test_record_json_shape() {
        let record = ReceiptRecord {
            transaction_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            amount: Decimal::new(1120, 2),
            category: Category::Food,
            description: "Pizza Hut".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-03-15");
        assert_eq!(json["amount"], 11.2);
        assert_eq!(json["category"], "Food");
        assert_eq!(json["description"], "Pizza Hut");
    }

    #[test]
    fn test_summary_line() {
        let record = ReceiptRecord {
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            amount: Decimal::new(42, 0),
            category: Category::Transport,
            description: "Uber".to_string(),
        };

        assert_eq!(record.summary_line(), "Amount: $42.00, Category: Transport");
        assert_eq!(record.month_key(), "2024-01");
    }

    #[test]
    fn test_summary_line_rounds_to_cents() {
        let mut record = ReceiptRecord {
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            amount: Decimal::new(7999, 3),
            category: Category::Transport,
            description: "Gas".to_string(),
        };
        assert_eq!(record.summary_line(), "Amount: $8.00, Category: Transport");

        record.amount = Decimal::new(12345, 3);
        assert_eq!(record.summary_line(), "Amount: $12.35, Category: Transport");

        record.amount = Decimal::new(12344, 3);
        assert_eq!(record.summary_line(), "Amount: $12.34, Category: Transport");
    }
}
