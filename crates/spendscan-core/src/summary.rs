//! Spending totals over a set of processed receipts.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::models::receipt::{Category, ReceiptRecord};

/// Aggregated spending: overall, per category and per month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpendingSummary {
    /// Number of records aggregated.
    pub count: usize,

    /// Sum of all amounts.
    pub total: Decimal,

    /// Sum per category; only categories that occur are present.
    pub by_category: BTreeMap<Category, Decimal>,

    /// Sum per `YYYY-MM` month.
    pub by_month: BTreeMap<String, Decimal>,
}

impl SpendingSummary {
    /// Aggregate a slice of records.
    pub fn from_records(records: &[ReceiptRecord]) -> Self {
        let mut summary = Self::default();

        for record in records {
            summary.count += 1;
            let mut saturated = !accumulate(&mut summary.total, record.amount);
            saturated |= !accumulate(
                summary.by_category.entry(record.category).or_default(),
                record.amount,
            );
            saturated |= !accumulate(
                summary.by_month.entry(record.month_key()).or_default(),
                record.amount,
            );

            if saturated {
                warn!(
                    "Spending total overflowed at {:?}, capped at the largest amount",
                    record.description
                );
            }
        }

        summary
    }
}

/// Add `amount` into `slot`, capping at `Decimal::MAX`. Returns false when capped.
fn accumulate(slot: &mut Decimal, amount: Decimal) -> bool {
    match slot.checked_add(amount) {
        Some(sum) => {
            *slot = sum;
            true
        }
        None => {
            *slot = Decimal::MAX;
            false
        }
    }
}

/// Sort records by transaction date, newest first. Stable for equal dates.
pub fn sort_newest_first(records: &mut [ReceiptRecord]) {
    records.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
}
