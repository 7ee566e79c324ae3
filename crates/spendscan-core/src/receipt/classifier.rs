//! Keyword-table spending category classifier.
//!
//! Tables are checked in order and the first table with any keyword present
//! in the lower-cased text wins. Overlaps between tables ("gas" is listed
//! under both Transport and Bills) are resolved by that order alone.

use tracing::trace;

use crate::models::receipt::Category;

/// Keyword tables in priority order. Keywords are lower-case substrings.
pub const KEYWORD_TABLES: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "restaurant", "cafe", "food", "meal", "lunch", "dinner", "breakfast",
            "pizza", "burger", "coffee", "tea", "snack", "grocery", "supermarket",
        ],
    ),
    (
        Category::Transport,
        &[
            "uber", "lyft", "taxi", "bus", "train", "metro", "subway",
            "gas", "fuel", "parking", "toll", "transport", "car",
        ],
    ),
    (
        Category::Shopping,
        &[
            "amazon", "walmart", "target", "mall", "store", "shop",
            "clothing", "shoes", "electronics", "book", "gift",
        ],
    ),
    (
        Category::Bills,
        &[
            "bill", "electricity", "water", "gas", "internet", "phone",
            "rent", "mortgage", "insurance", "utility",
        ],
    ),
];

/// Classify receipt text into a spending category. Never fails.
pub fn classify(text: &str) -> Category {
    matching_keyword(text)
        .map(|(category, _)| category)
        .unwrap_or(Category::Others)
}

/// The deciding table and keyword for `text`, if any table matches.
pub fn matching_keyword(text: &str) -> Option<(Category, &'static str)> {
    let lowered = text.to_lowercase();

    KEYWORD_TABLES.iter().find_map(|&(category, keywords)| {
        keywords
            .iter()
            .find(|keyword| lowered.contains(**keyword))
            .map(|&keyword| {
                trace!("Matched keyword {:?} for {}", keyword, category);
                (category, keyword)
            })
    })
}
