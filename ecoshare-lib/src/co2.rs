use crate::types::ItemCondition;

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Applied when the category is not in the table; the keyword scan and
/// condition multiplier are skipped in that case.
const UNKNOWN_CATEGORY_CO2: f64 = 5.0;

struct CategoryCo2 {
    category: &'static str,
    base: f64,
    // Scanned in order; the first keyword found in the item text wins.
    keywords: &'static [(&'static str, f64)],
}

const CO2_TABLE: &[CategoryCo2] = &[
    CategoryCo2 {
        category: "Tools",
        base: 8.0,
        keywords: &[
            ("drill", 12.0),
            ("saw", 15.0),
            ("grinder", 10.0),
            ("sander", 8.0),
            ("hammer", 3.0),
            ("screwdriver", 2.0),
            ("wrench", 2.0),
            ("ladder", 25.0),
            ("toolbox", 5.0),
        ],
    },
    CategoryCo2 {
        category: "Appliances",
        base: 6.0,
        keywords: &[
            ("mixer", 8.0),
            ("blender", 6.0),
            ("toaster", 5.0),
            ("microwave", 45.0),
            ("vacuum", 25.0),
            ("pressure washer", 30.0),
            ("air fryer", 12.0),
            ("coffee", 8.0),
            ("bread machine", 15.0),
        ],
    },
    CategoryCo2 {
        category: "Camping Gear",
        base: 4.0,
        keywords: &[
            ("tent", 12.0),
            ("sleeping bag", 8.0),
            ("backpack", 6.0),
            ("stove", 5.0),
            ("lantern", 3.0),
            ("cooler", 10.0),
            ("bike", 85.0),
            ("kayak", 120.0),
            ("grill", 35.0),
        ],
    },
    CategoryCo2 {
        category: "Books",
        base: 1.0,
        keywords: &[
            ("textbook", 2.0),
            ("cookbook", 1.5),
            ("manual", 1.0),
            ("novel", 0.8),
            ("magazine", 0.3),
        ],
    },
    CategoryCo2 {
        category: "Other",
        base: 3.0,
        keywords: &[
            ("furniture", 50.0),
            ("electronics", 15.0),
            ("clothing", 2.0),
            ("toys", 4.0),
            ("sports", 8.0),
            ("musical", 25.0),
        ],
    },
];

/// Estimated kilograms of CO2 avoided per borrow of an item, derived from its
/// category base value, the first matching keyword in title + description and
/// a condition multiplier. Rounded to one decimal, half away from zero.
pub fn estimate(title: &str, category: &str, description: &str, condition: &str) -> Decimal {
    let Some(entry) = CO2_TABLE.iter().find(|e| e.category == category) else {
        return to_rounded_decimal(UNKNOWN_CATEGORY_CO2);
    };

    let mut value = entry.base;
    let search_text = format!("{title} {description}").to_lowercase();
    for (keyword, keyword_value) in entry.keywords {
        if search_text.contains(keyword) {
            value = value.max(*keyword_value);
            break;
        }
    }

    let multiplier = condition
        .parse::<ItemCondition>()
        .map(|c| c.co2_multiplier())
        .unwrap_or(1.0);

    to_rounded_decimal(value * multiplier)
}

/// Human-readable reason behind the estimate, keyed off the first keyword
/// match in the title alone.
pub fn explanation(title: &str, category: &str) -> String {
    let Some(entry) = CO2_TABLE.iter().find(|e| e.category == category) else {
        return "Standard estimate based on category".to_string();
    };

    let search_text = title.to_lowercase();
    for (keyword, keyword_value) in entry.keywords {
        if search_text.contains(keyword) {
            let mut label = keyword.to_string();
            if let Some(first) = label.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            return format!(
                "{label} typically saves {keyword_value}kg CO2 when borrowed instead of buying new"
            );
        }
    }

    format!(
        "{category} items typically save {}kg CO2 per borrow",
        entry.base
    )
}

fn to_rounded_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or_default()
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
