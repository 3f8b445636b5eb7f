use crate::domain::model::{CollectionValuation, NormalizedRecord};

/// Sums the non-zero lowest prices across the collection, rounded to two
/// decimal places. Titles without a price end up in `missing`.
pub fn appraise(records: &[NormalizedRecord]) -> CollectionValuation {
    let mut total = 0.0;
    let mut missing = Vec::new();

    for record in records {
        if record.lowest_price == 0.0 {
            missing.push(record.title.clone());
        } else {
            total += record.lowest_price;
        }
    }

    CollectionValuation {
        total_value: (total * 100.0).round() / 100.0,
        missing,
    }
}
