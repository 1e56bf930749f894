use crate::domain::model::{ColourRanking, PersonRecord, Summary};
use chrono::{Datelike, NaiveDate};

/// Pure summary computation over a fetched record sequence.
///
/// Age is calendar-year subtraction only, with no month/day adjustment.
/// Ranking ties keep first-seen order; the stable sort preserves it.
pub fn compute(records: &[PersonRecord], today: NaiveDate) -> Summary {
    let age_plus_20 = records
        .iter()
        .map(|record| today.year() - record.dob.year() + 20)
        .collect();

    // 依首次出現的順序累計顏色數量
    let mut counts: Vec<(String, u32)> = Vec::new();
    for record in records {
        match counts
            .iter_mut()
            .find(|(colour, _)| *colour == record.favourite_colour)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((record.favourite_colour.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Summary {
        age_plus_20,
        top_colours: ColourRanking::new(counts),
    }
}
