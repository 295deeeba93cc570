use crate::domain::date_range::DateRange;
use crate::domain::record::SentimentRecord;

/// Select the records whose timestamp falls inside `range`, inclusive at
/// both ends. The input slice is left untouched and relative row order is
/// preserved.
///
/// An empty result is a valid outcome, not an error; the pipeline turns it
/// into the user-facing "no data in range" notice.
pub fn filter_by_range(records: &[SentimentRecord], range: &DateRange) -> Vec<SentimentRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.timestamp))
        .cloned()
        .collect()
}
