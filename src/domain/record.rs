use chrono::NaiveDateTime;

use super::session::Session;

/// A single funding-rate observation.
///
/// Sign convention: `bullish >= 0` and `bearish <= 0`. The loader enforces
/// this at parse time so downstream stages (stacked bars, running totals)
/// can rely on it without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRecord {
    pub timestamp: NaiveDateTime,
    /// Positive funding rate, drawn as an upward bar.
    pub bullish: f64,
    /// Negative funding rate, drawn as a downward bar.
    pub bearish: f64,
    /// `None` when the CSV carried a label outside the known six.
    pub session: Option<Session>,
}

/// The immutable backing dataset for one source.
///
/// Row order is whatever the CSV had; nothing here sorts by timestamp and
/// consumers must not assume sortedness (`time_span` scans the whole table).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentTable {
    records: Vec<SentimentRecord>,
}

impl SentimentTable {
    pub fn new(records: Vec<SentimentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SentimentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest timestamp in the table. Seeds the UI's default
    /// range selection.
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.records.first()?.timestamp;
        let span = self.records.iter().skip(1).fold(
            (first, first),
            |(earliest, latest), record| {
                (
                    earliest.min(record.timestamp),
                    latest.max(record.timestamp),
                )
            },
        );
        Some(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_time_span_of_empty_table() {
        assert_eq!(SentimentTable::default().time_span(), None);
    }

    #[test]
    fn test_time_span_does_not_assume_sorted_rows() {
        // Deliberately out of order
        let table = SentimentTable::new(vec![
            SentimentRecord {
                timestamp: at(3, 9),
                bullish: 0.1,
                bearish: -0.1,
                session: None,
            },
            SentimentRecord {
                timestamp: at(1, 5),
                bullish: 0.2,
                bearish: 0.0,
                session: None,
            },
            SentimentRecord {
                timestamp: at(2, 13),
                bullish: 0.0,
                bearish: -0.3,
                session: None,
            },
        ]);
        assert_eq!(table.time_span(), Some((at(1, 5), at(3, 9))));
    }
}
