use chrono::NaiveDateTime;

use crate::pipeline::PipelineError;

/// An inclusive datetime window `[start, end]`.
///
/// Construction is the validation point: a range with `start > end` never
/// exists, so the filter stage does not have to re-check it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, PipelineError> {
        if start > end {
            return Err(PipelineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Inclusive at both ends.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = DateRange::new(at(2, 0), at(1, 0)).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidRange { .. }));
    }

    #[test]
    fn test_single_instant_range_is_valid() {
        let range = DateRange::new(at(1, 12), at(1, 12)).unwrap();
        assert!(range.contains(at(1, 12)));
        assert!(!range.contains(at(1, 13)));
    }

    #[test]
    fn test_contains_is_inclusive_at_both_ends() {
        let range = DateRange::new(at(1, 0), at(2, 0)).unwrap();
        assert!(range.contains(at(1, 0)), "start boundary belongs to the range");
        assert!(range.contains(at(2, 0)), "end boundary belongs to the range");
        assert!(!range.contains(at(2, 1)));
    }
}
