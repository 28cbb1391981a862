//! Per-day calendar feature records over a fixed date range.

use chrono::{Datelike, Duration, NaiveDate};

use crate::breaks::AcademicBreakSchedule;
use crate::calendar::{Calendar, UsFederalCalendar};
use crate::error::FeatureError;

/// One row of the calendar feature table. Flags are 0/1;
/// `day_of_week` counts from Monday=0 through Sunday=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRecord {
    pub date: NaiveDate,
    pub is_holiday: u8,
    pub day_of_week: u8,
    pub is_academic_break: u8,
}

/// Summary counts over a built table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSummary {
    pub total_days: usize,
    pub holiday_days: usize,
    pub break_days: usize,
}

/// Builds the feature table: one record per day from `start` to `end`
/// inclusive, annotated from the holiday calendar and break schedule.
#[derive(Debug, Clone)]
pub struct CalendarFeatureBuilder {
    start: NaiveDate,
    end: NaiveDate,
    calendar: Calendar,
    schedule: AcademicBreakSchedule,
}

impl CalendarFeatureBuilder {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        calendar: Calendar,
        schedule: AcademicBreakSchedule,
    ) -> Result<CalendarFeatureBuilder, FeatureError> {
        if start > end {
            return Err(FeatureError::InvalidRange { start, end });
        }
        Ok(CalendarFeatureBuilder {
            start,
            end,
            calendar,
            schedule,
        })
    }

    /// The fixed production window: 2022-01-01 through 2025-12-31, the
    /// default federal holiday rules populated for those years, and the
    /// built-in academic break table.
    pub fn with_defaults() -> Result<CalendarFeatureBuilder, FeatureError> {
        let start = Calendar::from_ymd(2022, 1, 1);
        let end = Calendar::from_ymd(2025, 12, 31);
        let mut fed = UsFederalCalendar::with_default_rules(false)?;
        fed.populate_cal(Some(start.year()), Some(end.year()))?;
        let schedule = AcademicBreakSchedule::with_default_intervals()?;
        CalendarFeatureBuilder::new(start, end, fed.get_cal(), schedule)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Emit one record per day in ascending date order. The break flag
    /// starts at 0 and interval scans only ever raise it; overlapping
    /// intervals are idempotent.
    pub fn build(&self) -> Vec<DateRecord> {
        let n_days = ((self.end - self.start).num_days() + 1) as usize;
        let mut records = Vec::with_capacity(n_days);

        let mut date = self.start;
        while date <= self.end {
            records.push(DateRecord {
                date,
                is_holiday: self.calendar.is_holiday(date) as u8,
                day_of_week: date.weekday().num_days_from_monday() as u8,
                is_academic_break: 0,
            });
            date = date + Duration::days(1);
        }

        for interval in self.schedule.intervals() {
            for record in records.iter_mut() {
                if interval.contains(record.date) {
                    record.is_academic_break = 1;
                }
            }
        }

        records
    }
}

/// Count total, holiday-flagged, and break-flagged days
pub fn summarize(records: &[DateRecord]) -> FeatureSummary {
    FeatureSummary {
        total_days: records.len(),
        holiday_days: records.iter().filter(|r| r.is_holiday == 1).count(),
        break_days: records.iter().filter(|r| r.is_academic_break == 1).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breaks::BreakInterval;

    fn build_default() -> Vec<DateRecord> {
        CalendarFeatureBuilder::with_defaults().unwrap().build()
    }

    fn record_for(records: &[DateRecord], date: NaiveDate) -> DateRecord {
        *records.iter().find(|r| r.date == date).unwrap()
    }

    #[test]
    fn test_one_record_per_day() {
        let records = build_default();
        // 2022 through 2025 with the 2024 leap day
        assert_eq!(1461, records.len());
        assert_eq!(Calendar::from_ymd(2022, 1, 1), records[0].date);
        assert_eq!(Calendar::from_ymd(2025, 12, 31), records[records.len() - 1].date);
        // consecutive dates, so no gaps and no duplicates
        for pair in records.windows(2) {
            assert_eq!(pair[0].date + Duration::days(1), pair[1].date);
        }
    }

    #[test]
    fn test_day_of_week_convention() {
        let records = build_default();
        // 2022-01-01 is a Saturday, Monday=0 puts it at 5
        assert_eq!(5, records[0].day_of_week);
        assert_eq!(5, records[7].day_of_week);
        // 2023-07-04 is a Tuesday
        assert_eq!(
            1,
            record_for(&records, Calendar::from_ymd(2023, 7, 4)).day_of_week
        );
    }

    #[test]
    fn test_holiday_flags() {
        let records = build_default();
        assert_eq!(
            1,
            record_for(&records, Calendar::from_ymd(2023, 7, 4)).is_holiday
        );
        assert_eq!(
            0,
            record_for(&records, Calendar::from_ymd(2023, 7, 5)).is_holiday
        );
        // observed New Year 2023 (Jan 1 falls on a Sunday)
        assert_eq!(
            1,
            record_for(&records, Calendar::from_ymd(2023, 1, 2)).is_holiday
        );
    }

    #[test]
    fn test_break_flags() {
        let records = build_default();
        assert_eq!(
            1,
            record_for(&records, Calendar::from_ymd(2022, 6, 15)).is_academic_break
        );
        assert_eq!(
            0,
            record_for(&records, Calendar::from_ymd(2022, 1, 20)).is_academic_break
        );
    }

    #[test]
    fn test_flags_are_independent() {
        let records = build_default();
        // New Year 2022 is both a federal holiday and inside winter break
        let record = record_for(&records, Calendar::from_ymd(2022, 1, 1));
        assert_eq!(1, record.is_holiday);
        assert_eq!(1, record.is_academic_break);
        // a term-time holiday: Washington's Birthday 2022
        let record = record_for(&records, Calendar::from_ymd(2022, 2, 21));
        assert_eq!(1, record.is_holiday);
        assert_eq!(0, record.is_academic_break);
    }

    #[test]
    fn test_summary_counts() {
        let records = build_default();
        let summary = summarize(&records);
        assert_eq!(1461, summary.total_days);
        // 44 federal holidays plus the 4 observed companions landing
        // inside the window
        assert_eq!(48, summary.holiday_days);
        assert_eq!(599, summary.break_days);
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = build_default();
        let second = build_default();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let fed = UsFederalCalendar::with_default_rules(false).unwrap();
        let schedule = AcademicBreakSchedule::new(Vec::new());
        let result = CalendarFeatureBuilder::new(
            Calendar::from_ymd(2025, 12, 31),
            Calendar::from_ymd(2022, 1, 1),
            fed.get_cal(),
            schedule,
        );
        assert!(matches!(result, Err(FeatureError::InvalidRange { .. })));
    }

    #[test]
    fn test_overlapping_intervals_flag_once() {
        let fed = UsFederalCalendar::with_default_rules(false).unwrap();
        let schedule = AcademicBreakSchedule::new(vec![
            BreakInterval::new(
                Calendar::from_ymd(2022, 1, 5),
                Calendar::from_ymd(2022, 1, 10),
            )
            .unwrap(),
            BreakInterval::new(
                Calendar::from_ymd(2022, 1, 8),
                Calendar::from_ymd(2022, 1, 12),
            )
            .unwrap(),
        ]);
        let builder = CalendarFeatureBuilder::new(
            Calendar::from_ymd(2022, 1, 1),
            Calendar::from_ymd(2022, 1, 31),
            fed.get_cal(),
            schedule,
        )
        .unwrap();
        let records = builder.build();
        let summary = summarize(&records);
        // union of Jan 5-10 and Jan 8-12 is Jan 5-12
        assert_eq!(8, summary.break_days);
    }
}
