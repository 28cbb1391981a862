//! Academic break intervals for the 2022-2025 academic years.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FeatureError;

/// Break periods derived from the university academic calendar, one
/// closed `(start, end)` pair per non-instructional stretch.
const DEFAULT_BREAK_TABLE: &[(&str, &str)] = &[
    // 2022 - winter/summer
    ("2022-01-01", "2022-01-18"), // winter break, spring term starts Jan 20
    ("2022-05-05", "2022-09-01"), // summer, fall term starts Sep 2
    ("2022-12-19", "2022-12-31"), // winter break, fall exams end Dec 18
    // 2023 - winter/spring/summer
    ("2023-01-01", "2023-01-18"), // winter break, spring term starts Jan 19
    ("2023-03-04", "2023-03-12"), // spring recess
    ("2023-05-13", "2023-09-04"), // summer, fall term starts Sep 5
    ("2023-12-22", "2023-12-31"), // winter break, fall exams end Dec 21
    // 2024 - winter/spring/summer
    ("2024-01-01", "2024-01-17"), // winter break, spring term starts Jan 18
    ("2024-03-09", "2024-03-17"), // spring recess
    ("2024-05-11", "2024-09-02"), // summer, fall term starts Sep 3
    ("2024-12-21", "2024-12-31"), // winter break, fall exams end Dec 20
    // 2025 - winter/spring/summer
    ("2025-01-01", "2025-01-20"), // winter break, spring term starts Jan 21
    ("2025-03-08", "2025-03-16"), // spring recess
    ("2025-05-10", "2025-09-01"), // summer, fall term starts Sep 2
];

/// A closed date interval treated as non-instructional
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl BreakInterval {
    /// Create an interval, rejecting one that starts after it ends.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<BreakInterval, FeatureError> {
        if start > end {
            return Err(FeatureError::InvalidInterval { start, end });
        }
        Ok(BreakInterval { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the date lies within the inclusive bounds
    pub fn contains(&self, d: NaiveDate) -> bool {
        (d >= self.start) && (d <= self.end)
    }
}

/// Ordered list of break intervals. Intervals may overlap; a date in
/// one or more intervals is simply a break day.
#[derive(Debug, Clone)]
pub struct AcademicBreakSchedule {
    intervals: Vec<BreakInterval>,
}

impl AcademicBreakSchedule {
    pub fn new(intervals: Vec<BreakInterval>) -> AcademicBreakSchedule {
        AcademicBreakSchedule { intervals }
    }

    /// Build the schedule from the built-in break table.
    pub fn with_default_intervals() -> Result<AcademicBreakSchedule, FeatureError> {
        let mut intervals = Vec::with_capacity(DEFAULT_BREAK_TABLE.len());
        for (start, end) in DEFAULT_BREAK_TABLE {
            intervals.push(BreakInterval::new(
                parse_table_date(start)?,
                parse_table_date(end)?,
            )?);
        }
        Ok(AcademicBreakSchedule::new(intervals))
    }

    /// Build the schedule from a JSON array of `{"start", "end"}`
    /// objects, validating every interval.
    pub fn from_json(json: &str) -> Result<AcademicBreakSchedule, FeatureError> {
        let parsed: Vec<BreakInterval> = serde_json::from_str(json)?;
        let mut intervals = Vec::with_capacity(parsed.len());
        for interval in parsed {
            intervals.push(BreakInterval::new(interval.start, interval.end)?);
        }
        Ok(AcademicBreakSchedule::new(intervals))
    }

    /// add an ad-hoc interval to the schedule
    pub fn add_interval(&mut self, interval: BreakInterval) -> &mut Self {
        self.intervals.push(interval);
        self
    }

    pub fn intervals(&self) -> &[BreakInterval] {
        &self.intervals
    }

    /// Returns true if the date falls inside any configured interval
    pub fn is_break(&self, d: NaiveDate) -> bool {
        self.intervals.iter().any(|interval| interval.contains(d))
    }
}

fn parse_table_date(text: &str) -> Result<NaiveDate, FeatureError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|source| FeatureError::UnparsableDate {
        text: text.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;

    #[test]
    fn test_interval_bounds_inclusive() {
        let interval = BreakInterval::new(
            Calendar::from_ymd(2023, 3, 4),
            Calendar::from_ymd(2023, 3, 12),
        )
        .unwrap();
        assert_eq!(true, interval.contains(Calendar::from_ymd(2023, 3, 4)));
        assert_eq!(true, interval.contains(Calendar::from_ymd(2023, 3, 8)));
        assert_eq!(true, interval.contains(Calendar::from_ymd(2023, 3, 12)));
        assert_eq!(false, interval.contains(Calendar::from_ymd(2023, 3, 3)));
        assert_eq!(false, interval.contains(Calendar::from_ymd(2023, 3, 13)));
    }

    #[test]
    fn test_inverted_interval_rejected() {
        let result = BreakInterval::new(
            Calendar::from_ymd(2023, 3, 12),
            Calendar::from_ymd(2023, 3, 4),
        );
        assert!(matches!(
            result,
            Err(FeatureError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_default_schedule() {
        let schedule = AcademicBreakSchedule::with_default_intervals().unwrap();
        assert_eq!(15, schedule.intervals().len());
        // inside the 2022 summer interval
        assert_eq!(true, schedule.is_break(Calendar::from_ymd(2022, 6, 15)));
        // winter break ends Jan 18, the 19th and 20th are term days
        assert_eq!(true, schedule.is_break(Calendar::from_ymd(2022, 1, 18)));
        assert_eq!(false, schedule.is_break(Calendar::from_ymd(2022, 1, 19)));
        assert_eq!(false, schedule.is_break(Calendar::from_ymd(2022, 1, 20)));
        // spring recess 2023
        assert_eq!(true, schedule.is_break(Calendar::from_ymd(2023, 3, 4)));
    }

    #[test]
    fn test_overlap_is_idempotent() {
        let mut schedule = AcademicBreakSchedule::new(vec![BreakInterval::new(
            Calendar::from_ymd(2022, 1, 5),
            Calendar::from_ymd(2022, 1, 10),
        )
        .unwrap()]);
        schedule.add_interval(
            BreakInterval::new(
                Calendar::from_ymd(2022, 1, 8),
                Calendar::from_ymd(2022, 1, 12),
            )
            .unwrap(),
        );
        assert_eq!(true, schedule.is_break(Calendar::from_ymd(2022, 1, 9)));
        assert_eq!(true, schedule.is_break(Calendar::from_ymd(2022, 1, 12)));
        assert_eq!(false, schedule.is_break(Calendar::from_ymd(2022, 1, 13)));
    }

    #[test]
    fn test_from_json() {
        let schedule = AcademicBreakSchedule::from_json(
            r#"[{"start": "2023-03-04", "end": "2023-03-12"}]"#,
        )
        .unwrap();
        assert_eq!(1, schedule.intervals().len());
        assert_eq!(true, schedule.is_break(Calendar::from_ymd(2023, 3, 8)));

        // inverted interval is a configuration error, not a no-op mask
        let result = AcademicBreakSchedule::from_json(
            r#"[{"start": "2023-03-12", "end": "2023-03-04"}]"#,
        );
        assert!(matches!(
            result,
            Err(FeatureError::InvalidInterval { .. })
        ));

        // unparsable date is a configuration error as well
        let result =
            AcademicBreakSchedule::from_json(r#"[{"start": "not-a-date", "end": "2023-03-04"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_table_dates_parse() {
        assert_eq!(
            Calendar::from_ymd(2022, 5, 5),
            parse_table_date("2022-05-05").unwrap()
        );
        assert!(matches!(
            parse_table_date("2022-13-05"),
            Err(FeatureError::UnparsableDate { .. })
        ));
    }
}
