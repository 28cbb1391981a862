//! US federal holiday calendar computed from recurring-date rules.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::FeatureError;

/// Default population years, matching the feature-table window.
pub const DEFAULT_FIRST_YEAR: i32 = 2022;
pub const DEFAULT_LAST_YEAR: i32 = 2025;

/// Specifies the nth week of a month
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum NthWeek {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// Rules from which the holiday set is computed
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum Holiday {
    /// A holiday on the same month/day every year. With `observed`, a
    /// Saturday occurrence also marks the preceding Friday and a Sunday
    /// occurrence the following Monday; the actual date stays in the set.
    /// `first` and `last` are the first and last year this day is a holiday (inclusively).
    FixedDate {
        month: u32,
        day: u32,
        observed: bool,
        first: Option<i32>,
        last: Option<i32>,
    },
    /// A single holiday which is valid only once in time.
    SingularDay(NaiveDate),
    /// A holiday that is defined in relative days (e.g. -2 for Good Friday) to Easter (Sunday).
    EasterOffset {
        offset: i32,
        first: Option<i32>,
        last: Option<i32>,
    },
    /// A holiday that falls on the nth (or last) weekday of a specific month, e.g. the third Monday in January.
    /// `first` and `last` are the first and last year this day is a holiday (inclusively).
    MonthWeekday {
        month: u32,
        weekday: Weekday,
        nth: NthWeek,
        first: Option<i32>,
        last: Option<i32>,
    },
}

impl Holiday {
    /// Reject rules naming a month or day that cannot exist. Day 29 in
    /// February stays valid and simply yields nothing in non-leap years.
    fn validate(&self) -> Result<(), FeatureError> {
        match self {
            Holiday::FixedDate { month, day, .. } => {
                if !(1..=12).contains(month) || *day == 0 || *day > last_day_of_month(2000, *month)
                {
                    return Err(FeatureError::InvalidHolidayRule {
                        month: *month,
                        day: *day,
                    });
                }
            }
            Holiday::MonthWeekday { month, .. } => {
                if !(1..=12).contains(month) {
                    return Err(FeatureError::InvalidHolidayRule {
                        month: *month,
                        day: 0,
                    });
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Calendar for arbitrary complex holiday rules
#[derive(Debug, Clone)]
pub struct Calendar {
    holidays: BTreeSet<NaiveDate>,
}

impl Calendar {
    /// Calculate all holidays for a given range of years from `start`
    /// to `end` (inclusively). The calculation is performed on the basis
    /// of a vector of holiday rules. Every rule is validated before any
    /// date is computed; a malformed rule fails the whole calculation.
    pub fn calc_calendar(
        holiday_rules: &[Holiday],
        start: i32,
        end: i32,
    ) -> Result<Calendar, FeatureError> {
        for rule in holiday_rules {
            rule.validate()?;
        }

        let mut holidays = BTreeSet::new();

        for rule in holiday_rules {
            match rule {
                Holiday::SingularDay(date) => {
                    let year = date.year();
                    if year >= start && year <= end {
                        holidays.insert(*date);
                    }
                }
                Holiday::FixedDate {
                    month,
                    day,
                    observed,
                    first,
                    last,
                } => {
                    let (first, last) = Self::calc_first_and_last(start, end, first, last);
                    for year in first..last + 1 {
                        // None only for Feb 29 in a non-leap year
                        let date = match NaiveDate::from_ymd_opt(year, *month, *day) {
                            Some(date) => date,
                            None => continue,
                        };
                        holidays.insert(date);
                        if *observed {
                            // the observed companion may land in the adjacent year
                            match date.weekday() {
                                Weekday::Sat => {
                                    holidays.insert(date.pred_opt().unwrap());
                                }
                                Weekday::Sun => {
                                    holidays.insert(date.succ_opt().unwrap());
                                }
                                _ => {}
                            }
                        }
                    }
                }
                Holiday::EasterOffset {
                    offset,
                    first,
                    last,
                } => {
                    let (first, last) = Self::calc_first_and_last(start, end, first, last);
                    for year in first..last + 1 {
                        let easter = computus::gregorian(year)
                            .map_err(|_| FeatureError::EasterUndefined { year })?;
                        let easter = Calendar::from_ymd(easter.year, easter.month, easter.day);
                        let date = easter
                            .checked_add_signed(Duration::days(*offset as i64))
                            .unwrap();
                        holidays.insert(date);
                    }
                }
                Holiday::MonthWeekday {
                    month,
                    weekday,
                    nth,
                    first,
                    last,
                } => {
                    let (first, last) = Self::calc_first_and_last(start, end, first, last);
                    for year in first..last + 1 {
                        let day = match nth {
                            NthWeek::First => 1,
                            NthWeek::Second => 8,
                            NthWeek::Third => 15,
                            NthWeek::Fourth => 22,
                            NthWeek::Last => last_day_of_month(year, *month),
                        };
                        let mut date = Calendar::from_ymd(year, *month, day);
                        while date.weekday() != *weekday {
                            date = match nth {
                                NthWeek::Last => date.pred_opt().unwrap(),
                                _ => date.succ_opt().unwrap(),
                            }
                        }
                        holidays.insert(date);
                    }
                }
            }
        }
        Ok(Calendar { holidays })
    }

    fn calc_first_and_last(
        start: i32,
        end: i32,
        first: &Option<i32>,
        last: &Option<i32>,
    ) -> (i32, i32) {
        let first = match first {
            Some(year) => std::cmp::max(start, *year),
            _ => start,
        };
        let last = match last {
            Some(year) => std::cmp::min(end, *year),
            _ => end,
        };
        (first, last)
    }

    /// Returns true if the specified day is a holiday
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Returns true if the specified year is a leap year (i.e. Feb 29th exists for this year)
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Calculate the last day of a given month in a given year
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .unwrap_or_else(|| Calendar::from_ymd(year + 1, 1, 1))
        .pred_opt()
        .unwrap()
        .day()
}

/// Calendar of US federal holidays
#[derive(Debug, Clone)]
pub struct UsFederalCalendar {
    cal: Calendar,
    holiday_rules: Vec<Holiday>,
}

impl UsFederalCalendar {
    /// Create a new US federal calendar with the default rules; populate
    /// the holiday set for the default year range if `populate` is set
    /// to `true`.
    pub fn with_default_rules(populate: bool) -> Result<UsFederalCalendar, FeatureError> {
        let holiday_rules = vec![
            // New Year's Day
            Holiday::FixedDate {
                month: 1,
                day: 1,
                observed: true,
                first: None,
                last: None,
            },
            // Martin Luther King Jr. Day, 3rd Monday of January
            Holiday::MonthWeekday {
                month: 1,
                weekday: Weekday::Mon,
                nth: NthWeek::Third,
                first: Some(1986),
                last: None,
            },
            // Washington's Birthday, 3rd Monday of February
            Holiday::MonthWeekday {
                month: 2,
                weekday: Weekday::Mon,
                nth: NthWeek::Third,
                first: None,
                last: None,
            },
            // Memorial Day, last Monday of May
            Holiday::MonthWeekday {
                month: 5,
                weekday: Weekday::Mon,
                nth: NthWeek::Last,
                first: None,
                last: None,
            },
            // Juneteenth National Independence Day
            Holiday::FixedDate {
                month: 6,
                day: 19,
                observed: true,
                first: Some(2021),
                last: None,
            },
            // Independence Day
            Holiday::FixedDate {
                month: 7,
                day: 4,
                observed: true,
                first: None,
                last: None,
            },
            // Labor Day, 1st Monday of September
            Holiday::MonthWeekday {
                month: 9,
                weekday: Weekday::Mon,
                nth: NthWeek::First,
                first: None,
                last: None,
            },
            // Columbus Day, 2nd Monday of October
            Holiday::MonthWeekday {
                month: 10,
                weekday: Weekday::Mon,
                nth: NthWeek::Second,
                first: None,
                last: None,
            },
            // Veterans Day
            Holiday::FixedDate {
                month: 11,
                day: 11,
                observed: true,
                first: None,
                last: None,
            },
            // Thanksgiving Day, 4th Thursday of November
            Holiday::MonthWeekday {
                month: 11,
                weekday: Weekday::Thu,
                nth: NthWeek::Fourth,
                first: None,
                last: None,
            },
            // Christmas Day
            Holiday::FixedDate {
                month: 12,
                day: 25,
                observed: true,
                first: None,
                last: None,
            },
        ];
        let cal = Calendar {
            holidays: BTreeSet::new(),
        };
        let mut fed = UsFederalCalendar { cal, holiday_rules };
        if populate {
            fed.populate_cal(None, None)?;
        }
        Ok(fed)
    }

    /// add an ad-hoc holiday rule to the rule list
    pub fn add_holiday_rule(&mut self, holiday: Holiday) -> &mut Self {
        self.holiday_rules.push(holiday);
        self
    }

    /// populate the holiday set for given `start` and `end` years
    /// (inclusively, defaults to 2022 and 2025 if None, None are given)
    pub fn populate_cal(
        &mut self,
        start: Option<i32>,
        end: Option<i32>,
    ) -> Result<&mut Self, FeatureError> {
        let start = start.unwrap_or(DEFAULT_FIRST_YEAR);
        let end = end.unwrap_or(DEFAULT_LAST_YEAR);
        self.cal = Calendar::calc_calendar(&self.holiday_rules, start, end)?;
        Ok(self)
    }

    pub fn get_cal(&self) -> Calendar {
        self.cal.clone()
    }
}
