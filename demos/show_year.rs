use calfeat::calendar::UsFederalCalendar;
use chrono::{Duration, NaiveDate};
/// example to show federal holidays for a range of years
use std::env::args;
fn main() {
    let args: Vec<String> = args().collect();
    let len = args.len();
    if len < 2 {
        panic!("Usage: {} first [last]", args[0]);
    }
    let first: i32 = (&args[1]).parse().unwrap();
    let last: i32 = if len > 2 {
        (&args[2]).parse().unwrap()
    } else {
        first
    };
    let mut fed = UsFederalCalendar::with_default_rules(false).unwrap();
    let fed = fed.populate_cal(Some(first), Some(last)).unwrap();
    let cal = fed.get_cal();
    let mut first_date = NaiveDate::from_ymd_opt(first, 1, 1).unwrap();
    let last_date = NaiveDate::from_ymd_opt(last, 12, 31).unwrap();
    let mut holidays: Vec<NaiveDate> = Vec::new();
    while first_date <= last_date {
        if cal.is_holiday(first_date) {
            holidays.push(first_date);
        }
        first_date = first_date + Duration::days(1);
    }
    println!("holidays: {:?}", holidays);
}
