use calfeat::breaks::AcademicBreakSchedule;
use calfeat::calendar::UsFederalCalendar;
fn main() {
    let mut fed = UsFederalCalendar::with_default_rules(false).unwrap();
    fed.populate_cal(Some(2022), Some(2025)).unwrap();
    let c = fed.get_cal();
    println!("{:?}", c);
    let schedule = AcademicBreakSchedule::with_default_intervals().unwrap();
    println!("{:?}", schedule);
}
