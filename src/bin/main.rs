use std::path::Path;

use calfeat::error::FeatureError;
use calfeat::features::{summarize, CalendarFeatureBuilder};
use calfeat::output::write_csv;

const OUTPUT_PATH: &str = "data/raw/calendar_features.csv";

fn main() -> Result<(), FeatureError> {
    env_logger::init();

    let builder = CalendarFeatureBuilder::with_defaults()?;
    log::info!(
        "building calendar features for {}..{}",
        builder.start(),
        builder.end()
    );
    let records = builder.build();
    write_csv(&records, Path::new(OUTPUT_PATH))?;

    let summary = summarize(&records);
    println!("Created calendar with {} dates", summary.total_days);
    println!("Federal holidays: {}", summary.holiday_days);
    println!("Academic break days: {}", summary.break_days);
    println!();
    println!("Sample of break periods:");
    for record in records
        .iter()
        .filter(|r| r.is_academic_break == 1)
        .take(10)
    {
        println!(
            "{} is_holiday={} day_of_week={} is_academic_break={}",
            record.date, record.is_holiday, record.day_of_week, record.is_academic_break
        );
    }
    Ok(())
}
