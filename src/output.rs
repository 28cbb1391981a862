//! CSV output for the feature table.

use std::fs;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FeatureError;
use crate::features::DateRecord;

/// Write the feature table to `path` with the header
/// `date,is_holiday,day_of_week,is_academic_break`. The rows go to a
/// temp file in the destination directory first and are renamed into
/// place; a failed run leaves no partial table behind.
pub fn write_csv(records: &[DateRecord], path: &Path) -> Result<(), FeatureError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::Writer::from_writer(tmp.as_file_mut());
        writer.write_record(["date", "is_holiday", "day_of_week", "is_academic_break"])?;
        for record in records {
            writer.write_record([
                record.date.format("%Y-%m-%d").to_string(),
                record.is_holiday.to_string(),
                record.day_of_week.to_string(),
                record.is_academic_break.to_string(),
            ])?;
        }
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    log::info!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
