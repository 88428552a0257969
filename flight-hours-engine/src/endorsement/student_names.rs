use flight_hours_db::models::EndorsementRecordModel;
use std::collections::HashSet;

/// Distinct non-blank student names, in first-seen order
pub fn unique_student_names(records: &[EndorsementRecordModel]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|record| record.student_name.as_str())
        .filter(|name| !name.trim().is_empty())
        .filter(|name| seen.insert(*name))
        .collect()
}
