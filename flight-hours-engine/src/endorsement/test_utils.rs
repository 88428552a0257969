#[cfg(test)]
pub mod test_utils {
    use chrono::NaiveDate;
    use flight_hours_api::DurationUnit;
    use flight_hours_db::models::{EndorsementRecordModel, EndorsementTemplateModel};
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    pub fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    pub fn create_test_template(name: &str, duration: u32, unit: DurationUnit) -> EndorsementTemplateModel {
        EndorsementTemplateModel {
            id: Uuid::new_v4(),
            name: HeaplessString::try_from(name).unwrap(),
            description: HeaplessString::new(),
            duration: Some(duration),
            duration_unit: Some(unit),
            never_expires: false,
        }
    }

    pub fn create_never_expiring_template(name: &str) -> EndorsementTemplateModel {
        EndorsementTemplateModel {
            id: Uuid::new_v4(),
            name: HeaplessString::try_from(name).unwrap(),
            description: HeaplessString::new(),
            duration: None,
            duration_unit: None,
            never_expires: true,
        }
    }

    pub fn create_test_record(template_id: Uuid, student_name: &str, date_given: &str) -> EndorsementRecordModel {
        EndorsementRecordModel {
            id: Uuid::new_v4(),
            template_id,
            student_name: HeaplessString::try_from(student_name).unwrap(),
            student_id: None,
            date_given: date(date_given),
            notes: None,
        }
    }
}
