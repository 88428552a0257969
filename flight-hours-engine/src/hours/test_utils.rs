#[cfg(test)]
pub mod test_utils {
    use chrono::NaiveDate;
    use flight_hours_db::models::FlightEntryModel;
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    pub fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    pub fn create_test_entry(day: &str, flight: f64, prepost: f64, ground: f64) -> FlightEntryModel {
        FlightEntryModel {
            id: Uuid::new_v4(),
            date: date(day),
            flight,
            prepost,
            ground,
            cancellations: 0,
            off: false,
            notes: None,
        }
    }

    pub fn with_notes(mut entry: FlightEntryModel, notes: &str) -> FlightEntryModel {
        entry.notes = Some(HeaplessString::try_from(notes).unwrap());
        entry
    }
}
