#[cfg(test)]
pub mod test_utils {
    use chrono::NaiveDate;
    use flight_hours_api::RateTier;
    use flight_hours_db::models::FlightEntryModel;
    use uuid::Uuid;

    pub fn tier(start: f64, end: f64, rate: f64) -> RateTier {
        RateTier::new(start, end, rate)
    }

    /// Three blocks: 0-20 at 21, 20-30 at 23, 30 and up at 26
    pub fn create_test_tiers() -> Vec<RateTier> {
        vec![
            tier(0.0, 20.0, 21.0),
            tier(20.0, 30.0, 23.0),
            tier(30.0, 9999.0, 26.0),
        ]
    }

    pub fn create_test_entry(date: &str, flight: f64, prepost: f64, ground: f64, cancellations: u32) -> FlightEntryModel {
        FlightEntryModel {
            id: Uuid::new_v4(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            flight,
            prepost,
            ground,
            cancellations,
            off: false,
            notes: None,
        }
    }
}
