use flight_hours_db::models::FlightEntryModel;
use serde::Serialize;

/// Sums over a set of logged days
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourTotals {
    pub flight: f64,
    pub prepost: f64,
    pub ground: f64,
    /// Flight + pre/post + ground
    pub total: f64,
    pub cancellation_hours: u32,
    pub off_days: u32,
}

impl HourTotals {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a FlightEntryModel>,
    {
        let mut totals = Self::default();
        for entry in entries {
            totals.add(entry);
        }
        totals
    }

    pub fn add(&mut self, entry: &FlightEntryModel) {
        self.flight += entry.flight;
        self.prepost += entry.prepost;
        self.ground += entry.ground;
        self.total += entry.qualifying_hours();
        self.cancellation_hours = self.cancellation_hours.saturating_add(entry.cancellations);
        if entry.off {
            self.off_days += 1;
        }
    }
}
