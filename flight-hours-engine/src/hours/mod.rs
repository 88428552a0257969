pub mod hour_totals;
pub mod month;
pub mod goal_progress;
pub mod off_days;
pub mod search;

#[cfg(test)]
pub mod test_utils;

pub use hour_totals::HourTotals;
pub use month::{entries_in_month, entries_in_range, month_bounds, monthly_totals_for_year};
pub use goal_progress::GoalProgress;
pub use off_days::{off_day_entries, scheduled_off_days};
pub use search::{matches_search, search_entries};
