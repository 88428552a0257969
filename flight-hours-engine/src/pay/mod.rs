pub mod calculate_pay;
pub mod cancellation_pay;
pub mod monthly_pay_summary;
pub mod bulk_entry_preview;

#[cfg(test)]
pub mod test_utils;

pub use calculate_pay::calculate_pay;
pub use cancellation_pay::calculate_cancellation_pay;
pub use monthly_pay_summary::MonthlyPaySummary;
pub use bulk_entry_preview::{preview_bulk_entries, BulkEntryPreview};
