//! Pure computations behind the flight-hours log: tiered pay, cancellation
//! pay, monthly aggregation and endorsement lifecycle.
//!
//! Every function here takes plain data and returns plain data. Nothing reads
//! the clock directly; callers pass `today` or a [`flight_hours_api::Clock`].

pub mod endorsement;
pub mod hours;
pub mod pay;

pub use endorsement::{
    annotate_endorsements, classify_status, compute_expiration, filter_endorsements,
    is_expired, is_expiring_soon, unique_student_names, AnnotatedEndorsement, EndorsementFilter,
};
pub use hours::{GoalProgress, HourTotals};
pub use pay::{calculate_cancellation_pay, calculate_pay, BulkEntryPreview, MonthlyPaySummary};
