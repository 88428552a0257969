pub mod compute_expiration;
pub mod classify_status;
pub mod template_index;
pub mod filter_endorsements;
pub mod annotate_endorsements;
pub mod student_names;

#[cfg(test)]
pub mod test_utils;

pub use compute_expiration::{compute_expiration, expiration_for};
pub use classify_status::{
    classify_status, classify_status_at, days_until_expiration, days_until_expiration_at,
    is_expired, is_expiring_soon,
};
pub use template_index::TemplateIndex;
pub use filter_endorsements::{filter_endorsements, EndorsementFilter};
pub use annotate_endorsements::{annotate_endorsements, AnnotatedEndorsement};
pub use student_names::unique_student_names;
