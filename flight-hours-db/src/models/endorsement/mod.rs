pub mod endorsement_template;
pub mod endorsement_record;

pub use endorsement_template::EndorsementTemplateModel;
pub use endorsement_record::EndorsementRecordModel;
