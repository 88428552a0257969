use flight_hours_db::models::{EndorsementRecordModel, EndorsementTemplateModel, Identifiable};
use std::collections::HashMap;
use uuid::Uuid;

/// Templates by id, for resolving records
pub struct TemplateIndex<'a> {
    by_id: HashMap<Uuid, &'a EndorsementTemplateModel>,
}

impl<'a> TemplateIndex<'a> {
    pub fn new(templates: &'a [EndorsementTemplateModel]) -> Self {
        Self {
            by_id: templates
                .iter()
                .map(|template| (template.get_id(), template))
                .collect(),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&'a EndorsementTemplateModel> {
        self.by_id.get(&id).copied()
    }

    /// Template a record was issued under; `None` for orphaned records
    pub fn resolve(&self, record: &EndorsementRecordModel) -> Option<&'a EndorsementTemplateModel> {
        self.get(record.template_id)
    }
}
