//! Role records, forms and lists

use crate::form::{FieldSpec, FormController, FormSchema, SubmitPolicy};
use crate::list::ListController;
use crate::record::impl_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(Role, "role");

impl Role {
    pub fn form_schema() -> FormSchema {
        FormSchema::new()
            .field(
                FieldSpec::new("name")
                    .required()
                    .min_length(3)
                    .max_length(30),
            )
            .field(FieldSpec::new("description").min_length(5).max_length(4096))
    }

    /// Create/edit form; sends the whole form on every submit
    pub fn form(source: Option<Role>) -> FormController<Role> {
        FormController::new(Self::form_schema())
            .with_policy(SubmitPolicy::FullForm)
            .with_source(source)
    }

    pub fn list() -> ListController<Role> {
        ListController::new()
    }
}
