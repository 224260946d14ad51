//! Robot (service account) records, forms and lists

use crate::form::{FieldSpec, FormController, FormSchema, SubmitPolicy};
use crate::list::ListController;
use crate::record::{default_true, impl_record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Only present directly after creation or a secret rotation
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub realm_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(Robot, "robot");

impl Robot {
    pub fn form_schema() -> FormSchema {
        FormSchema::new()
            .field(
                FieldSpec::new("name")
                    .required()
                    .min_length(3)
                    .max_length(128),
            )
            .field(FieldSpec::new("description").min_length(5).max_length(4096))
            .field(FieldSpec::new("realm_id").required())
            .field(FieldSpec::new("active").default_value(true))
    }

    /// Create/edit form; sends the whole form on every submit
    pub fn form(source: Option<Robot>) -> FormController<Robot> {
        FormController::new(Self::form_schema())
            .with_policy(SubmitPolicy::FullForm)
            .with_source(source)
    }

    pub fn list() -> ListController<Robot> {
        ListController::new()
    }
}
