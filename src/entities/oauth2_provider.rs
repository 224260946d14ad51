//! OAuth2 provider records, forms and lists

use crate::form::{FieldSpec, FormController, FormSchema, SubmitPolicy};
use crate::list::ListController;
use crate::record::impl_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuth2Provider {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub token_endpoint: String,
    #[serde(default)]
    pub realm_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(OAuth2Provider, "oauth2_provider");

impl OAuth2Provider {
    pub fn form_schema() -> FormSchema {
        FormSchema::new()
            .field(
                FieldSpec::new("name")
                    .required()
                    .min_length(3)
                    .max_length(36),
            )
            .field(
                FieldSpec::new("client_id")
                    .required()
                    .min_length(3)
                    .max_length(128),
            )
            .field(
                FieldSpec::new("client_secret")
                    .min_length(3)
                    .max_length(128),
            )
            .field(
                FieldSpec::new("token_endpoint")
                    .required()
                    .min_length(5)
                    .max_length(512),
            )
            .field(FieldSpec::new("realm_id").required())
    }

    /// Create/edit form; sends the whole form on every submit
    pub fn form(source: Option<OAuth2Provider>) -> FormController<OAuth2Provider> {
        FormController::new(Self::form_schema())
            .with_policy(SubmitPolicy::FullForm)
            .with_source(source)
    }

    pub fn list() -> ListController<OAuth2Provider> {
        ListController::new()
    }
}
