//! Realm records, forms and lists
//!
//! Realms are the tenancy boundary; the `master` realm is special and
//! its name is locked server-side. Create-mode forms seed an empty name
//! with a generated token the way the original form does.

use crate::form::{FieldSpec, FormController, FormSchema, SubmitPolicy};
use crate::list::ListController;
use crate::record::impl_record;
use crate::validation::name_pattern;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Name of the built-in realm every deployment carries
pub const MASTER_NAME: &str = "master";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub name_locked: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(Realm, "realm");

impl Realm {
    pub fn is_master(&self) -> bool {
        self.name == MASTER_NAME
    }

    pub fn form_schema() -> FormSchema {
        FormSchema::new()
            .field(
                FieldSpec::new("name")
                    .required()
                    .min_length(3)
                    .max_length(128)
                    .pattern(name_pattern()),
            )
            .field(FieldSpec::new("description").min_length(5).max_length(4096))
    }

    /// Create/edit form; an empty name after seeding is filled with a
    /// generated token
    pub fn form(source: Option<Realm>) -> FormController<Realm> {
        let mut form = FormController::new(Self::form_schema())
            .with_policy(SubmitPolicy::FullForm)
            .with_source(source);
        if form.value("name") == Some(&Value::String(String::new())) {
            form.set("name", generate_name());
        }
        form
    }

    pub fn list() -> ListController<Realm> {
        ListController::new()
    }
}

/// Random, pattern-safe realm name suggestion
pub fn generate_name() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::check_field;
    use serde_json::json;

    #[test]
    fn test_create_form_gets_a_generated_name() {
        let form = Realm::form(None);
        let name = form.value("name").and_then(Value::as_str).unwrap();
        assert!(!name.is_empty());
        assert!(check_field(
            "name",
            &[crate::validation::Rule::Pattern(name_pattern())],
            form.state()
        )
        .is_empty());
    }

    #[test]
    fn test_edit_form_keeps_source_name() {
        let realm: Realm =
            serde_json::from_value(json!({"id": "1", "name": "master"})).unwrap();
        let form = Realm::form(Some(realm));
        assert_eq!(form.value("name"), Some(&json!("master")));
    }

    #[test]
    fn test_master_detection() {
        let realm: Realm = serde_json::from_value(json!({"name": "master"})).unwrap();
        assert!(realm.is_master());
    }
}
