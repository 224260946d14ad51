//! User records, forms and lists

use crate::form::{FieldSpec, FormController, FormSchema, SubmitPolicy};
use crate::list::ListController;
use crate::query::Query;
use crate::record::{default_true, impl_record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    /// Set by the server for accounts whose name must not change
    #[serde(default)]
    pub name_locked: bool,
    #[serde(default)]
    pub realm_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(User, "user");

impl User {
    pub fn form_schema() -> FormSchema {
        FormSchema::new()
            .field(
                FieldSpec::new("name")
                    .required()
                    .min_length(3)
                    .max_length(128),
            )
            .field(
                FieldSpec::new("display_name")
                    .required()
                    .min_length(3)
                    .max_length(128),
            )
            .field(FieldSpec::new("email").min_length(5).max_length(255).email())
            .field(FieldSpec::new("realm_id").required())
            .field(FieldSpec::new("active").default_value(true))
    }

    /// Create/edit form; edits send only modified fields and skip the
    /// request when nothing changed
    pub fn form(source: Option<User>) -> FormController<User> {
        FormController::new(Self::form_schema())
            .with_policy(SubmitPolicy::ModifiedOnly)
            .with_source(source)
    }

    pub fn password_form_schema() -> FormSchema {
        FormSchema::new()
            .field(
                FieldSpec::new("password")
                    .required()
                    .min_length(5)
                    .max_length(100),
            )
            .field(
                FieldSpec::new("password_repeat")
                    .min_length(5)
                    .max_length(100)
                    .same_as("password"),
            )
    }

    /// Password change form for a known user id; always an update and
    /// always sends both fields
    pub fn password_form(id: impl Into<String>) -> FormController<User> {
        FormController::new(Self::password_form_schema())
            .with_policy(SubmitPolicy::FullForm)
            .with_target_id(id)
    }

    /// User list including each user's realm
    pub fn list() -> ListController<User> {
        ListController::new().with_query(Query::new().include("realm"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_record_decodes_with_defaults() {
        let user: User = serde_json::from_value(json!({"id": "1", "name": "admin"})).unwrap();
        assert!(user.active);
        assert!(!user.name_locked);
        assert!(user.email.is_none());
    }

    #[test]
    fn test_form_defaults() {
        let form = User::form(None);
        assert_eq!(form.value("active"), Some(&json!(true)));
        assert_eq!(form.value("name"), Some(&json!("")));
        assert!(!form.is_editing());
    }

    #[test]
    fn test_list_preset_includes_realm() {
        let list = User::list();
        assert_eq!(list.query().include.get("realm"), Some(&true));
    }
}
