//! Single-record create/edit form controller
//!
//! `FormController<T>` owns the mutable field state of one form: seeded
//! from an optional source record, mutated by the UI layer through
//! `set`, re-seeded when the source's `updated_at` moves (concurrent
//! external edit detection), validated declaratively, and submitted
//! against the create/update endpoints with a busy guard.
//!
//! Nothing here is reactive: the caller drives every transition and
//! routes the returned `FormEvent` into sibling list controllers.

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::record::{decode_record, FieldMap, Record};
use crate::validation::{check_field, Rule, ValidationReport};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::Value;

/// Declaration of one form field: name, default value, rules
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    default: Value,
    rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            default: Value::String(String::new()),
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = value.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.rules.push(Rule::MinLength(min));
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.rules.push(Rule::MaxLength(max));
        self
    }

    pub fn email(mut self) -> Self {
        self.rules.push(Rule::Email);
        self
    }

    pub fn pattern(mut self, regex: Regex) -> Self {
        self.rules.push(Rule::Pattern(regex));
        self
    }

    pub fn same_as(mut self, other: &'static str) -> Self {
        self.rules.push(Rule::SameAs(other));
        self
    }
}

/// Enumerated field declarations of one form
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|spec| spec.name == name)
    }

    /// Fresh form state holding every field's default
    pub fn defaults(&self) -> FieldMap {
        let mut state = FieldMap::new();
        for spec in &self.fields {
            state.insert(spec.name.to_string(), spec.default.clone());
        }
        state
    }
}

/// What a submit sends.
///
/// The source components disagree on this, so it stays configurable:
/// the user form diffs against the source and skips the request when
/// nothing changed, while the role/permission/realm forms always send
/// the whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Send only fields differing from the source; skip the request
    /// entirely when the diff is empty
    #[default]
    ModifiedOnly,
    /// Send every schema field on every submit
    FullForm,
}

/// Outcome of a completed submit, routed by the caller into sibling
/// list controllers
#[derive(Debug)]
pub enum FormEvent<T> {
    Created(T),
    Updated(T),
    Failed(ClientError),
}

/// Create/edit form state for one record type
#[derive(Debug)]
pub struct FormController<T: Record> {
    schema: FormSchema,
    policy: SubmitPolicy,
    source: Option<T>,
    target_id: Option<String>,
    state: FieldMap,
    seen_updated_at: Option<DateTime<Utc>>,
    busy: bool,
}

impl<T: Record> FormController<T> {
    pub fn new(schema: FormSchema) -> Self {
        let state = schema.defaults();
        Self {
            schema,
            policy: SubmitPolicy::default(),
            source: None,
            target_id: None,
            state,
            seen_updated_at: None,
            busy: false,
        }
    }

    pub fn with_policy(mut self, policy: SubmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Seed from a source record (edit mode when it carries an id)
    pub fn with_source(mut self, source: Option<T>) -> Self {
        self.seen_updated_at = source.as_ref().and_then(Record::updated_at);
        self.source = source;
        self.init_from_source();
        self
    }

    /// Force update mode against a fixed id without a source record
    /// (password form)
    pub fn with_target_id(mut self, id: impl Into<String>) -> Self {
        self.target_id = Some(id.into());
        self
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &FieldMap {
        &self.state
    }

    pub fn source(&self) -> Option<&T> {
        self.source.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_editing(&self) -> bool {
        self.edit_id().is_some()
    }

    /// Current value of a schema field
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.state.get(field)
    }

    /// Set a schema field; values for unknown fields are dropped
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        if !self.schema.contains(field) {
            tracing::debug!(field, "ignoring value for field outside the schema");
            return;
        }
        self.state.insert(field.to_string(), value.into());
    }

    /// Replace the source record, re-seeding the form state when its
    /// `updated_at` moved to a different, defined value. The initial
    /// absent-to-absent transition never re-seeds.
    pub fn sync_source(&mut self, source: Option<T>) {
        let next = source.as_ref().and_then(Record::updated_at);
        self.source = source;
        if next.is_some() && next != self.seen_updated_at {
            self.seen_updated_at = next;
            self.init_from_source();
        }
    }

    /// Copy schema fields present on the source into the form state,
    /// never the id
    fn init_from_source(&mut self) {
        let Some(source) = &self.source else {
            return;
        };
        let fields = source.to_fields();
        for spec in self.schema.fields() {
            if spec.name == "id" {
                continue;
            }
            if let Some(value) = fields.get(spec.name) {
                if !value.is_null() {
                    self.state.insert(spec.name.to_string(), value.clone());
                }
            }
        }
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        for spec in self.schema.fields() {
            for fv in check_field(spec.name, spec.rules(), &self.state) {
                report.push(fv.field, fv.violation);
            }
        }
        report
    }

    /// Fields whose current value differs from the source; without a
    /// source every schema field counts as modified
    pub fn modified_fields(&self) -> Vec<String> {
        let source_fields = self.source.as_ref().map(Record::to_fields);
        self.schema
            .fields()
            .iter()
            .filter(|spec| match &source_fields {
                None => true,
                Some(fields) => {
                    let original = fields.get(spec.name).unwrap_or(&Value::Null);
                    let current = self.state.get(spec.name).unwrap_or(&Value::Null);
                    original != current
                }
            })
            .map(|spec| spec.name.to_string())
            .collect()
    }

    /// Submit the form.
    ///
    /// Returns no event while a submission is in flight or the form is
    /// invalid, and under `SubmitPolicy::ModifiedOnly` also when editing
    /// with an empty diff. Operation failures come back as
    /// `FormEvent::Failed`; they are never propagated.
    pub async fn submit(&mut self, client: &dyn ApiClient) -> Option<FormEvent<T>> {
        if self.busy {
            return None;
        }
        if !self.validate().is_ok() {
            return None;
        }

        self.busy = true;
        let event = self.perform_submit(client).await;
        self.busy = false;

        event
    }

    async fn perform_submit(&self, client: &dyn ApiClient) -> Option<FormEvent<T>> {
        let payload = match self.policy {
            SubmitPolicy::FullForm => self.state.clone(),
            SubmitPolicy::ModifiedOnly => {
                let fields = self.modified_fields();
                if fields.is_empty() {
                    return None;
                }
                let mut payload = FieldMap::new();
                for field in fields {
                    if let Some(value) = self.state.get(&field) {
                        payload.insert(field, value.clone());
                    }
                }
                payload
            }
        };

        let event = match self.edit_id() {
            Some(id) => {
                let id = id.to_string();
                match client.update(T::RESOURCE, &id, &payload).await {
                    Ok(value) => match decode_record(value) {
                        Ok(record) => FormEvent::Updated(record),
                        Err(err) => FormEvent::Failed(err),
                    },
                    Err(err) => {
                        tracing::warn!(resource = T::RESOURCE, error = %err, "update failed");
                        FormEvent::Failed(err)
                    }
                }
            }
            None => match client.create(T::RESOURCE, &payload).await {
                Ok(value) => match decode_record(value) {
                    Ok(record) => FormEvent::Created(record),
                    Err(err) => FormEvent::Failed(err),
                },
                Err(err) => {
                    tracing::warn!(resource = T::RESOURCE, error = %err, "create failed");
                    FormEvent::Failed(err)
                }
            },
        };

        Some(event)
    }

    fn edit_id(&self) -> Option<&str> {
        self.target_id.as_deref().or_else(|| {
            self.source
                .as_ref()
                .map(Record::id)
                .filter(|id| !id.is_empty())
        })
    }
}
