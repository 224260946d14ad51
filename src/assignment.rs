//! Assignment list controller
//!
//! Renders one entity type's list with item actions scoped to a fixed
//! owner of another type: a role's permission list, a user's role list,
//! and so on. The controller is a structural wrapper - search,
//! pagination and local-mutation handling belong to the wrapped
//! `ListController<T>`; the wrapper contributes the owner id, the
//! `(owner_id, item.id)` prop mapping for row actions, and the
//! assign/unassign calls against the relation resource `R`.

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::list::ListController;
use crate::pagination::PageRequest;
use crate::query::Query;
use crate::record::{decode_record, FieldMap, Record};
use serde_json::Value;
use std::marker::PhantomData;

/// Foreign-key column names of a relation resource, oriented from the
/// owning side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationSchema {
    /// Column holding the fixed owner's id
    pub owner_key: &'static str,
    /// Column holding the listed item's id
    pub item_key: &'static str,
}

/// Props for one rendered row's assign/unassign action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyPair {
    pub owner_id: String,
    pub item_id: String,
}

/// List of `T` records whose item actions manage `R` relation rows for
/// one fixed owner
pub struct AssignmentListController<T: Record, R: Record> {
    relation: RelationSchema,
    owner_id: String,
    list: ListController<T>,
    _relation_row: PhantomData<fn() -> R>,
}

impl<T: Record, R: Record> AssignmentListController<T, R> {
    pub fn new(relation: RelationSchema, owner_id: impl Into<String>) -> Self {
        Self {
            relation,
            owner_id: owner_id.into(),
            list: ListController::new(),
            _relation_row: PhantomData,
        }
    }

    /// Replace the wrapped list (entity-specific presets)
    pub fn with_list(mut self, list: ListController<T>) -> Self {
        self.list = list;
        self
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn relation(&self) -> RelationSchema {
        self.relation
    }

    pub fn list(&self) -> &ListController<T> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListController<T> {
        &mut self.list
    }

    /// Passthrough to the wrapped list's load
    pub async fn load(
        &mut self,
        client: &dyn ApiClient,
        page: Option<PageRequest>,
    ) -> Result<(), ClientError> {
        self.list.load(client, page).await
    }

    /// The foreign-key pair a rendered row's action is parameterized by
    pub fn action_props(&self, item: &T) -> ForeignKeyPair {
        ForeignKeyPair {
            owner_id: self.owner_id.clone(),
            item_id: item.id().to_string(),
        }
    }

    /// Create the relation row binding the owner to `item_id`
    pub async fn assign(&self, client: &dyn ApiClient, item_id: &str) -> Result<R, ClientError> {
        let mut fields = FieldMap::new();
        fields.insert(
            self.relation.owner_key.to_string(),
            Value::String(self.owner_id.clone()),
        );
        fields.insert(
            self.relation.item_key.to_string(),
            Value::String(item_id.to_string()),
        );

        let value = client.create(R::RESOURCE, &fields).await?;
        decode_record(value)
    }

    /// Delete an existing relation row by its own id
    pub async fn unassign(
        &self,
        client: &dyn ApiClient,
        relation_id: &str,
    ) -> Result<Value, ClientError> {
        client.delete(R::RESOURCE, relation_id).await
    }

    /// The owner's current relation rows, for deciding which items are
    /// already assigned
    pub async fn load_assigned(&self, client: &dyn ApiClient) -> Result<Vec<R>, ClientError> {
        let query = Query::new().filter(self.relation.owner_key, self.owner_id.clone());
        let page = client.get_many(R::RESOURCE, &query).await?;
        let (rows, _) = page.decode::<R>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{Call, MockClient};
    use crate::entities::relations::UserRole;
    use crate::entities::role::Role;
    use serde_json::json;

    #[test]
    fn test_action_props_pair_owner_and_item() {
        let list = UserRole::for_user("u-1");
        let role: Role = serde_json::from_value(json!({"id": "r-9", "name": "admin"})).unwrap();

        assert_eq!(
            list.action_props(&role),
            ForeignKeyPair {
                owner_id: "u-1".to_string(),
                item_id: "r-9".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_assign_creates_relation_row_with_both_keys() {
        let client = MockClient::new().with_record(json!({
            "id": "ur-1",
            "user_id": "u-1",
            "role_id": "r-9",
        }));
        let list = UserRole::for_user("u-1");

        let row = list.assign(&client, "r-9").await.unwrap();
        assert_eq!(row.id, "ur-1");
        assert_eq!(row.user_id, "u-1");
        assert_eq!(row.role_id, "r-9");

        match &client.calls()[0] {
            Call::Create { resource, fields } => {
                assert_eq!(resource, "user_role");
                assert_eq!(fields.get("user_id"), Some(&json!("u-1")));
                assert_eq!(fields.get("role_id"), Some(&json!("r-9")));
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unassign_deletes_by_relation_id() {
        let client = MockClient::new();
        let list = UserRole::for_user("u-1");

        list.unassign(&client, "ur-1").await.unwrap();

        assert_eq!(
            client.calls()[0],
            Call::Delete {
                resource: "user_role".to_string(),
                id: "ur-1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_load_assigned_filters_by_owner_key() {
        let client = MockClient::new().with_page(
            vec![json!({"id": "ur-1", "user_id": "u-1", "role_id": "r-9"})],
            1,
        );
        let list = UserRole::for_user("u-1");

        let rows = list.load_assigned(&client).await.unwrap();
        assert_eq!(rows.len(), 1);

        match &client.calls()[0] {
            Call::GetMany { resource, query } => {
                assert_eq!(resource, "user_role");
                assert_eq!(query.filter.get("user_id"), Some(&json!("u-1")));
            }
            other => panic!("expected get_many, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_behavior_passes_through() {
        let client = MockClient::new().with_page(vec![json!({"id": "r-1", "name": "admin"})], 1);
        let mut list = UserRole::for_user("u-1");

        list.load(&client, None).await.unwrap();
        assert_eq!(list.list().items().len(), 1);
        assert_eq!(list.list().meta().total, 1);

        // reversed orientation lists users for a role
        let for_role = UserRole::for_role("r-1");
        assert_eq!(for_role.relation().owner_key, "role_id");
        assert_eq!(for_role.relation().item_key, "user_id");
    }
}
