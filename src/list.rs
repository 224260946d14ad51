//! Paginated, searchable list controller
//!
//! `ListController<T>` holds one page of records plus search text and
//! pagination state. Loading is busy-guarded (a second call while a
//! request is in flight is dropped, not queued). Sibling forms report
//! their outcomes through `handle_created` / `handle_updated` /
//! `handle_deleted`, which patch the local page in place so a create,
//! rename or delete does not force a full reload.

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::pagination::{PageRequest, PaginationMeta};
use crate::query::{substring_filter, Query};
use crate::record::{FieldMap, Record};

/// Where `handle_created` inserts a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    #[default]
    Back,
    Front,
}

/// How search text changes translate into reloads.
///
/// The original components skip the reload for the very first keystroke
/// (old text empty, new text one character). That is a deliberate
/// micro-optimization carried over as the default, not a debounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPolicy {
    #[default]
    SuppressFirstKeystroke,
    /// Reload on every change
    Eager,
}

/// One page of records of type `T` with search and local mutation
pub struct ListController<T: Record> {
    query: Query,
    search_field: String,
    search_policy: SearchPolicy,
    busy: bool,
    items: Vec<T>,
    q: String,
    meta: PaginationMeta,
}

impl<T: Record> Default for ListController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> ListController<T> {
    pub fn new() -> Self {
        Self {
            query: Query::new(),
            search_field: "name".to_string(),
            search_policy: SearchPolicy::default(),
            busy: false,
            items: Vec::new(),
            q: String::new(),
            meta: PaginationMeta::default(),
        }
    }

    /// Static query merged over the generated defaults on every load;
    /// its values win on key collision
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.meta.limit = limit;
        self
    }

    /// Field the search text filters on (default `name`)
    pub fn with_search_field(mut self, field: impl Into<String>) -> Self {
        self.search_field = field.into();
        self
    }

    pub fn with_search_policy(mut self, policy: SearchPolicy) -> Self {
        self.search_policy = policy;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The static query merged over the generated defaults
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn meta(&self) -> PaginationMeta {
        self.meta
    }

    pub fn search_text(&self) -> &str {
        &self.q
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Fetch the current page. A call while busy does nothing. An
    /// optional page override moves `offset` first. On success the page
    /// replaces `items` wholesale and `total` tracks the server's count.
    pub async fn load(
        &mut self,
        client: &dyn ApiClient,
        page: Option<PageRequest>,
    ) -> Result<(), ClientError> {
        if self.busy {
            return Ok(());
        }
        if let Some(page) = page {
            self.meta.offset = page.offset;
        }

        self.busy = true;
        let result = self.fetch(client).await;
        self.busy = false;

        if let Err(err) = &result {
            tracing::warn!(resource = T::RESOURCE, error = %err, "list load failed");
        }
        result
    }

    async fn fetch(&mut self, client: &dyn ApiClient) -> Result<(), ClientError> {
        let query = Query::new()
            .page(self.meta.limit, self.meta.offset)
            .filter(self.search_field.clone(), substring_filter(&self.q))
            .merge(&self.query);

        let page = client.get_many(T::RESOURCE, &query).await?;
        let (items, total) = page.decode::<T>()?;

        self.items = items;
        self.meta.total = total;
        Ok(())
    }

    /// Record a search text change. Returns whether a reload is due; a
    /// due reload also resets `offset` to 0. The first keystroke is
    /// suppressed under the default policy.
    pub fn set_search(&mut self, q: impl Into<String>) -> bool {
        let q = q.into();
        if q == self.q {
            return false;
        }

        let new_len = q.chars().count();
        let suppress = self.search_policy == SearchPolicy::SuppressFirstKeystroke
            && new_len == 1
            && new_len > self.q.chars().count();
        self.q = q;

        if suppress {
            return false;
        }
        self.meta.offset = 0;
        true
    }

    /// `set_search` plus the follow-up load when one is due
    pub async fn search(
        &mut self,
        client: &dyn ApiClient,
        q: impl Into<String>,
    ) -> Result<(), ClientError> {
        if self.set_search(q) {
            self.load(client, None).await
        } else {
            Ok(())
        }
    }

    /// Insert a freshly created record unless its id is already present
    pub fn handle_created(&mut self, item: T, position: InsertPosition) -> bool {
        if self.index_of(item.id()).is_some() {
            return false;
        }
        match position {
            InsertPosition::Front => self.items.insert(0, item),
            InsertPosition::Back => self.items.push(item),
        }
        true
    }

    /// Merge an updated record's fields into the matching entry in
    /// place, keeping its position
    pub fn handle_updated(&mut self, item: &T) -> bool {
        self.apply_patch(item.id(), &item.to_fields())
    }

    /// Field-by-field merge of a partial patch into the entry with `id`
    pub fn apply_patch(&mut self, id: &str, patch: &FieldMap) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        match self.items[index].merged_with(patch) {
            Some(merged) => {
                self.items[index] = merged;
                true
            }
            None => {
                tracing::warn!(resource = T::RESOURCE, id, "patch does not fit the record");
                false
            }
        }
    }

    /// Drop the matching entry and decrement `total`; no-op when absent
    pub fn handle_deleted(&mut self, item: &T) -> bool {
        let Some(index) = self.index_of(item.id()) else {
            return false;
        };
        self.items.remove(index);
        self.meta.total = self.meta.total.saturating_sub(1);
        true
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|el| el.id() == id)
    }
}
