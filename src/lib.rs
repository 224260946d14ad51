//! access-kit - typed CRUD controllers for an identity & access
//! management API
//!
//! Three generic controllers compose the whole crate, and every entity
//! or relation component is a thin configuration instance of one of
//! them:
//!
//! - [`ListController`]: a paginated, searchable page of records with
//!   local create/update/delete synchronization
//! - [`FormController`]: a single-record create/edit form with
//!   declarative validation and dirty-field diffing
//! - [`AssignmentListController`]: a list of one entity type whose item
//!   actions add/remove a relation row for a fixed owner entity
//!
//! Controllers hold plain state and are driven explicitly; rendering is
//! the caller's concern. Network access goes through an injected
//! [`ApiClient`] - pass `&HttpApiClient` (or any other implementation)
//! into `load`/`submit`/`assign`.
//!
//! ```no_run
//! use access_kit::entities::{Role, User};
//! use access_kit::{FormEvent, HttpApiClient, InsertPosition};
//!
//! # async fn demo() -> Result<(), access_kit::ClientError> {
//! let client = HttpApiClient::new("http://localhost:3010");
//!
//! // a role list next to a role form
//! let mut roles = Role::list();
//! roles.load(&client, None).await?;
//!
//! let mut form = Role::form(None);
//! form.set("name", "admin");
//! if let Some(FormEvent::Created(role)) = form.submit(&client).await {
//!     // route the event into the sibling list instead of reloading
//!     roles.handle_created(role, InsertPosition::Back);
//! }
//!
//! // roles assignable to one user
//! let mut assignable = access_kit::entities::UserRole::for_user("u-1");
//! assignable.load(&client, None).await?;
//! # let _ = User::form(None);
//! # Ok(())
//! # }
//! ```

pub mod assignment;
pub mod client;
pub mod entities;
pub mod error;
pub mod form;
pub mod list;
pub mod pagination;
pub mod query;
pub mod record;
pub mod translation;
pub mod validation;

pub use assignment::{AssignmentListController, ForeignKeyPair, RelationSchema};
pub use client::{
    default_client, set_default_client, try_default_client, ApiClient, HttpApiClient, PageMeta,
    ResourcePage,
};
pub use error::ClientError;
pub use form::{FieldSpec, FormController, FormEvent, FormSchema, SubmitPolicy};
pub use list::{InsertPosition, ListController, SearchPolicy};
pub use pagination::{PageRequest, PaginationMeta};
pub use query::{substring_filter, PageQuery, Query};
pub use record::{FieldMap, Record};
pub use translation::Translator;
pub use validation::{FieldViolation, Rule, ValidationReport, Violation};
