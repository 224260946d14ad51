//! Entity records and their controller presets
//!
//! Every module here is thin configuration over the three generic
//! controllers: a serde record type, a field schema with validation
//! rules, and constructors wiring schema, policy and static query
//! together the way the corresponding component is expected to behave.

pub mod oauth2_provider;
pub mod permission;
pub mod realm;
pub mod relations;
pub mod robot;
pub mod role;
pub mod user;

pub use oauth2_provider::OAuth2Provider;
pub use permission::Permission;
pub use realm::Realm;
pub use relations::{OAuth2ProviderRole, RobotPermission, RobotRole, RolePermission, UserRole};
pub use robot::Robot;
pub use role::Role;
pub use user::User;
