//! Many-to-many relation rows and their assignment lists
//!
//! Five relation tables back the nine assignment lists: each table can
//! be viewed from either side, with the fixed entity as owner and the
//! other side as the listed items. `for_*` constructors pick the
//! orientation and wire in the listed entity's list preset.

use crate::assignment::{AssignmentListController, RelationSchema};
use crate::record::impl_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{OAuth2Provider, Permission, Robot, Role, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(UserRole, "user_role");

impl UserRole {
    /// Roles assignable to one user
    pub fn for_user(user_id: impl Into<String>) -> AssignmentListController<Role, UserRole> {
        AssignmentListController::new(
            RelationSchema {
                owner_key: "user_id",
                item_key: "role_id",
            },
            user_id,
        )
        .with_list(Role::list())
    }

    /// Users assignable to one role
    pub fn for_role(role_id: impl Into<String>) -> AssignmentListController<User, UserRole> {
        AssignmentListController::new(
            RelationSchema {
                owner_key: "role_id",
                item_key: "user_id",
            },
            role_id,
        )
        .with_list(User::list())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePermission {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub permission_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(RolePermission, "role_permission");

impl RolePermission {
    /// Permissions assignable to one role
    pub fn for_role(
        role_id: impl Into<String>,
    ) -> AssignmentListController<Permission, RolePermission> {
        AssignmentListController::new(
            RelationSchema {
                owner_key: "role_id",
                item_key: "permission_id",
            },
            role_id,
        )
        .with_list(Permission::list())
    }

    /// Roles assignable to one permission
    pub fn for_permission(
        permission_id: impl Into<String>,
    ) -> AssignmentListController<Role, RolePermission> {
        AssignmentListController::new(
            RelationSchema {
                owner_key: "permission_id",
                item_key: "role_id",
            },
            permission_id,
        )
        .with_list(Role::list())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotRole {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub robot_id: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(RobotRole, "robot_role");

impl RobotRole {
    /// Roles assignable to one robot
    pub fn for_robot(robot_id: impl Into<String>) -> AssignmentListController<Role, RobotRole> {
        AssignmentListController::new(
            RelationSchema {
                owner_key: "robot_id",
                item_key: "role_id",
            },
            robot_id,
        )
        .with_list(Role::list())
    }

    /// Robots assignable to one role
    pub fn for_role(role_id: impl Into<String>) -> AssignmentListController<Robot, RobotRole> {
        AssignmentListController::new(
            RelationSchema {
                owner_key: "role_id",
                item_key: "robot_id",
            },
            role_id,
        )
        .with_list(Robot::list())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotPermission {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub robot_id: String,
    #[serde(default)]
    pub permission_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(RobotPermission, "robot_permission");

impl RobotPermission {
    /// Permissions assignable to one robot
    pub fn for_robot(
        robot_id: impl Into<String>,
    ) -> AssignmentListController<Permission, RobotPermission> {
        AssignmentListController::new(
            RelationSchema {
                owner_key: "robot_id",
                item_key: "permission_id",
            },
            robot_id,
        )
        .with_list(Permission::list())
    }

    /// Robots assignable to one permission
    pub fn for_permission(
        permission_id: impl Into<String>,
    ) -> AssignmentListController<Robot, RobotPermission> {
        AssignmentListController::new(
            RelationSchema {
                owner_key: "permission_id",
                item_key: "robot_id",
            },
            permission_id,
        )
        .with_list(Robot::list())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuth2ProviderRole {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(OAuth2ProviderRole, "oauth2_provider_role");

impl OAuth2ProviderRole {
    /// Roles assignable to one OAuth2 provider
    pub fn for_provider(
        provider_id: impl Into<String>,
    ) -> AssignmentListController<Role, OAuth2ProviderRole> {
        AssignmentListController::new(
            RelationSchema {
                owner_key: "provider_id",
                item_key: "role_id",
            },
            provider_id,
        )
        .with_list(Role::list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientations_cover_all_nine_lists() {
        assert_eq!(UserRole::for_user("u").relation().item_key, "role_id");
        assert_eq!(UserRole::for_role("r").relation().item_key, "user_id");
        assert_eq!(RolePermission::for_role("r").relation().item_key, "permission_id");
        assert_eq!(
            RolePermission::for_permission("p").relation().item_key,
            "role_id"
        );
        assert_eq!(RobotRole::for_robot("b").relation().item_key, "role_id");
        assert_eq!(RobotRole::for_role("r").relation().item_key, "robot_id");
        assert_eq!(
            RobotPermission::for_robot("b").relation().item_key,
            "permission_id"
        );
        assert_eq!(
            RobotPermission::for_permission("p").relation().item_key,
            "robot_id"
        );
        assert_eq!(
            OAuth2ProviderRole::for_provider("o").relation().item_key,
            "role_id"
        );
    }
}
