//! User role vocabulary.
//!
//! Roles are stored as plain strings on the user row; these constants are
//! the only legal values.

pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_MANAGER: &str = "Manager";
pub const ROLE_EMPLOYEE: &str = "Employee";

/// All known roles, useful for validation messages.
pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MANAGER, ROLE_EMPLOYEE];

/// Whether `role` is one of the known role names.
pub fn is_valid_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}
