use super::*;

/// Tests the user permission against each role set.
///
/// Expected: granted whenever `Role::User` is held
#[test]
fn user_permission_requires_user_role() {
    assert!(Permission::User.is_granted(&[Role::User]));
    assert!(Permission::User.is_granted(&[Role::User, Role::Admin]));
    assert!(!Permission::User.is_granted(&[]));
}

/// Tests the admin permission against each role set.
///
/// Expected: granted only when `Role::Admin` is held
#[test]
fn admin_permission_requires_admin_role() {
    assert!(Permission::Admin.is_granted(&[Role::User, Role::Admin]));
    assert!(!Permission::Admin.is_granted(&[Role::User]));
    assert!(!Permission::Admin.is_granted(&[]));
}

/// Tests the wire names of the roles.
#[test]
fn roles_have_wire_names() {
    assert_eq!(Role::User.as_str(), "ROLE_USER");
    assert_eq!(Role::Admin.as_str(), "ROLE_ADMIN");
}
