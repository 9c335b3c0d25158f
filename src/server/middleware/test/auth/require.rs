use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the user is authenticated,
/// exists in the database, and has admin privileges.
///
/// Expected: Ok(User) with admin=true and both roles
#[tokio::test]
async fn grants_admin_permission_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("admin@ucsb.edu")
        .name("AdminUser")
        .admin(true)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let returned_user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.email, "admin@ucsb.edu");
    assert!(returned_user.admin);
    assert_eq!(returned_user.roles(), vec![Role::User, Role::Admin]);

    Ok(())
}

/// Tests admin user also passes the user permission check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_user_permission_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::User])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests regular user passes the user permission check.
///
/// Expected: Ok(User) holding only `Role::User`
#[tokio::test]
async fn grants_user_permission_to_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned_user = AuthGuard::new(db, session)
        .require(&[Permission::User])
        .await?;

    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.roles(), vec![Role::User]);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Verifies that the AuthGuard denies access when the user is authenticated,
/// exists in the database, but lacks admin privileges.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, message)) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("ROLE_ADMIN"));
        }
        e => panic!("Expected AccessDenied, got: {:?}", e),
    }

    Ok(())
}

/// Tests a caller with no user in the session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::User])
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInSession) => {}
        e => panic!("Expected UserNotInSession, got: {:?}", e),
    }

    Ok(())
}

/// Tests a session that references a user missing from the database.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale ID
#[tokio::test]
async fn denies_access_for_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::User])
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => assert_eq!(user_id, 404),
        e => panic!("Expected UserNotInDatabase, got: {:?}", e),
    }

    Ok(())
}
