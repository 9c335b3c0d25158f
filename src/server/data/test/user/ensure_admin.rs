use super::*;

/// Tests granting admin to an address with no user yet.
///
/// Expected: Ok with a new admin user named after the address
#[tokio::test]
async fn creates_admin_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .ensure_admin("admin@ucsb.edu")
        .await?;

    assert_eq!(user.email, "admin@ucsb.edu");
    assert_eq!(user.name, "admin@ucsb.edu");
    assert!(user.admin);

    Ok(())
}

/// Tests granting admin to an existing regular user.
///
/// Verifies that the existing row is promoted in place and keeps its name.
///
/// Expected: Ok with the same ID, admin=true, one row in the table
#[tokio::test]
async fn promotes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .email("phtcon@ucsb.edu")
        .name("Phill Conrad")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .ensure_admin("phtcon@ucsb.edu")
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.name, "Phill Conrad");
    assert!(user.admin);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests seeding the same admin twice.
///
/// Expected: Ok both times with one row
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.ensure_admin("admin@ucsb.edu").await?;
    let second = repo.ensure_admin("admin@ucsb.edu").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
