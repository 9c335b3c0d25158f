use super::*;

/// Tests listing users.
///
/// Expected: Ok with all users ordered by ID
#[tokio::test]
async fn returns_all_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::user::create_admin(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, first.id);
    assert_eq!(users[1].id, second.id);
    assert!(users[1].admin);

    Ok(())
}
