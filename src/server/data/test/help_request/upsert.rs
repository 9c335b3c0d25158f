use super::*;

/// Tests creating a help request under a new code.
///
/// Expected: Ok with the supplied code and fields
#[tokio::test]
async fn creates_new_help_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::HelpRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = HelpRequestRepository::new(db)
        .upsert(UpsertHelpRequestParams {
            code: "ortega".to_string(),
            fields: fields("Ortega"),
        })
        .await?;

    assert_eq!(created.code, "ortega");
    assert_eq!(created.name, "Ortega");
    assert!(created.has_sack_meal);
    assert!(!created.has_take_out_meal);
    assert!(created.has_dining_cam);
    assert_eq!(created.latitude, 34.4119);
    assert_eq!(created.longitude, -119.8489);

    Ok(())
}

/// Tests creating a help request under a code that already exists.
///
/// Verifies that the second write overwrites the first and no duplicate row appears.
///
/// Expected: Ok with the second values, one row in the table
#[tokio::test]
async fn overwrites_existing_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::HelpRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::help_request::HelpRequestFactory::new(db)
        .code("carrillo")
        .name("Old Name")
        .build()
        .await?;

    let repo = HelpRequestRepository::new(db);
    let stored = repo
        .upsert(UpsertHelpRequestParams {
            code: "carrillo".to_string(),
            fields: fields("New Name"),
        })
        .await?;

    assert_eq!(stored.name, "New Name");
    assert_eq!(entity::prelude::HelpRequest::find().count(db).await?, 1);
    assert_eq!(repo.find_by_code("carrillo").await?.unwrap(), stored);

    Ok(())
}
