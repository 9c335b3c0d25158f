use super::*;

/// Tests listing an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_when_no_help_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::HelpRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requests = HelpRequestRepository::new(db).find_all().await?;

    assert!(requests.is_empty());

    Ok(())
}

/// Tests listing help requests.
///
/// Expected: Ok with every stored request in insertion order
#[tokio::test]
async fn returns_all_help_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::HelpRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::help_request::HelpRequestFactory::new(db)
        .code("portola")
        .build()
        .await?;
    factory::help_request::HelpRequestFactory::new(db)
        .code("dlg")
        .build()
        .await?;

    let requests = HelpRequestRepository::new(db).find_all().await?;

    let codes: Vec<&str> = requests.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["portola", "dlg"]);

    Ok(())
}

/// Tests finding a help request by code.
///
/// Expected: Ok(Some) for a stored code, Ok(None) for an unknown one
#[tokio::test]
async fn finds_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::HelpRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::help_request::HelpRequestFactory::new(db)
        .code("ortega")
        .name("Ortega")
        .coordinates(34.41, -119.84)
        .build()
        .await?;

    let repo = HelpRequestRepository::new(db);

    let found = repo.find_by_code("ortega").await?.expect("request should exist");
    assert_eq!(found.name, "Ortega");
    assert_eq!(found.latitude, 34.41);
    assert_eq!(found.longitude, -119.84);

    assert!(repo.find_by_code("missing").await?.is_none());

    Ok(())
}

/// Tests that overwriting an existing code keeps its place in the listing.
///
/// Expected: Ok with `portola` still first after it is upserted again
#[tokio::test]
async fn upsert_keeps_listing_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::HelpRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = HelpRequestRepository::new(db);

    for code in ["portola", "dlg"] {
        repo.upsert(UpsertHelpRequestParams {
            code: code.to_string(),
            fields: fields("Original"),
        })
        .await?;
    }
    repo.upsert(UpsertHelpRequestParams {
        code: "portola".to_string(),
        fields: fields("Renamed"),
    })
    .await?;

    let requests = repo.find_all().await?;

    let codes: Vec<&str> = requests.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["portola", "dlg"]);
    assert_eq!(requests[0].name, "Renamed");

    Ok(())
}
