use super::*;

/// Tests creating an organization under a new code.
///
/// Expected: Ok with the supplied code and fields
#[tokio::test]
async fn creates_new_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UcsbOrganization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = OrganizationRepository::new(db)
        .upsert(UpsertOrganizationParams {
            org_code: "zpr".to_string(),
            fields: OrganizationFields {
                org_translation_short: "ZETA PHI RHO".to_string(),
                org_translation: "ZETA PHI RHO".to_string(),
                inactive: false,
            },
        })
        .await?;

    assert_eq!(created.org_code, "zpr");
    assert_eq!(created.org_translation_short, "ZETA PHI RHO");
    assert_eq!(created.org_translation, "ZETA PHI RHO");
    assert!(!created.inactive);

    Ok(())
}

/// Tests creating an organization under a code that already exists.
///
/// Verifies that the second write wins and only one row remains.
///
/// Expected: Ok with the second values, one row in the table
#[tokio::test]
async fn overwrites_existing_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UcsbOrganization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ucsb_organization::OrganizationFactory::new(db)
        .org_code("sky")
        .org_translation_short("SKYDIVING CLUB")
        .build()
        .await?;

    let stored = OrganizationRepository::new(db)
        .upsert(UpsertOrganizationParams {
            org_code: "sky".to_string(),
            fields: OrganizationFields {
                org_translation_short: "SKY CLUB".to_string(),
                org_translation: "SKYDIVING CLUB AT UCSB".to_string(),
                inactive: true,
            },
        })
        .await?;

    assert_eq!(stored.org_translation_short, "SKY CLUB");
    assert_eq!(stored.org_translation, "SKYDIVING CLUB AT UCSB");
    assert!(stored.inactive);
    assert_eq!(
        entity::prelude::UcsbOrganization::find().count(db).await?,
        1
    );

    Ok(())
}
