use super::*;

/// Tests replacing an organization's fields.
///
/// Expected: Ok(Some) with new fields under the same code
#[tokio::test]
async fn replaces_fields_and_keeps_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UcsbOrganization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ucsb_organization::OrganizationFactory::new(db)
        .org_code("osli")
        .build()
        .await?;

    let updated = OrganizationRepository::new(db)
        .update(
            "osli",
            OrganizationFields {
                org_translation_short: "STUDENT LIFE".to_string(),
                org_translation: "OFFICE OF STUDENT LIFE".to_string(),
                inactive: true,
            },
        )
        .await?
        .expect("organization should exist");

    assert_eq!(updated.org_code, "osli");
    assert_eq!(updated.org_translation_short, "STUDENT LIFE");
    assert_eq!(updated.org_translation, "OFFICE OF STUDENT LIFE");
    assert!(updated.inactive);

    Ok(())
}

/// Tests updating an organization that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UcsbOrganization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrganizationRepository::new(db)
        .update(
            "cdt",
            OrganizationFields {
                org_translation_short: "x".to_string(),
                org_translation: "y".to_string(),
                inactive: false,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
