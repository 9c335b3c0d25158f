use super::*;

/// Tests deleting an organization.
///
/// Expected: Ok(true) and the row is gone, Ok(false) for an unknown code
#[tokio::test]
async fn deletes_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UcsbOrganization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ucsb_organization::OrganizationFactory::new(db)
        .org_code("zpr")
        .build()
        .await?;

    let repo = OrganizationRepository::new(db);

    assert!(repo.delete("zpr").await?);
    assert!(repo.find_by_code("zpr").await?.is_none());
    assert!(!repo.delete("cdt").await?);

    Ok(())
}
