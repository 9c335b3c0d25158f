use super::*;

/// Tests deleting an existing article.
///
/// Verifies that the row is removed and a later lookup finds nothing.
///
/// Expected: Ok(true), then find_by_id returns None
#[tokio::test]
async fn deletes_existing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_article(db).await?;
    let other = factory::create_article(db).await?;

    let repo = ArticleRepository::new(db);
    assert!(repo.delete(created.id).await?);

    assert!(repo.find_by_id(created.id).await?.is_none());
    assert!(repo.find_by_id(other.id).await?.is_some());

    Ok(())
}

/// Tests deleting an article that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ArticleRepository::new(db).delete(99).await?);

    Ok(())
}
