use super::*;

/// Tests finding an existing article.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_existing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::articles::ArticleFactory::new(db)
        .title("Stored")
        .build()
        .await?;

    let found = ArticleRepository::new(db).find_by_id(created.id).await?;

    let article = found.expect("article should exist");
    assert_eq!(article.id, created.id);
    assert_eq!(article.title, "Stored");

    Ok(())
}

/// Tests finding an article that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = ArticleRepository::new(db).find_by_id(7).await?;

    assert!(found.is_none());

    Ok(())
}
