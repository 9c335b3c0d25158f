use super::*;

/// Tests listing an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_when_no_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let articles = ArticleRepository::new(db).find_all().await?;

    assert!(articles.is_empty());

    Ok(())
}

/// Tests listing articles.
///
/// Verifies that every stored article is returned in ID order.
///
/// Expected: Ok with articles ordered by ascending ID
#[tokio::test]
async fn returns_all_articles_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_article(db).await?;
    let second = factory::create_article(db).await?;
    let third = factory::create_article(db).await?;

    let articles = ArticleRepository::new(db).find_all().await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
