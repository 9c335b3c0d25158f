use super::*;

/// Tests replacing an article's fields.
///
/// Verifies that every non-key field is overwritten and the ID is preserved.
///
/// Expected: Ok(Some) with new fields and the original ID
#[tokio::test]
async fn replaces_all_fields_and_keeps_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_article(db).await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update(
            created.id,
            ArticleParams {
                title: "Edited".to_string(),
                url: "https://example.com/edited".to_string(),
                explanation: "Edited explanation".to_string(),
                email: "editor@example.com".to_string(),
                date_added: date(2023, 6, 15),
            },
        )
        .await?
        .expect("article should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Edited");
    assert_eq!(updated.url, "https://example.com/edited");
    assert_eq!(updated.explanation, "Edited explanation");
    assert_eq!(updated.email, "editor@example.com");
    assert_eq!(updated.date_added, date(2023, 6, 15));

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating an article that does not exist.
///
/// Expected: Ok(None) and no row inserted
#[tokio::test]
async fn returns_none_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Articles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleRepository::new(db)
        .update(42, params("Ghost"))
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Articles::find().count(db).await?, 0);

    Ok(())
}
