//! Category repository tests against `PostgreSQL`.

use super::helpers::{BoxError, test_database};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::category::{
    adapters::postgres::PostgresCategoryRepository,
    domain::{Category, CategoryColor, CategoryName},
    ports::{CategoryRepository, CategoryRepositoryError},
};

fn category(name: &str) -> Result<Category, BoxError> {
    Ok(Category::new(
        CategoryName::new(name)?,
        CategoryColor::default(),
        None,
        &DefaultClock,
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_category_is_found_by_name() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresCategoryRepository::new(db.pool.clone());
    let work = category("Work")?;
    repo.store(&work).await?;

    let name = CategoryName::new("Work")?;
    let found = repo.find_by_name(&name).await?;

    assert_eq!(found.as_ref().map(Category::id), Some(work.id()));
    assert!(repo.exists_by_name(&name).await?);
    assert!(!repo.exists_by_name(&CategoryName::new("Home")?).await?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_name_is_rejected_by_unique_index() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresCategoryRepository::new(db.pool.clone());
    repo.store(&category("Errands")?).await?;

    let result = repo.store(&category("Errands")?).await;

    assert!(matches!(result, Err(CategoryRepositoryError::DuplicateName(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn categories_list_in_name_order() -> Result<(), BoxError> {
    let Some(db) = test_database()? else {
        return Ok(());
    };
    let repo = PostgresCategoryRepository::new(db.pool.clone());
    for name in ["Work", "Health", "Money"] {
        repo.store(&category(name)?).await?;
    }

    let listed = repo.list_ordered_by_name().await?;
    let names: Vec<&str> = listed.iter().map(|c| c.name().as_str()).collect();

    assert_eq!(names, vec!["Health", "Money", "Work"]);
    Ok(())
}
