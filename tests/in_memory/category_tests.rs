//! In-memory integration tests for categories.

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;
use taskboard::category::{
    adapters::memory::InMemoryCategoryRepository,
    services::{CategoryService, CategoryServiceError, CreateCategoryRequest},
};

type TestService = CategoryService<InMemoryCategoryRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    CategoryService::new(
        Arc::new(InMemoryCategoryRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn category_round_trip_by_name(service: TestService) -> eyre::Result<()> {
    let created = service
        .create(
            CreateCategoryRequest::new("Household")
                .with_color("#22c55e")
                .with_icon("home"),
        )
        .await?;

    let found = service.find_by_name("Household").await?;

    eyre::ensure!(found.as_ref() == Some(&created), "lookup by name");
    eyre::ensure!(created.color().as_str() == "#22C55E", "colour normalized");
    eyre::ensure!(
        created.icon().map(|icon| icon.as_str()) == Some("home"),
        "icon stored"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn category_names_are_unique(service: TestService) {
    service
        .create(CreateCategoryRequest::new("Work"))
        .await
        .expect("first category should be created");

    let duplicate = service.create(CreateCategoryRequest::new("Work")).await;

    assert!(matches!(duplicate, Err(CategoryServiceError::DuplicateName(_))));
    assert_eq!(service.list().await.expect("listing should succeed").len(), 1);
}
