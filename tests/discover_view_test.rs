mod utils;

use std::sync::Arc;

use aniscope::modules::catalog::domain::entities::{CuratedCategory, GenreOption, StudioOption};
use aniscope::modules::discover::application::DiscoverView;
use aniscope::modules::discover::domain::{DiscoverSelection, MainCategory, SubCategory};
use aniscope::shared::errors::AppError;

use utils::{page, MockCatalog};

#[tokio::test]
async fn mount_shows_the_popular_bucket() {
    let mut mock = MockCatalog::new();
    mock.expect_curated()
        .withf(|category, limit, offset| {
            *category == CuratedCategory::Popular && *limit == 20 && *offset == 0
        })
        .times(1)
        .returning(|_, limit, offset| Ok(page(60, limit, offset, 20)));

    let mut view = DiscoverView::new(Arc::new(mock));
    view.mount().await;

    assert_eq!(view.heading(), "Popular");
    assert_eq!(view.results().as_success().map(Vec::len), Some(20));
    assert_eq!(view.page().total(), 60);
}

#[tokio::test]
async fn quality_tab_defaults_to_its_first_subcategory() {
    let mut mock = MockCatalog::new();
    mock.expect_curated()
        .withf(|category, _, _| *category == CuratedCategory::Popular)
        .returning(|_, limit, offset| Ok(page(60, limit, offset, 20)));
    mock.expect_curated()
        .withf(|category, _, offset| *category == CuratedCategory::TopRated && *offset == 0)
        .times(1)
        .returning(|_, limit, offset| Ok(page(40, limit, offset, 20)));
    mock.expect_curated()
        .withf(|category, _, _| *category == CuratedCategory::HiddenGems)
        .times(1)
        .returning(|_, limit, offset| Ok(page(15, limit, offset, 15)));

    let mut view = DiscoverView::new(Arc::new(mock));
    view.mount().await;

    view.set_main(MainCategory::Quality).await;
    assert_eq!(view.sub_category(), Some(SubCategory::TopRated));
    assert_eq!(view.heading(), "Quality - Top Rated");

    view.set_sub(SubCategory::HiddenGems).await;
    assert_eq!(view.heading(), "Quality - Hidden Gems");

    // A subcategory belonging to another tab is ignored.
    view.set_sub(SubCategory::Latest).await;
    assert_eq!(view.sub_category(), Some(SubCategory::HiddenGems));
}

#[tokio::test]
async fn genre_tab_autoselects_the_first_option() {
    let mut mock = MockCatalog::new();
    mock.expect_genre_options()
        .times(1)
        .returning(|_| {
            Ok(vec![
                GenreOption {
                    id: 1,
                    name: "Action".to_string(),
                },
                GenreOption {
                    id: 2,
                    name: "Drama".to_string(),
                },
            ])
        });
    mock.expect_by_genre()
        .withf(|name, limit, offset| name == "Action" && *limit == 20 && *offset == 0)
        .times(1)
        .returning(|_, limit, offset| Ok(page(33, limit, offset, 20)));

    let mut view = DiscoverView::new(Arc::new(mock));
    view.set_main(MainCategory::Genre).await;

    assert_eq!(
        view.selection(),
        Some(DiscoverSelection::ByGenre("Action".to_string()))
    );
    assert_eq!(view.heading(), "Action Anime");
    assert_eq!(view.results().as_success().map(Vec::len), Some(20));
}

#[tokio::test]
async fn studio_tab_without_options_stays_idle() {
    let mut mock = MockCatalog::new();
    mock.expect_studio_options()
        .times(1)
        .returning(|_| Ok(Vec::<StudioOption>::new()));

    let mut view = DiscoverView::new(Arc::new(mock));
    view.set_main(MainCategory::Studio).await;

    assert_eq!(view.selection(), None);
    assert!(view.results().is_idle());
}

#[tokio::test]
async fn page_change_reports_whether_it_moved() {
    let mut mock = MockCatalog::new();
    mock.expect_curated()
        .returning(|_, limit, offset| Ok(page(100, limit, offset, 20)));

    let mut view = DiscoverView::new(Arc::new(mock));
    view.mount().await;

    assert!(view.go_to_page(3).await);
    assert_eq!(view.page().offset(), 40);

    assert!(!view.go_to_page(3).await);
    assert!(!view.go_to_page(99).await);
}

#[tokio::test]
async fn fetch_failure_surfaces_the_page_error() {
    let mut mock = MockCatalog::new();
    mock.expect_curated()
        .times(1)
        .returning(|_, _, _| Err(AppError::ApiError("down".to_string())));
    mock.expect_curated()
        .times(1)
        .returning(|_, limit, offset| Ok(page(60, limit, offset, 20)));

    let mut view = DiscoverView::new(Arc::new(mock));
    view.mount().await;

    assert_eq!(
        view.results().error_message(),
        Some("Failed to load recommendations.")
    );

    view.retry().await;
    assert!(view.results().as_success().is_some());
}
