mod utils;

use std::sync::Arc;

use aniscope::modules::detail::application::DetailView;
use aniscope::modules::detail::domain::RelatedEntry;
use aniscope::modules::detail::infrastructure::jikan::{JikanRelationEntry, JikanRelationGroup};
use aniscope::shared::errors::AppError;

use utils::{detail, MockCatalog, MockRelations};

fn jikan_entry(mal_id: i64, entry_type: &str, name: &str) -> JikanRelationEntry {
    JikanRelationEntry {
        mal_id,
        entry_type: entry_type.to_string(),
        name: name.to_string(),
        url: format!("https://myanimelist.net/anime/{}", mal_id),
    }
}

#[tokio::test]
async fn load_resolves_relations_against_the_catalog() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_anime()
        .withf(|id| *id == 1)
        .times(1)
        .returning(|id| Ok(detail(id, Some(100), "Fullmetal Alchemist")));
    catalog
        .expect_get_anime_by_mal_id()
        .withf(|mal_id| *mal_id == 30)
        .times(1)
        .returning(|_| Ok(Some(detail(2, Some(30), "FMA: Brotherhood"))));
    catalog
        .expect_get_anime_by_mal_id()
        .withf(|mal_id| *mal_id == 31)
        .times(1)
        .returning(|_| Ok(None));

    let mut relations = MockRelations::new();
    relations
        .expect_anime_relations()
        .withf(|mal_id| *mal_id == 100)
        .times(1)
        .returning(|_| {
            Ok(vec![
                JikanRelationGroup {
                    relation: "Sequel".to_string(),
                    entry: vec![
                        jikan_entry(30, "anime", "FMA: Brotherhood"),
                        jikan_entry(31, "anime", "Obscure Sequel"),
                    ],
                },
                JikanRelationGroup {
                    relation: "Adaptation".to_string(),
                    entry: vec![jikan_entry(40, "manga", "The Manga")],
                },
            ])
        });

    let mut view = DetailView::new(Arc::new(catalog), Arc::new(relations));
    view.load(1).await;

    assert!(view.detail().as_success().is_some());
    let groups = view.related().as_success().unwrap();

    // The manga-only group is dropped entirely.
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].relation, "Sequel");
    assert_eq!(groups[0].entries.len(), 2);
    assert!(groups[0].entries[0].in_database());
    match &groups[0].entries[1] {
        RelatedEntry::External { mal_id, title, mal_url } => {
            assert_eq!(*mal_id, 31);
            assert_eq!(title, "Obscure Sequel");
            assert_eq!(mal_url, "https://myanimelist.net/anime/31");
        }
        other => panic!("expected an external stub, got {:?}", other),
    }
}

#[tokio::test]
async fn catalog_lookup_failure_falls_back_to_a_stub() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_anime()
        .returning(|id| Ok(detail(id, Some(100), "Some Show")));
    catalog
        .expect_get_anime_by_mal_id()
        .returning(|_| Err(AppError::ApiError("backend hiccup".to_string())));

    let mut relations = MockRelations::new();
    relations.expect_anime_relations().returning(|_| {
        Ok(vec![JikanRelationGroup {
            relation: "Side Story".to_string(),
            entry: vec![jikan_entry(55, "anime", "The Side Story")],
        }])
    });

    let mut view = DetailView::new(Arc::new(catalog), Arc::new(relations));
    view.load(7).await;

    let groups = view.related().as_success().unwrap();
    assert!(!groups[0].entries[0].in_database());
    assert_eq!(groups[0].entries[0].title(), "The Side Story");
}

#[tokio::test]
async fn missing_anime_shows_not_found() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_anime()
        .returning(|_| Err(AppError::NotFound("no such anime".to_string())));

    let mut view = DetailView::new(Arc::new(catalog), Arc::new(MockRelations::new()));
    view.load(999).await;

    assert_eq!(view.detail().error_message(), Some("Anime not found"));
    assert!(view.related().is_idle());
}

#[tokio::test]
async fn other_failures_show_the_generic_detail_error() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_anime()
        .returning(|_| Err(AppError::ApiError("500".to_string())));

    let mut view = DetailView::new(Arc::new(catalog), Arc::new(MockRelations::new()));
    view.load(1).await;

    assert_eq!(
        view.detail().error_message(),
        Some("Failed to load anime details")
    );
}

#[tokio::test]
async fn relations_failure_keeps_the_detail_intact() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_anime()
        .returning(|id| Ok(detail(id, Some(100), "Some Show")));

    let mut relations = MockRelations::new();
    relations
        .expect_anime_relations()
        .returning(|_| Err(AppError::ExternalServiceError("jikan 429".to_string())));

    let mut view = DetailView::new(Arc::new(catalog), Arc::new(relations));
    view.load(1).await;

    assert!(view.detail().as_success().is_some());
    assert_eq!(
        view.related().error_message(),
        Some("Failed to load related works. Please try again later.")
    );
}

#[tokio::test]
async fn titles_without_a_mal_id_skip_relations() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_anime()
        .returning(|id| Ok(detail(id, None, "Unlinked Show")));

    // MockRelations has no expectations; any call would panic.
    let mut view = DetailView::new(Arc::new(catalog), Arc::new(MockRelations::new()));
    view.load(1).await;

    assert!(view.detail().as_success().is_some());
    assert!(view.related().is_idle());
}
