//! Repository tests for the `portfolio` table against a real database.

use folio_db::models::portfolio::{CreatePortfolioItem, PortfolioFilter, UpdatePortfolioItem};
use folio_db::repositories::PortfolioRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(title: &str, category: &str) -> CreatePortfolioItem {
    CreatePortfolioItem {
        title: title.to_string(),
        description: None,
        category: category.to_string(),
        image_url: format!("/images/{title}.jpg"),
        video_url: None,
        tags: Vec::new(),
        date: None,
        featured: None,
        status: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_applies_defaults(pool: PgPool) {
    let item = PortfolioRepo::create(&pool, &new_item("Portrait Series", "personal"))
        .await
        .unwrap();

    assert_eq!(item.title, "Portrait Series");
    assert_eq!(item.status, "draft");
    assert!(!item.featured);
    assert!(item.tags.is_empty());
    // CURRENT_DATE follows the server time zone, so allow a day either way.
    let today = chrono::Utc::now().date_naive();
    assert!((item.date - today).num_days().abs() <= 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn invalid_category_violates_check_constraint(pool: PgPool) {
    let err = PortfolioRepo::create(&pool, &new_item("Bad", "weddings"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "./migrations")]
async fn update_only_touches_given_fields(pool: PgPool) {
    let mut input = new_item("Brand Campaign", "commercial");
    input.description = Some("Launch video".into());
    input.tags = vec!["corporate".into()];
    let created = PortfolioRepo::create(&pool, &input).await.unwrap();

    let updated = PortfolioRepo::update(
        &pool,
        created.id,
        &UpdatePortfolioItem {
            status: Some("published".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("row exists");

    assert_eq!(updated.status, "published");
    assert_eq!(updated.title, "Brand Campaign");
    assert_eq!(updated.description.as_deref(), Some("Launch video"));
    assert_eq!(updated.tags, vec!["corporate"]);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_blank_description_clears_it(pool: PgPool) {
    let mut input = new_item("Street", "personal");
    input.description = Some("Night walk".into());
    input.video_url = Some("/videos/street.mp4".into());
    let created = PortfolioRepo::create(&pool, &input).await.unwrap();

    let updated = PortfolioRepo::update(
        &pool,
        created.id,
        &UpdatePortfolioItem {
            description: Some("  ".into()),
            video_url: Some(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.description, None);
    assert_eq!(updated.video_url, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_row_returns_none(pool: PgPool) {
    let result = PortfolioRepo::update(&pool, 999_999, &UpdatePortfolioItem::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_filters_by_category_status_and_search(pool: PgPool) {
    let mut wedding = new_item("Wedding - Sarah & Mike", "events");
    wedding.status = Some("published".into());
    wedding.tags = vec!["ceremony".into()];
    PortfolioRepo::create(&pool, &wedding).await.unwrap();

    let mut gala = new_item("Charity Gala", "events");
    gala.description = Some("Evening WEDDING-style reception".into());
    PortfolioRepo::create(&pool, &gala).await.unwrap();

    PortfolioRepo::create(&pool, &new_item("Tech Launch", "commercial"))
        .await
        .unwrap();

    let events = PortfolioRepo::list(
        &pool,
        &PortfolioFilter {
            category: Some("events".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(events.len(), 2);
    // Newest first.
    assert_eq!(events[0].title, "Charity Gala");

    let published = PortfolioRepo::list(
        &pool,
        &PortfolioFilter {
            category: Some("events".into()),
            status: Some("published".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(published.len(), 1);

    let search = PortfolioRepo::list(
        &pool,
        &PortfolioFilter {
            search: Some("wedding".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(search.len(), 2);

    let by_tag = PortfolioRepo::list(
        &pool,
        &PortfolioFilter {
            search: Some("ceremony".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].title, "Wedding - Sarah & Mike");

    let all = PortfolioRepo::list(&pool, &PortfolioFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn search_treats_wildcards_literally(pool: PgPool) {
    PortfolioRepo::create(&pool, &new_item("100% Real", "personal"))
        .await
        .unwrap();
    PortfolioRepo::create(&pool, &new_item("1000 Frames", "personal"))
        .await
        .unwrap();

    let hits = PortfolioRepo::list(
        &pool,
        &PortfolioFilter {
            search: Some("100%".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "100% Real");
}

#[sqlx::test(migrations = "./migrations")]
async fn featured_requires_published_and_is_capped(pool: PgPool) {
    for i in 0..8 {
        let mut item = new_item(&format!("Featured {i}"), "personal");
        item.featured = Some(true);
        item.status = Some("published".into());
        PortfolioRepo::create(&pool, &item).await.unwrap();
    }
    let mut draft = new_item("Featured draft", "personal");
    draft.featured = Some(true);
    PortfolioRepo::create(&pool, &draft).await.unwrap();

    let featured = PortfolioRepo::list_featured(&pool, 6).await.unwrap();
    assert_eq!(featured.len(), 6);
    assert!(featured.iter().all(|i| i.status == "published" && i.featured));
    assert_eq!(featured[0].title, "Featured 7");
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_and_stats(pool: PgPool) {
    let a = PortfolioRepo::create(&pool, &new_item("A", "personal")).await.unwrap();
    PortfolioRepo::create(&pool, &new_item("B", "events")).await.unwrap();

    let pairs = PortfolioRepo::category_status_pairs(&pool).await.unwrap();
    assert_eq!(pairs.len(), 2);

    assert!(PortfolioRepo::delete(&pool, a.id).await.unwrap());
    assert!(!PortfolioRepo::delete(&pool, a.id).await.unwrap());
    assert!(PortfolioRepo::find_by_id(&pool, a.id).await.unwrap().is_none());

    let recent = PortfolioRepo::list_recent(&pool, 5).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].title, "B");
}
