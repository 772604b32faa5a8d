//! Pool-level helpers: health check and schema presence.

use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn health_check_succeeds(pool: PgPool) {
    folio_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn migrated_schema_has_all_tables(pool: PgPool) {
    let missing = folio_db::missing_tables(&pool).await.unwrap();
    assert!(missing.is_empty(), "missing tables: {missing:?}");
}

#[sqlx::test(migrations = false)]
async fn empty_schema_reports_every_table(pool: PgPool) {
    let missing = folio_db::missing_tables(&pool).await.unwrap();
    assert_eq!(missing, vec!["media", "page_content", "portfolio"]);
}
