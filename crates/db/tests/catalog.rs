//! Integration tests for the catalog service against a real database.

use assert_matches::assert_matches;
use catalog_core::error::CoreError;
use catalog_db::{Catalog, CatalogError};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn catalog(pool: PgPool) -> Catalog {
    catalog_db::ensure_schema(&pool).await.unwrap();
    Catalog::new(pool)
}

fn names(projects: &[catalog_db::models::project::Project]) -> Vec<&str> {
    projects.iter().map(|p| p.project_name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_add_then_list_contains_exact_values(pool: PgPool) {
    let catalog = catalog(pool).await;
    let created = catalog
        .add("  Portfolio ", "Live at <a href=\"https://example.com\">example</a>")
        .await
        .unwrap();

    let all = catalog.list(None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].project_name, "  Portfolio ");
    assert_eq!(
        all[0].description,
        "Live at <a href=\"https://example.com\">example</a>"
    );
}

#[sqlx::test(migrations = false)]
async fn test_add_rejects_blank_fields(pool: PgPool) {
    let catalog = catalog(pool).await;

    assert_matches!(
        catalog.add("", "desc").await,
        Err(CatalogError::Core(CoreError::Validation(_)))
    );
    assert_matches!(
        catalog.add("Name", "  ").await,
        Err(CatalogError::Core(CoreError::Validation(_)))
    );

    assert!(catalog.list(None).await.unwrap().is_empty());
}

#[sqlx::test(migrations = false)]
async fn test_ids_increase(pool: PgPool) {
    let catalog = catalog(pool).await;
    let first = catalog.add("First", "one").await.unwrap();
    let second = catalog.add("Second", "two").await.unwrap();
    assert!(second.id > first.id);
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_list_is_newest_first(pool: PgPool) {
    let catalog = catalog(pool).await;
    catalog.add("Oldest", "a").await.unwrap();
    catalog.add("Middle", "b").await.unwrap();
    catalog.add("Newest", "c").await.unwrap();

    let all = catalog.list(None).await.unwrap();
    assert_eq!(names(&all), vec!["Newest", "Middle", "Oldest"]);
}

#[sqlx::test(migrations = false)]
async fn test_empty_keyword_lists_everything(pool: PgPool) {
    let catalog = catalog(pool).await;
    catalog.add("Alpha", "first").await.unwrap();
    catalog.add("Beta", "second").await.unwrap();

    assert_eq!(catalog.list(Some("")).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = false)]
async fn test_keyword_filters_name_or_description_case_insensitively(pool: PgPool) {
    let catalog = catalog(pool).await;
    catalog.add("PyTools", "Scripts").await.unwrap();
    catalog.add("Chatbot", "Built with PYTHON").await.unwrap();
    catalog.add("Website", "Rust and HTML").await.unwrap();

    let all = catalog.list(None).await.unwrap();
    let hits = catalog.list(Some("py")).await.unwrap();

    assert_eq!(names(&hits), vec!["Chatbot", "PyTools"]);
    for hit in &hits {
        assert!(all.iter().any(|p| p.id == hit.id));
        let haystack = format!("{} {}", hit.project_name, hit.description).to_lowercase();
        assert!(haystack.contains("py"));
    }
}

#[sqlx::test(migrations = false)]
async fn test_keyword_wildcards_are_not_escaped(pool: PgPool) {
    let catalog = catalog(pool).await;
    catalog.add("Sale", "50 percent off").await.unwrap();
    catalog.add("Other", "nothing here").await.unwrap();

    // `%` matches any run of characters, `_` any single character.
    let hits = catalog.list(Some("50%off")).await.unwrap();
    assert_eq!(names(&hits), vec!["Sale"]);

    let hits = catalog.list(Some("n_thing")).await.unwrap();
    assert_eq!(names(&hits), vec!["Other"]);
}

#[sqlx::test(migrations = false)]
async fn test_no_match_returns_empty(pool: PgPool) {
    let catalog = catalog(pool).await;
    catalog.add("Alpha", "first").await.unwrap();
    assert!(catalog.list(Some("zzz")).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_update_keeps_date_added(pool: PgPool) {
    let catalog = catalog(pool).await;
    let created = catalog.add("Draft", "v1").await.unwrap();

    catalog.update(created.id, "Final", "v2").await.unwrap();

    let all = catalog.list(None).await.unwrap();
    let updated = all.iter().find(|p| p.id == created.id).unwrap();
    assert_eq!(updated.project_name, "Final");
    assert_eq!(updated.description, "v2");
    assert_eq!(updated.date_added, created.date_added);
}

#[sqlx::test(migrations = false)]
async fn test_update_missing_id_is_noop(pool: PgPool) {
    let catalog = catalog(pool).await;
    let created = catalog.add("Only", "row").await.unwrap();

    catalog.update(created.id + 1000, "Ghost", "none").await.unwrap();

    let all = catalog.list(None).await.unwrap();
    assert_eq!(names(&all), vec!["Only"]);
}

#[sqlx::test(migrations = false)]
async fn test_delete_twice_is_safe(pool: PgPool) {
    let catalog = catalog(pool).await;
    let keep = catalog.add("Keep", "stays").await.unwrap();
    let gone = catalog.add("Gone", "goes").await.unwrap();

    catalog.delete(gone.id).await.unwrap();
    catalog.delete(gone.id).await.unwrap();

    let all = catalog.list(None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_chatbot_lifecycle(pool: PgPool) {
    let catalog = catalog(pool).await;
    catalog.add("Notes", "Plain text notes app").await.unwrap();
    let chatbot = catalog
        .add("Chatbot", "Built with Python and an LLM API")
        .await
        .unwrap();

    let hits = catalog.list(Some("python")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, chatbot.id);

    catalog
        .update(chatbot.id, "Chatbot v2", "Now multilingual")
        .await
        .unwrap();
    let all = catalog.list(None).await.unwrap();
    assert_eq!(all[0].project_name, "Chatbot v2");

    catalog.delete(chatbot.id).await.unwrap();
    let all = catalog.list(None).await.unwrap();
    assert!(all.iter().all(|p| p.id != chatbot.id));
}
