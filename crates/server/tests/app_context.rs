//! Integration tests for application context startup and shutdown.
//!
//! Each test builds its own context over a SQLite file in a scratch
//! directory, so tests never share an engine.

use forum_server::config::{CasdoorConfig, Config, LoggingConfig};
use forum_server::AppContext;
use persistence::{DatabaseConfig, PersistenceError, REGISTRY};
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> Config {
    Config {
        database: DatabaseConfig::new(
            "sqlite",
            format!("sqlite://{}/", dir.path().display()),
            "casnode",
        ),
        casdoor: CasdoorConfig {
            organization: "casbin-forum".to_string(),
            application: "app-casnode".to_string(),
        },
        logging: LoggingConfig::default(),
    }
}

async fn count_rows(context: &AppContext, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(context.engine().unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_initialize_exposes_storage_and_identifiers() {
    let dir = TempDir::new().unwrap();
    let context = AppContext::initialize(&test_config(&dir)).await.unwrap();

    assert_eq!(context.casdoor_organization(), "casbin-forum");
    assert_eq!(context.casdoor_application(), "app-casnode");
    assert_eq!(context.adapter().config().name, "casnode");
    assert_eq!(context.adapter().driver().name, "sqlite");
    assert_eq!(
        context.adapter().startup_report().tables_created.len(),
        REGISTRY.len()
    );
    assert_eq!(count_rows(&context, "sensitive_word").await, 0);

    context.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_independent_contexts_do_not_share_storage() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    let first = AppContext::initialize(&test_config(&first_dir)).await.unwrap();
    let second = AppContext::initialize(&test_config(&second_dir))
        .await
        .unwrap();

    sqlx::query("INSERT INTO sensitive_word (word) VALUES (?)")
        .bind("spam")
        .execute(first.engine().unwrap())
        .await
        .unwrap();

    assert_eq!(count_rows(&first, "sensitive_word").await, 1);
    assert_eq!(count_rows(&second, "sensitive_word").await, 0);

    first.shutdown().await.unwrap();
    second.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_through_any_clone_closes_the_shared_engine() {
    let dir = TempDir::new().unwrap();
    let context = AppContext::initialize(&test_config(&dir)).await.unwrap();
    let handler_copy = context.clone();

    context.shutdown().await.unwrap();

    assert!(matches!(
        handler_copy.engine(),
        Err(PersistenceError::Closed)
    ));
    handler_copy.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_restart_reuses_existing_schema() {
    let dir = TempDir::new().unwrap();

    let context = AppContext::initialize(&test_config(&dir)).await.unwrap();
    sqlx::query("INSERT INTO basic_info (id, value) VALUES (?, ?)")
        .bind("topic_count")
        .bind("42")
        .execute(context.engine().unwrap())
        .await
        .unwrap();
    context.shutdown().await.unwrap();

    let context = AppContext::initialize(&test_config(&dir)).await.unwrap();
    assert!(context.adapter().startup_report().is_noop());
    let value: String = sqlx::query_scalar("SELECT value FROM basic_info WHERE id = ?")
        .bind("topic_count")
        .fetch_one(context.engine().unwrap())
        .await
        .unwrap();
    assert_eq!(value, "42");
    context.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unsupported_driver_aborts_initialization() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);
    config.database.driver = "mssql".to_string();

    let result = AppContext::initialize(&config).await;
    assert!(matches!(result, Err(PersistenceError::Config(_))));
}

#[tokio::test]
async fn test_blank_casdoor_identifiers_abort_initialization() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);
    config.casdoor.organization = "  ".to_string();

    let Err(err) = AppContext::initialize(&config).await else {
        panic!("blank organization must be rejected");
    };
    assert!(matches!(err, PersistenceError::Config(_)));
    assert!(err.to_string().contains("casdoor.organization"));
    assert!(!dir.path().join("casnode.db").exists());

    let mut config = test_config(&dir);
    config.casdoor.application = String::new();
    let Err(err) = AppContext::initialize(&config).await else {
        panic!("blank application must be rejected");
    };
    assert!(err.to_string().contains("casdoor.application"));
}
