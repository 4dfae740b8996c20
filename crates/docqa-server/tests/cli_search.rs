use docqa_core::LookupError;
use docqa_server::cli::search::{run, SearchArgs};
use docqa_server::config::ServerConfig;
use docqa_server::settings::Settings;

mod support;

use support::TestApp;

fn settings_for(db_url: &str) -> Settings {
    Settings {
        addr: "127.0.0.1:0".parse().expect("addr"),
        db_url: db_url.to_string(),
        db_pool_max: 1,
        config: ServerConfig::default(),
    }
}

#[tokio::test]
async fn search_prints_pairs_as_json() {
    let app = TestApp::new().await;
    app.seed_users(&[(1, "alice"), (2, "bob")]).await;

    let args = SearchArgs {
        term: "alice".to_string(),
        db_url: None,
    };
    let output = run(&settings_for(&app.db_url), &args).await.expect("search");
    assert_eq!(output, r#"[[1,"alice"]]"#);

    let args = SearchArgs {
        term: "' OR 1=1 --".to_string(),
        db_url: None,
    };
    let output = run(&settings_for(&app.db_url), &args).await.expect("search");
    assert_eq!(output, "[]");
}

#[tokio::test]
async fn search_db_url_flag_overrides_settings() {
    let app = TestApp::new().await;
    app.seed_users(&[(7, "bob")]).await;

    let args = SearchArgs {
        term: "bob".to_string(),
        db_url: Some(app.db_url.clone()),
    };
    let output = run(&settings_for("sqlite:///nonexistent/docqa.db"), &args)
        .await
        .expect("search");
    assert_eq!(output, r#"[[7,"bob"]]"#);
}

#[tokio::test]
async fn search_against_missing_store_fails() {
    let args = SearchArgs {
        term: "alice".to_string(),
        db_url: None,
    };
    let err = run(&settings_for(&support::temp_db_url("docqa-cli-missing")), &args)
        .await
        .expect_err("missing store");
    assert!(matches!(err, LookupError::StoreUnavailable(_)), "{err:?}");
}
