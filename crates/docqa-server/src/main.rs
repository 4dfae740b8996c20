#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]

use docqa_db::migrate;

mod app;
mod bootstrap;
mod cli;
mod config;
mod domains;
mod http;
mod runtime;
mod settings;

#[tokio::main]
async fn main() {
    let run_mode = cli::parse_args();
    bootstrap::init_tracing();
    let settings = settings::Settings::from_env();

    if let cli::RunMode::Search(args) = &run_mode {
        match cli::search::run(&settings, args).await {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
        return;
    }
    if matches!(run_mode, cli::RunMode::Server) {
        if let Err(missing) = settings::preflight(&settings) {
            tracing::error!(
                event = "preflight_failed",
                missing = ?missing,
                "Required configuration missing"
            );
            std::process::exit(1);
        }
    }
    bootstrap::log_startup(&settings);

    let db = match bootstrap::connect_db(&settings).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(event = "db_connect_failed", error = %err);
            std::process::exit(1);
        }
    };
    if matches!(run_mode, cli::RunMode::Migrate) {
        if let Err(err) = migrate(&db).await {
            tracing::error!(error = %err, "migration failed");
            std::process::exit(1);
        }
        tracing::info!("migrations applied");
        return;
    }

    let state = bootstrap::build_state(&settings, db);
    let app = bootstrap::build_app(state);
    bootstrap::serve(&settings, app).await;
}
