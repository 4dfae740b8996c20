use docqa_db::{connect_sqlite, migrate};

#[tokio::main]
async fn main() {
    let db_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://test.db".to_string());
    let pool = match connect_sqlite(&db_url).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("failed to connect to database: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = migrate(&pool).await {
        eprintln!("failed to run migrations: {err}");
        std::process::exit(1);
    }
}
