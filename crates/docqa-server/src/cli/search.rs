use clap::Args;

use docqa_core::LookupError;
use docqa_db::lookup::search_safe;

use crate::settings::Settings;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Substring to look for in user names
    pub term: String,
    /// Database to query instead of DOCQA_DB_URL
    #[arg(long)]
    pub db_url: Option<String>,
}

/// Run the parameter-bound lookup and render the rows as a JSON array of
/// `[id, name]` pairs.
pub async fn run(settings: &Settings, args: &SearchArgs) -> Result<String, LookupError> {
    let db_url = args.db_url.as_deref().unwrap_or(&settings.db_url);
    let rows = search_safe(db_url, &args.term).await?;
    tracing::info!(event = "cli_search", rows = rows.len());
    serde_json::to_string(&rows).map_err(|err| LookupError::Store(err.to_string()))
}
