pub mod v1;
pub mod vulnerable;

use serde::{Deserialize, Serialize};

use docqa_core::UserRecord;

#[derive(Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) q: String,
}

/// `{"results": [[id, name], ...]}`
#[derive(Serialize)]
pub(crate) struct SearchResponse {
    pub(crate) results: Vec<(i64, String)>,
}

impl SearchResponse {
    pub(crate) fn from_records(records: Vec<UserRecord>) -> Self {
        Self {
            results: records.into_iter().map(UserRecord::into_pair).collect(),
        }
    }
}
