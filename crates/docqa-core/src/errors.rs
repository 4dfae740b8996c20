use thiserror::Error;

/// Failure of a user lookup, as seen by callers of either lookup path.
///
/// An empty result set is not an error; both paths return an empty `Vec`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("store_unavailable: {0}")]
    StoreUnavailable(String),
    #[error("query_syntax: {0}")]
    QuerySyntax(String),
    #[error("store: {0}")]
    Store(String),
}

impl LookupError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::QuerySyntax(_) => "query_syntax",
            Self::Store(_) => "db_error",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct RoleParseError(pub String);
