use docqa_core::LookupError;

const SQLITE_ERROR: i32 = 1;
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;
const SQLITE_IOERR: i32 = 10;
const SQLITE_CANTOPEN: i32 = 14;
const SQLITE_NOTADB: i32 = 26;

const MISSING_TABLE: &str = "no such table";

/// Sort a store error into the lookup taxonomy.
///
/// SQLite reports extended result codes; only the primary code (low byte)
/// is inspected.
pub fn classify(err: sqlx_core::Error) -> LookupError {
    let message = err.to_string();
    match &err {
        sqlx_core::Error::Configuration(_)
        | sqlx_core::Error::Io(_)
        | sqlx_core::Error::PoolTimedOut
        | sqlx_core::Error::PoolClosed
        | sqlx_core::Error::WorkerCrashed => LookupError::StoreUnavailable(message),
        sqlx_core::Error::Database(db_err) => {
            let primary = db_err
                .code()
                .and_then(|code| code.parse::<i32>().ok())
                .map(|code| code & 0xff);
            match primary {
                // missing schema is a store problem, not a malformed predicate
                Some(SQLITE_ERROR) if db_err.message().starts_with(MISSING_TABLE) => {
                    LookupError::Store(message)
                }
                Some(SQLITE_ERROR) => LookupError::QuerySyntax(db_err.message().to_string()),
                Some(
                    SQLITE_BUSY | SQLITE_LOCKED | SQLITE_IOERR | SQLITE_CANTOPEN | SQLITE_NOTADB,
                ) => LookupError::StoreUnavailable(message),
                _ => LookupError::Store(message),
            }
        }
        _ => LookupError::Store(message),
    }
}
