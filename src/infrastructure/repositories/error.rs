use crate::domain::errors::{DomainError, StorageFault};

/// Convert a driver error into a storage fault, keeping the SQLSTATE so the
/// HTTP layer can classify it without seeing driver types.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    let fault = match &err {
        sqlx::Error::Database(db_err) => StorageFault::new(
            db_err.code().map(|code| code.into_owned()),
            db_err.message(),
        ),
        _ => StorageFault::new(None, err.to_string()),
    };
    DomainError::Storage(fault)
}
