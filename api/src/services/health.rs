// Health check service implementation

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use crate::db::DbError;

/// Runs a trivial round-trip against the store and reports whether it
/// answered. Any driver error propagates to the caller.
pub async fn check_database(conn: &DatabaseConnection) -> Result<bool, DbError> {
    let probe = conn
        .query_one(Statement::from_string(
            conn.get_database_backend(),
            "SELECT 1 AS ok".to_string(),
        ))
        .await?;

    match probe {
        Some(row) => {
            let ok = row.try_get::<i32>("", "ok").unwrap_or(0);
            Ok(ok == 1)
        }
        None => Ok(false),
    }
}
