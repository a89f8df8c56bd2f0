use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, warn};

use crate::database::manager::DatabaseError;

/// Run `op` inside a fresh transaction: commit when it returns `Ok`, roll back
/// when it returns `Err`.
///
/// If `op` panics, or the surrounding future is dropped before completion,
/// the transaction guard is dropped un-committed and sqlx rolls it back when
/// the connection returns to the pool. Either way the transaction is released
/// exactly once.
pub async fn in_transaction<T, E, F>(pool: &PgPool, op: F) -> Result<T, E>
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, E>>,
    E: From<DatabaseError>,
{
    let mut tx = pool.begin().await.map_err(DatabaseError::from)?;

    match op(&mut *tx).await {
        Ok(value) => {
            tx.commit().await.map_err(DatabaseError::from)?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Transaction rollback failed: {}", rollback_err);
            } else {
                debug!("Transaction rolled back");
            }
            Err(err)
        }
    }
}
