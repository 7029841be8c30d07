use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::warn;

/// Boxed future borrowed from a transaction, as returned by [`with_txn`] closures.
pub type TxnFuture<'c, R, E> = Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>;

/// Execute a function within a database transaction
///
/// Commits when the closure returns `Ok`. On `Err` the transaction is rolled
/// back and the closure's error is returned unchanged.
pub async fn with_txn<R, E, F>(db: &DatabaseConnection, f: F) -> Result<R, E>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R, E>,
    E: From<DbErr>,
{
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "transaction rollback failed");
            }
            Err(err)
        }
    }
}
