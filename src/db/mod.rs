//! Database module: connection pool, migrations and the create/list gateway.
//!
//! Each wire model knows how to write itself (and anything nested inside it)
//! through [`Persist`]. [`DbPool::create`] decides whether those writes share
//! one transaction.

pub mod summaries;
pub mod test_case_evidences;
pub mod test_cases;
pub mod test_reports;

use std::future::Future;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, TransactionTrait};
use sea_orm_migration::MigratorTrait;
use tracing::warn;

use crate::config::{Config, NestedWrites};
use crate::error::AppResult;
use crate::migration::Migrator;

/// A payload that can be inserted, together with its nested children.
///
/// Ids supplied by the caller are ignored; the returned value carries the
/// ids assigned by the database.
pub trait Persist: Sized {
    fn persist<C: ConnectionTrait>(self, db: &C) -> impl Future<Output = AppResult<Self>>;
}

/// Shared database handle. Cloning is cheap; all clones use one pool.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
    nested_writes: NestedWrites,
}

impl DbPool {
    /// Connect to the database described by the configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        let mut opt = ConnectOptions::new(config.database.url.clone());
        opt.max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        Ok(Self {
            conn,
            nested_writes: config.database.nested_writes,
        })
    }

    /// Bring the schema up to date.
    pub async fn run_migrations(&self) -> AppResult<()> {
        Migrator::up(&self.conn, None).await?;
        Ok(())
    }

    /// Underlying SeaORM connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub fn nested_writes(&self) -> NestedWrites {
        self.nested_writes
    }

    /// Check that the database answers.
    pub async fn ping(&self) -> AppResult<()> {
        self.conn.ping().await?;
        Ok(())
    }

    /// Insert a value and everything nested in it.
    ///
    /// With [`NestedWrites::Transactional`] a failure leaves no rows behind.
    /// With [`NestedWrites::BestEffort`] rows written before the failure remain.
    pub async fn create<T: Persist>(&self, value: T) -> AppResult<T> {
        match self.nested_writes {
            NestedWrites::BestEffort => value.persist(&self.conn).await,
            NestedWrites::Transactional => {
                let txn = self.conn.begin().await?;
                let result = value.persist(&txn).await;
                match result {
                    Ok(stored) => {
                        txn.commit().await?;
                        Ok(stored)
                    }
                    Err(e) => {
                        if let Err(rollback_err) = txn.rollback().await {
                            warn!("Rollback after failed create also failed: {}", rollback_err);
                        }
                        Err(e)
                    }
                }
            }
        }
    }

    /// Close every pooled connection. Call once the server has stopped.
    pub async fn close(self) -> AppResult<()> {
        self.conn.close().await?;
        Ok(())
    }
}
