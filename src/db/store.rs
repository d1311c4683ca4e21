//! Shared store handle with one transaction per unit of work.

use super::db::Db;
use crate::libs::error::AppResult;
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{Connection, Transaction};
use std::path::Path;
use std::sync::Arc;

/// Cloneable handle to the application database.
///
/// All access goes through [`Store::transaction`] (or its async wrapper
/// [`Store::run`]): the closure receives an open transaction which is committed
/// when the closure returns `Ok` and rolled back on every other exit path.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self::from_connection(db.conn))
    }

    pub fn open_in_memory() -> Result<Self> {
        let db = Db::open_in_memory()?;
        Ok(Self::from_connection(db.conn))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Store {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `f` inside a transaction on the calling thread.
    pub fn transaction<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction) -> AppResult<T>,
    {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    /// Runs `f` inside a transaction on the blocking thread pool.
    pub async fn run<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.transaction(f)).await?
    }
}
