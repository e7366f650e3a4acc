//! redb-backed cart persistence
//!
//! One table, one key: the cart is stored as a JSON-serialized line
//! array under `cart-storage` and rewritten after every mutation
//! (fire-and-forget, no debouncing). A snapshot that fails to
//! deserialize is logged and dropped; the cart falls back to empty and
//! the failure is never surfaced to the buyer.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::cart::CartLine;
use thiserror::Error;
use tracing::{debug, warn};

/// Single-key table holding the serialized cart
const CART_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cart");

/// Storage key, kept from the original local-storage name
const CART_KEY: &str = "cart-storage";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Cart persistence backed by redb
#[derive(Clone)]
pub struct CartStorage {
    db: Arc<Database>,
}

impl CartStorage {
    /// Open or create the cart database at the given path
    ///
    /// The table is created up front so reads never race table
    /// existence.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        let tx = db.begin_write()?;
        {
            let _ = tx.open_table(CART_TABLE)?;
        }
        tx.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Load the persisted cart
    ///
    /// A missing key means an empty cart. A snapshot that no longer
    /// deserializes (shape change between releases) also yields an
    /// empty cart, with a warning on the diagnostic channel.
    pub fn load(&self) -> StorageResult<Vec<CartLine>> {
        let tx = self.db.begin_read()?;
        let table = tx.open_table(CART_TABLE)?;

        let Some(raw) = table.get(CART_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice::<Vec<CartLine>>(raw.value()) {
            Ok(lines) => {
                debug!(lines = lines.len(), "loaded persisted cart");
                Ok(lines)
            }
            Err(e) => {
                warn!(error = %e, "cart snapshot failed to deserialize, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Persist the current lines, rewriting the whole snapshot
    pub fn save(&self, lines: &[CartLine]) -> StorageResult<()> {
        let payload = serde_json::to_vec(lines)?;
        let tx = self.db.begin_write()?;
        {
            let mut table = tx.open_table(CART_TABLE)?;
            table.insert(CART_KEY, payload.as_slice())?;
        }
        tx.commit()?;
        debug!(lines = lines.len(), bytes = payload.len(), "saved cart");
        Ok(())
    }

    /// Drop the persisted snapshot (after a completed checkout)
    pub fn clear(&self) -> StorageResult<()> {
        let tx = self.db.begin_write()?;
        {
            let mut table = tx.open_table(CART_TABLE)?;
            table.remove(CART_KEY)?;
        }
        tx.commit()?;
        Ok(())
    }
}
