pub mod approved_users;
pub mod memes;

use color_eyre::eyre::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};
use sled::{Db, IVec, Tree};
use std::path::Path;

pub trait ReadWriteTree {
    fn typed_insert<V: Serialize>(&self, key: impl AsRef<[u8]>, value: &V) -> Result<()>;

    /// Every entry of the tree in key order, decoded as `V`.
    fn typed_scan<V: DeserializeOwned>(&self) -> impl Iterator<Item = Result<(IVec, V)>>;
}

impl ReadWriteTree for Tree {
    fn typed_insert<V: Serialize>(&self, key: impl AsRef<[u8]>, value: &V) -> Result<()> {
        let value = bincode::serialize::<V>(value)?;
        self.insert(key.as_ref(), value)?;
        Ok(())
    }

    fn typed_scan<V: DeserializeOwned>(&self) -> impl Iterator<Item = Result<(IVec, V)>> {
        self.iter().map(|entry| -> Result<(IVec, V)> {
            let (key, value) = entry.wrap_err("Failed to read entry")?;
            let value = bincode::deserialize::<V>(&value).wrap_err("Failed to deserialize")?;
            Ok((key, value))
        })
    }
}

/// Handle to the bot's embedded database.
///
/// Cloning is cheap, every clone points at the same underlying store.
#[derive(Debug, Clone)]
pub struct ButterbeanDb(Db);

impl ButterbeanDb {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Opening database at {}", path.display());

        Ok(Self(sled::open(path).wrap_err("Failed to open database")?))
    }

    /// A throwaway database that is removed when the last handle is dropped.
    pub fn temporary() -> Result<Self> {
        Ok(Self(sled::Config::new().temporary(true).open()?))
    }

    pub fn flush(&self) -> Result<()> {
        self.0.flush().wrap_err("Failed to flush database")?;
        Ok(())
    }

    fn open_tree(&self, name: impl AsRef<[u8]>) -> Result<Tree> {
        self.0.open_tree(name).wrap_err("Failed to open tree")
    }

    fn generate_id(&self) -> Result<u64> {
        self.0.generate_id().wrap_err("Failed to generate id")
    }
}
