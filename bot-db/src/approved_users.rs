use crate::{ButterbeanDb, ReadWriteTree};
use color_eyre::eyre::{Context, Result};
use sled::Tree;

/// Usernames allowed to change the meme catalog.
pub struct ApprovedUsers(Tree);

impl ApprovedUsers {
    pub fn new(db: &ButterbeanDb) -> Result<Self> {
        Ok(ApprovedUsers(db.open_tree("approved_users")?))
    }

    pub fn approve(&self, username: &str) -> Result<()> {
        tracing::info!("Approving {username}");
        self.0.typed_insert(username.to_lowercase(), &())
    }

    pub fn usernames(&self) -> Result<Vec<String>> {
        self.0
            .iter()
            .keys()
            .map(|key| -> Result<String> {
                let key = key.wrap_err("Failed to read approved user")?;
                Ok(String::from_utf8_lossy(&key).into_owned())
            })
            .collect()
    }

    /// Whether any stored username contains `username`, ignoring case.
    pub fn contains(&self, username: &str) -> Result<bool> {
        let username = username.to_lowercase();

        Ok(self
            .usernames()?
            .iter()
            .any(|approved| approved.contains(&username)))
    }
}
