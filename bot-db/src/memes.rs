use crate::{ButterbeanDb, ReadWriteTree};
use color_eyre::eyre::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sled::{Batch, IVec, Tree};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemeEntry {
    pub name: String,
    pub link: String,
}

impl MemeEntry {
    /// Case-insensitive substring match of `query` against the entry name.
    ///
    /// `query` must already be lowercased.
    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
    }
}

/// The meme catalog, a `name -> link` table.
///
/// Keys are generated ids stored big-endian, so a scan walks entries in the
/// order they were added. Names are not unique. A lookup prefers the oldest
/// entry whose name equals the query (ignoring case), and otherwise falls back
/// to the oldest entry whose name contains it.
pub struct MemeStore {
    db: ButterbeanDb,
    tree: Tree,
}

impl MemeStore {
    pub fn new(db: &ButterbeanDb) -> Result<Self> {
        Ok(MemeStore {
            db: db.clone(),
            tree: db.open_tree("posts")?,
        })
    }

    fn entries(&self) -> impl Iterator<Item = Result<(IVec, MemeEntry)>> {
        self.tree.typed_scan::<MemeEntry>()
    }

    pub fn lookup(&self, query: &str) -> Result<Option<MemeEntry>> {
        let query = query.to_lowercase();
        let mut first_match = None;

        for entry in self.entries() {
            let (_, meme) = entry?;
            if meme.name.to_lowercase() == query {
                return Ok(Some(meme));
            }
            if first_match.is_none() && meme.matches(&query) {
                first_match = Some(meme);
            }
        }

        Ok(first_match)
    }

    pub fn add(&self, name: &str, link: &str) -> Result<()> {
        let id = self.db.generate_id()?;
        let meme = MemeEntry {
            name: name.to_owned(),
            link: link.to_owned(),
        };

        self.tree.typed_insert(id.to_be_bytes(), &meme)
    }

    /// Deletes every entry matching `query`, returning how many went.
    pub fn remove(&self, query: &str) -> Result<usize> {
        let query = query.to_lowercase();
        let mut batch = Batch::default();
        let mut removed = 0;

        for entry in self.entries() {
            let (key, meme) = entry?;
            if meme.matches(&query) {
                batch.remove(key);
                removed += 1;
            }
        }

        self.tree
            .apply_batch(batch)
            .wrap_err("Failed to remove memes")?;

        Ok(removed)
    }

    pub fn names(&self) -> Result<Vec<String>> {
        self.entries()
            .map_ok(|(_, meme)| meme.name)
            .collect::<Result<Vec<_>>>()
    }

    /// Every stored name joined into one comma separated string.
    pub fn list_names(&self) -> Result<String> {
        Ok(self.names()?.iter().join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn store() -> MemeStore {
        MemeStore::new(&ButterbeanDb::temporary().unwrap()).unwrap()
    }

    #[test]
    fn lookup_exact_name() {
        let memes = store();
        memes.add("flanders", "https://example.com/flanders.gif").unwrap();
        memes.add("cabbage", "https://example.com/cabbage.png").unwrap();

        let found = memes.lookup("cabbage").unwrap().unwrap();
        assert_eq!(found.link, "https://example.com/cabbage.png");
    }

    #[test]
    fn lookup_is_case_insensitive_substring() {
        let memes = store();
        memes.add("BigCabbage", "https://example.com/cabbage.png").unwrap();

        assert!(memes.lookup("cabb").unwrap().is_some());
        assert!(memes.lookup("BIGCABBAGE").unwrap().is_some());
        assert!(memes.lookup("lettuce").unwrap().is_none());
    }

    #[test]
    fn ambiguous_lookup_returns_oldest() {
        let memes = store();
        memes.add("cattle", "https://example.com/first").unwrap();
        memes.add("catillac", "https://example.com/second").unwrap();

        assert_eq!(memes.lookup("cat").unwrap().unwrap().link, "https://example.com/first");
    }

    #[test]
    fn exact_name_beats_older_substring_match() {
        let memes = store();
        memes.add("catillac", "https://example.com/catillac").unwrap();
        memes.add("cat", "https://example.com/cat").unwrap();
        memes.add("Cat", "https://example.com/second-cat").unwrap();

        let found = memes.lookup("cat").unwrap().unwrap();
        assert_eq!(found.name, "cat");
        assert_eq!(found.link, "https://example.com/cat");
        assert_eq!(
            memes.lookup("catillac").unwrap().unwrap().link,
            "https://example.com/catillac"
        );
    }

    #[test]
    fn remove_drops_every_match() {
        let memes = store();
        memes.add("cat", "https://example.com/1").unwrap();
        memes.add("catillac", "https://example.com/2").unwrap();
        memes.add("dog", "https://example.com/3").unwrap();

        assert_eq!(memes.remove("CAT").unwrap(), 2);
        assert!(memes.lookup("cat").unwrap().is_none());
        assert!(memes.lookup("dog").unwrap().is_some());
        assert_eq!(memes.remove("cat").unwrap(), 0);
    }

    #[test]
    fn duplicates_are_kept() {
        let memes = store();
        memes.add("cat", "https://example.com/1").unwrap();
        memes.add("cat", "https://example.com/2").unwrap();

        assert_eq!(memes.names().unwrap(), vec!["cat", "cat"]);
    }

    #[test]
    fn list_names_in_insertion_order() {
        let memes = store();
        assert_eq!(memes.list_names().unwrap(), "");

        memes.add("zebra", "https://example.com/z").unwrap();
        memes.add("apple", "https://example.com/a").unwrap();
        memes.add("mango", "https://example.com/m").unwrap();

        assert_eq!(memes.list_names().unwrap(), "zebra, apple, mango");
    }
}
