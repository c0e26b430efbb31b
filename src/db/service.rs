use log::*;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;

use crate::error::*;
use crate::models::*;

/// In-memory tables backing every store trait.
#[derive(Debug, Clone, Default)]
pub struct Tables {
  pub(crate) users: BTreeMap<String, UserAccount>,
  pub(crate) articles: BTreeMap<ArticleId, Article>,
  pub(crate) hashtags: BTreeMap<HashtagId, Hashtag>,
  pub(crate) comments: BTreeMap<CommentId, ArticleComment>,

  pub(crate) last_article_id: ArticleId,
  pub(crate) last_hashtag_id: HashtagId,
  pub(crate) last_comment_id: CommentId,
}

/// Shared handle to the board tables.
///
/// Writers run inside `transaction`, which works on a snapshot of the
/// tables and only replaces them when the closure returns `Ok`.
#[derive(Clone, Default)]
pub struct DbService {
  tables: Arc<Mutex<Tables>>,
}

impl DbService {
  pub fn new() -> DbService {
    Default::default()
  }

  /// Run a read-only closure against the committed tables.
  pub fn read<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&Tables) -> Result<T>,
  {
    let tables = self.lock()?;
    f(&tables)
  }

  /// Run `f` atomically. Any error rolls back every change `f` made.
  pub fn transaction<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&mut Tables) -> Result<T>,
  {
    let mut tables = self.lock()?;
    let mut tx = tables.clone();
    match f(&mut tx) {
      Ok(res) => {
        *tables = tx;
        debug!("transaction committed.");
        Ok(res)
      },
      Err(err) => {
        debug!("transaction rolled back: {}", err);
        Err(err)
      },
    }
  }

  fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
    self.tables.lock().map_err(|_| {
      error!("DbService: tables lock poisoned.");
      Error::Other(anyhow!("db tables lock poisoned"))
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::db::*;

  fn sol() -> Principal {
    Principal::new("sol", "Ssol")
  }

  #[test]
  fn committed_transaction_is_visible() {
    let db = DbService::new();
    db.transaction(|tx| {
      tx.create_hashtag("java", &sol())?;
      Ok(())
    }).unwrap();

    let names = db.read(|tables| tables.hashtag_names()).unwrap();
    assert_eq!(names, vec!["java".to_string()]);
  }

  #[test]
  fn failed_transaction_leaves_tables_untouched() {
    let db = DbService::new();
    let res: Result<()> = db.transaction(|tx| {
      tx.create_hashtag("java", &sol())?;
      Err(Error::not_found("article", 1))
    });
    assert!(res.unwrap_err().is_not_found());

    let names = db.read(|tables| tables.hashtag_names()).unwrap();
    assert!(names.is_empty());
  }

  #[test]
  fn clones_share_tables() {
    let db = DbService::new();
    let other = db.clone();
    db.transaction(|tx| tx.create_hashtag("spring", &sol()).map(|_| ())).unwrap();
    assert_eq!(other.read(|tables| tables.hashtag_names()).unwrap().len(), 1);
  }
}
