use log::*;

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::models::*;
use crate::db::{ArticleStore, HashtagStore};

pub const HASHTAG_MARKER: char = '#';

lazy_static! {
  // marker followed by one or more word chars (unicode letters, digits, '_').
  static ref HASHTAG_TOKEN: Regex = Regex::new(r"#(\w+)").expect("valid hashtag regex");
  // a stored name: the word part of a token, nothing else.
  static ref HASHTAG_NAME: Regex = Regex::new(r"^\w+$").expect("valid hashtag name regex");
}

/// Parse the normalized hashtag names mentioned in `text`.
pub fn extract(text: &str) -> BTreeSet<String> {
  HASHTAG_TOKEN.captures_iter(text)
    .filter_map(|cap| cap.get(1))
    .map(|name| name.as_str().to_lowercase())
    .collect()
}

/// Normalize a user supplied hashtag name: trim, drop leading markers, fold case.
///
/// The result is always a name `extract` could have produced; anything
/// else is a validation error.
pub fn normalize_name(raw: &str) -> Result<String> {
  let name = raw.trim().trim_start_matches(HASHTAG_MARKER).trim();
  if name.is_empty() {
    return Err(Error::validation("hashtag", &format!("empty hashtag name: {:?}", raw)));
  }
  if !HASHTAG_NAME.is_match(name) {
    return Err(Error::validation("hashtag", &format!("invalid hashtag name: {:?}", raw)));
  }
  Ok(name.to_lowercase())
}

/// What a `synchronize` call changed, by hashtag name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
  pub created: Vec<String>,
  pub added: Vec<String>,
  pub removed: Vec<String>,
  pub deleted: Vec<String>,
  pub rejected: Vec<String>,
}

impl SyncOutcome {
  /// True when neither the article nor the hashtag store was mutated.
  pub fn is_noop(&self) -> bool {
    self.created.is_empty() && self.added.is_empty()
      && self.removed.is_empty() && self.deleted.is_empty()
  }
}

/// Bring an article's hashtag memberships in line with `desired_names`.
///
/// Missing hashtags are created, memberships not in the desired set are
/// dropped, and any dropped hashtag left without articles is deleted.
/// Must run inside the caller's transaction.
pub fn synchronize<S>(
  store: &mut S,
  actor: &Principal,
  article_id: ArticleId,
  desired_names: &BTreeSet<String>,
) -> Result<SyncOutcome>
where
  S: ArticleStore + HashtagStore + ?Sized,
{
  let mut article = store.find_article(article_id)?
    .ok_or_else(|| Error::not_found("article", article_id))?;
  let mut outcome = SyncOutcome::default();

  let mut names = BTreeSet::new();
  for raw in desired_names {
    match normalize_name(raw) {
      Ok(name) => {
        names.insert(name);
      },
      Err(err) => {
        warn!("synchronize: article={}: skip hashtag: {}", article_id, err);
        outcome.rejected.push(raw.clone());
      },
    }
  }

  // resolve names to records, creating missing ones.
  let mut resolved = BTreeMap::new();
  for name in names {
    let hashtag = match store.find_hashtag_by_name(&name)? {
      Some(hashtag) => hashtag,
      None => {
        let hashtag = store.create_hashtag(&name, actor)?;
        outcome.created.push(hashtag.name.clone());
        hashtag
      },
    };
    resolved.insert(hashtag.id, hashtag.name);
  }

  let to_add: Vec<(HashtagId, String)> = resolved.iter()
    .filter(|(id, _)| !article.hashtag_ids.contains(*id))
    .map(|(id, name)| (*id, name.clone()))
    .collect();
  let to_remove: Vec<HashtagId> = article.hashtag_ids.iter()
    .filter(|id| !resolved.contains_key(*id))
    .copied()
    .collect();
  if to_add.is_empty() && to_remove.is_empty() {
    debug!("synchronize: article={}: hashtags unchanged", article_id);
    return Ok(outcome);
  }

  for (id, name) in to_add {
    article.hashtag_ids.insert(id);
    outcome.added.push(name);
  }
  for id in &to_remove {
    article.hashtag_ids.remove(id);
  }
  article.audit.touch(actor, crate::util::now());
  store.save_article(&article)?;

  // orphan cleanup, after the membership change is saved.
  for id in to_remove {
    let name = match store.find_hashtag(id)? {
      Some(hashtag) => hashtag.name,
      None => {
        warn!("synchronize: article={}: dangling hashtag id={}", article_id, id);
        continue;
      },
    };
    if store.count_referencing_articles(id)? == 0 {
      store.delete_hashtag(id)?;
      outcome.deleted.push(name.clone());
    }
    outcome.removed.push(name);
  }

  info!("synchronize: article={}: added={:?} removed={:?} deleted={:?}",
    article_id, outcome.added, outcome.removed, outcome.deleted);
  Ok(outcome)
}
