use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::*;

pub type ArticleId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub id: ArticleId,
  pub user_id: String,
  pub title: String,
  pub content: String,
  /// Membership only; hashtag lifecycle is owned by the synchronizer.
  pub hashtag_ids: BTreeSet<HashtagId>,
  pub audit: AuditFields,
}

/// Article fields before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
  pub user_id: String,
  pub title: String,
  pub content: String,
  pub audit: AuditFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetails {
  pub id: ArticleId,
  pub title: String,
  pub content: String,
  pub hashtags: Vec<String>,
  pub author: Profile,
  pub audit: AuditFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleWithComments {
  pub article: ArticleDetails,
  pub comments: Vec<CommentDetails>,
}
