use serde::{Deserialize, Serialize};

use crate::models::*;

pub type CommentId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleComment {
  pub id: CommentId,
  pub article_id: ArticleId,
  pub user_id: String,
  pub content: String,
  pub audit: AuditFields,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
  pub article_id: ArticleId,
  pub user_id: String,
  pub content: String,
  pub audit: AuditFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetails {
  pub id: CommentId,
  pub article_id: ArticleId,
  pub content: String,
  pub author: Profile,
  pub audit: AuditFields,
}
