use serde::{Deserialize, Serialize};

use crate::models::comment::*;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentList {
  pub comments: Vec<CommentDetails>,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateComment {
  pub content: String,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateComment {
  pub content: String,
}
