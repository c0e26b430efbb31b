use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HashtagList {
  pub hashtags: Vec<String>,
}
