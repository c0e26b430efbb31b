use serde::{Deserialize, Serialize};

use crate::models::AuditFields;

pub type HashtagId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hashtag {
  pub id: HashtagId,
  /// Normalized: lower-case, trimmed, no leading marker.
  pub name: String,
  pub audit: AuditFields,
}
