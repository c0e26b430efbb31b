use serde::{Deserialize, Serialize};

use crate::models::AuditFields;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
  pub user_id: String,
  pub nickname: String,
  pub email: Option<String>,
  pub memo: Option<String>,
  pub audit: AuditFields,
}

/// The authenticated identity performing a mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
  pub user_id: String,
  pub nickname: String,
}

impl Principal {
  pub fn new(user_id: &str, nickname: &str) -> Self {
    Self {
      user_id: user_id.to_string(),
      nickname: nickname.to_string(),
    }
  }

  pub fn is(&self, user_id: &str) -> bool {
    self.user_id == user_id
  }
}

/// Author info attached to article and comment details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub user_id: String,
  pub nickname: String,
  pub email: Option<String>,
}

impl From<&UserAccount> for Profile {
  fn from(user: &UserAccount) -> Self {
    Profile {
      user_id: user.user_id.clone(),
      nickname: user.nickname.clone(),
      email: user.email.clone(),
    }
  }
}
