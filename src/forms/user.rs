use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
  pub user_id: String,
  pub nickname: String,
  pub email: Option<String>,
  pub memo: Option<String>,
}
