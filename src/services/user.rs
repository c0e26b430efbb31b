use log::*;

use crate::error::*;
use crate::app::*;
use crate::models::*;
use crate::forms::*;

use crate::db::*;

#[derive(Clone)]
pub struct UserService {
  db: DbService,
}

impl super::Service for UserService {
  fn load_app_config(&mut self, _config: &AppConfig) -> Result<()> {
    Ok(())
  }
}

impl UserService {
  pub fn new(db: DbService) -> UserService {
    UserService {
      db,
    }
  }

  /// Register an account. The new user is its own audit actor.
  pub fn register_user(&self, form: &RegisterUser) -> Result<UserAccount> {
    validate_text("userId", &form.user_id, 50)?;
    validate_text("nickname", &form.nickname, 100)?;
    let user_id = form.user_id.trim();
    let actor = Principal::new(user_id, form.nickname.trim());
    let user = UserAccount {
      user_id: user_id.to_string(),
      nickname: actor.nickname.clone(),
      email: form.email.clone(),
      memo: form.memo.clone(),
      audit: AuditFields::new(&actor, crate::util::now()),
    };
    self.db.transaction(|tx| tx.insert_user(user.clone()))?;
    info!("registered user: {}", user.user_id);
    Ok(user)
  }

  pub fn get_user(&self, user_id: &str) -> Result<UserAccount> {
    self.db.read(|tables| {
      tables.find_user(user_id)?
        .ok_or_else(|| Error::not_found("user", user_id))
    })
  }
}
