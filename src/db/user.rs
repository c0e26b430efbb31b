use crate::error::*;

use crate::db::*;

impl UserStore for Tables {
  fn find_user(&self, user_id: &str) -> Result<Option<UserAccount>> {
    Ok(self.users.get(user_id).cloned())
  }

  fn insert_user(&mut self, user: UserAccount) -> Result<()> {
    if self.users.contains_key(&user.user_id) {
      return Err(Error::validation("userId", &format!("duplicate user id: {}", user.user_id)));
    }
    self.users.insert(user.user_id.clone(), user);
    Ok(())
  }
}
