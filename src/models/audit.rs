use chrono::NaiveDateTime;

use serde::{Deserialize, Serialize};

use crate::models::Principal;

/// Created/modified metadata embedded in every persisted entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditFields {
  pub created_at: NaiveDateTime,
  pub created_by: String,
  pub modified_at: NaiveDateTime,
  pub modified_by: String,
}

impl AuditFields {
  pub fn new(actor: &Principal, now: NaiveDateTime) -> Self {
    Self {
      created_at: now,
      created_by: actor.user_id.clone(),
      modified_at: now,
      modified_by: actor.user_id.clone(),
    }
  }

  /// Record a mutation. `created_*` never change.
  pub fn touch(&mut self, actor: &Principal, now: NaiveDateTime) {
    self.modified_at = now;
    self.modified_by = actor.user_id.clone();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use chrono::Duration;

  #[test]
  fn touch_keeps_creation_fields() {
    let sol = Principal::new("sol", "Ssol");
    let john = Principal::new("john", "John");
    let created = crate::util::now();
    let mut audit = AuditFields::new(&sol, created);

    let later = created + Duration::seconds(30);
    audit.touch(&john, later);

    assert_eq!(audit.created_at, created);
    assert_eq!(audit.created_by, "sol");
    assert_eq!(audit.modified_at, later);
    assert_eq!(audit.modified_by, "john");
  }
}
