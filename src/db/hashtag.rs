use log::*;

use crate::error::*;
use crate::models::*;

use crate::db::*;

impl HashtagStore for Tables {
  fn find_hashtag_by_name(&self, name: &str) -> Result<Option<Hashtag>> {
    Ok(self.hashtags.values().find(|h| h.name == name).cloned())
  }

  fn find_hashtag(&self, id: HashtagId) -> Result<Option<Hashtag>> {
    Ok(self.hashtags.get(&id).cloned())
  }

  fn create_hashtag(&mut self, name: &str, actor: &Principal) -> Result<Hashtag> {
    if self.hashtags.values().any(|h| h.name == name) {
      return Err(Error::validation("hashtag", &format!("duplicate hashtag name: {}", name)));
    }
    self.last_hashtag_id += 1;
    let hashtag = Hashtag {
      id: self.last_hashtag_id,
      name: name.to_string(),
      audit: AuditFields::new(actor, crate::util::now()),
    };
    debug!("create hashtag: id={}, name={}", hashtag.id, hashtag.name);
    self.hashtags.insert(hashtag.id, hashtag.clone());
    Ok(hashtag)
  }

  fn count_referencing_articles(&self, id: HashtagId) -> Result<u64> {
    Ok(self.articles.values().filter(|a| a.hashtag_ids.contains(&id)).count() as u64)
  }

  fn delete_hashtag(&mut self, id: HashtagId) -> Result<()> {
    match self.hashtags.remove(&id) {
      Some(hashtag) => {
        debug!("delete hashtag: id={}, name={}", id, hashtag.name);
        Ok(())
      },
      None => Err(Error::not_found("hashtag", id)),
    }
  }

  fn hashtag_names(&self) -> Result<Vec<String>> {
    let mut names: Vec<String> = self.hashtags.values().map(|h| h.name.clone()).collect();
    names.sort();
    Ok(names)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use assert_matches::assert_matches;

  #[test]
  fn names_are_unique() {
    let sol = Principal::new("sol", "Ssol");
    let mut tables = Tables::default();
    tables.create_hashtag("java", &sol).unwrap();
    assert_matches!(tables.create_hashtag("java", &sol), Err(Error::Validation(_)));
  }

  #[test]
  fn names_are_listed_in_order() {
    let sol = Principal::new("sol", "Ssol");
    let mut tables = Tables::default();
    for name in &["spring", "java", "jpa"] {
      tables.create_hashtag(name, &sol).unwrap();
    }
    assert_eq!(tables.hashtag_names().unwrap(), vec!["java", "jpa", "spring"]);
  }

  #[test]
  fn delete_removes_record() {
    let sol = Principal::new("sol", "Ssol");
    let mut tables = Tables::default();
    let java = tables.create_hashtag("java", &sol).unwrap();
    tables.delete_hashtag(java.id).unwrap();
    assert_eq!(tables.find_hashtag_by_name("java").unwrap(), None);
    assert!(tables.delete_hashtag(java.id).unwrap_err().is_not_found());
  }
}
