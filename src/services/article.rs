use log::*;

use std::collections::BTreeSet;

use serde_json::json;

use crate::error::*;
use crate::app::*;
use crate::models::*;
use crate::forms::*;
use crate::util::now;

use crate::db::*;

use super::comment::comment_details;
use super::hashtag::{extract, synchronize};
use super::search::SearchDispatcher;

/// Resolve an article's author and hashtag names through the stores.
fn article_details<S>(store: &S, article: Article) -> Result<ArticleDetails>
where
  S: HashtagStore + UserStore + ?Sized,
{
  let author = store.find_user(&article.user_id)?
    .map(|user| Profile::from(&user))
    .ok_or_else(|| Error::not_found("user", &article.user_id))?;
  let mut hashtags = Vec::with_capacity(article.hashtag_ids.len());
  for id in &article.hashtag_ids {
    if let Some(hashtag) = store.find_hashtag(*id)? {
      hashtags.push(hashtag.name);
    }
  }
  hashtags.sort();

  Ok(ArticleDetails {
    id: article.id,
    title: article.title,
    content: article.content,
    hashtags,
    author,
    audit: article.audit,
  })
}

fn find_article<S: ArticleStore + ?Sized>(store: &S, article_id: ArticleId) -> Result<Article> {
  store.find_article(article_id)?
    .ok_or_else(|| Error::not_found("article", article_id))
}

#[derive(Clone)]
pub struct ArticleService {
  db: DbService,
  search: SearchDispatcher,
  pub allow_update: bool,
  pub allow_delete: bool,
}

impl super::Service for ArticleService {
  fn load_app_config(&mut self, config: &AppConfig) -> Result<()> {
    self.allow_update = config.get_bool("article.allow_update")?.unwrap_or(true);
    self.allow_delete = config.get_bool("article.allow_delete")?.unwrap_or(true);
    Ok(())
  }
}

impl ArticleService {
  pub fn new(db: DbService) -> Result<ArticleService> {
    Ok(ArticleService {
      db,
      search: SearchDispatcher::new()?,
      allow_update: true,
      allow_delete: true,
    })
  }

  pub fn search_articles(
    &self,
    search_type: Option<SearchType>,
    search_value: Option<&str>,
    page: &PageRequest,
  ) -> Result<Page<ArticleDetails>> {
    let search_type = search_type.unwrap_or(SearchType::None);
    self.db.read(|tables| {
      let articles = self.search.dispatch(tables, search_type, search_value, page)?;
      articles.try_map(|article| article_details(tables, article))
    })
  }

  pub fn search_articles_via_hashtag(
    &self,
    hashtag: Option<&str>,
    page: &PageRequest,
  ) -> Result<Page<ArticleDetails>> {
    self.search_articles(Some(SearchType::Hashtag), hashtag, page)
  }

  pub fn get_article(&self, article_id: ArticleId) -> Result<ArticleDetails> {
    self.db.read(|tables| {
      let article = find_article(tables, article_id)?;
      article_details(tables, article)
    })
  }

  pub fn get_article_with_comments(&self, article_id: ArticleId) -> Result<ArticleWithComments> {
    self.db.read(|tables| {
      let article = find_article(tables, article_id)?;
      let comments = tables.comments_by_article(article_id)?
        .into_iter()
        .map(|comment| comment_details(tables, comment))
        .collect::<Result<Vec<_>>>()?;
      Ok(ArticleWithComments {
        article: article_details(tables, article)?,
        comments,
      })
    })
  }

  pub fn article_count(&self) -> Result<u64> {
    self.db.read(|tables| tables.count_articles())
  }

  pub fn hashtags(&self) -> Result<HashtagList> {
    Ok(HashtagList {
      hashtags: self.db.read(|tables| tables.hashtag_names())?,
    })
  }

  /// Store a new article and attach the hashtags found in its content.
  pub fn save_article(&self, actor: &Principal, form: &CreateArticle) -> Result<ArticleId> {
    form.validate()?;
    self.db.transaction(|tx| {
      if tx.find_user(&actor.user_id)?.is_none() {
        return Err(Error::not_found("user", &actor.user_id));
      }
      let article = tx.insert_article(NewArticle {
        user_id: actor.user_id.clone(),
        title: form.title.trim().to_string(),
        content: form.content.clone(),
        audit: AuditFields::new(actor, now()),
      })?;
      let outcome = synchronize(&mut *tx, actor, article.id, &extract(&article.content))?;
      info!("save article: id={}, author={}, hashtags={:?}", article.id, actor.user_id, outcome.added);
      Ok(article.id)
    })
  }

  /// Apply title/content changes and re-sync hashtags from the new content.
  pub fn update_article(
    &self,
    actor: &Principal,
    article_id: ArticleId,
    form: &UpdateArticle,
  ) -> Result<ArticleDetails> {
    form.validate()?;
    self.db.transaction(|tx| {
      let mut article = find_article(&*tx, article_id)?;
      self.check_mutation(actor, &article, self.allow_update, "update")?;

      if let Some(title) = &form.title {
        article.title = title.trim().to_string();
      }
      if let Some(content) = &form.content {
        article.content = content.clone();
      }
      article.audit.touch(actor, now());
      tx.save_article(&article)?;

      let outcome = synchronize(&mut *tx, actor, article_id, &extract(&article.content))?;
      debug!("update article: id={}, hashtags={:?}", article_id, outcome);

      let article = find_article(&*tx, article_id)?;
      article_details(&*tx, article)
    })
  }

  /// Delete an article, its comments and any hashtag only it referenced.
  pub fn delete_article(&self, actor: &Principal, article_id: ArticleId) -> Result<()> {
    self.db.transaction(|tx| {
      let article = find_article(&*tx, article_id)?;
      self.check_mutation(actor, &article, self.allow_delete, "delete")?;

      let outcome = synchronize(&mut *tx, actor, article_id, &BTreeSet::new())?;
      let comments = tx.delete_comments_by_article(article_id)?;
      tx.delete_article(article_id)?;
      info!("delete article: id={}, comments={}, orphans={:?}", article_id, comments, outcome.deleted);
      Ok(())
    })
  }

  fn check_mutation(&self, actor: &Principal, article: &Article, allowed: bool, action: &str) -> Result<()> {
    if !allowed {
      return Err(Error::Forbidden(json!({
        "entity": "article",
        "action": action,
        "reason": "disabled",
      })));
    }
    if !actor.is(&article.user_id) {
      warn!("{} article: id={}: {} is not the author", action, article.id, actor.user_id);
      return Err(Error::forbidden("article", article.id, &actor.user_id));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use assert_matches::assert_matches;

  use crate::services::{Service, UserService};

  fn setup() -> (ArticleService, Principal, Principal) {
    crate::util::init_test_logging();
    let db = DbService::new();
    let users = UserService::new(db.clone());
    for (id, nickname) in &[("sol", "Ssol"), ("john", "John")] {
      users.register_user(&RegisterUser {
        user_id: id.to_string(),
        nickname: nickname.to_string(),
        ..Default::default()
      }).unwrap();
    }
    let service = ArticleService::new(db).unwrap();
    (service, Principal::new("sol", "Ssol"), Principal::new("john", "John"))
  }

  fn create(title: &str, content: &str) -> CreateArticle {
    CreateArticle {
      title: title.to_string(),
      content: content.to_string(),
    }
  }

  #[test]
  fn save_article_attaches_hashtags() {
    let (service, sol, _) = setup();
    let id = service.save_article(&sol, &create("new article", "about #Java and #spring")).unwrap();

    let article = service.get_article(id).unwrap();
    assert_eq!(article.title, "new article");
    assert_eq!(article.hashtags, vec!["java", "spring"]);
    assert_eq!(article.author.nickname, "Ssol");
    assert_eq!(article.audit.created_by, "sol");
    assert_eq!(service.hashtags().unwrap().hashtags, vec!["java", "spring"]);
  }

  #[test]
  fn save_article_requires_author_account() {
    let (service, _, _) = setup();
    let ghost = Principal::new("ghost", "Ghost");
    let res = service.save_article(&ghost, &create("title", "#java"));
    assert!(res.unwrap_err().is_not_found());
    assert_eq!(service.article_count().unwrap(), 0);
    assert!(service.hashtags().unwrap().hashtags.is_empty());
  }

  #[test]
  fn invalid_form_is_rejected() {
    let (service, sol, _) = setup();
    assert_matches!(service.save_article(&sol, &create("  ", "content")), Err(Error::Validation(_)));
  }

  #[test]
  fn update_resyncs_hashtags_and_drops_orphans() {
    let (service, sol, _) = setup();
    let id = service.save_article(&sol, &create("title", "#java #jpa")).unwrap();

    let updated = service.update_article(&sol, id, &UpdateArticle {
      title: None,
      content: Some("now #spring only".to_string()),
    }).unwrap();
    assert_eq!(updated.title, "title");
    assert_eq!(updated.hashtags, vec!["spring"]);
    assert_eq!(service.hashtags().unwrap().hashtags, vec!["spring"]);
  }

  #[test]
  fn non_author_cannot_update_or_delete() {
    let (service, sol, john) = setup();
    let id = service.save_article(&sol, &create("title", "#java")).unwrap();

    let form = UpdateArticle {
      title: Some("hijacked".to_string()),
      content: None,
    };
    assert_matches!(service.update_article(&john, id, &form), Err(Error::Forbidden(_)));
    assert_matches!(service.delete_article(&john, id), Err(Error::Forbidden(_)));
    assert_eq!(service.get_article(id).unwrap().title, "title");
  }

  #[test]
  fn disabled_update_is_forbidden() {
    let (mut service, sol, _) = setup();
    let mut config = AppConfig::with_defaults().unwrap();
    config.set("article.allow_update", false).unwrap();
    service.load_app_config(&config).unwrap();
    assert!(!service.allow_update);
    assert!(service.allow_delete);

    let id = service.save_article(&sol, &create("title", "content")).unwrap();
    let form = UpdateArticle {
      title: Some("other".to_string()),
      content: None,
    };
    assert_matches!(service.update_article(&sol, id, &form), Err(Error::Forbidden(_)));
  }

  #[test]
  fn delete_removes_article_and_orphans() {
    let (service, sol, _) = setup();
    let keep = service.save_article(&sol, &create("keep", "#java")).unwrap();
    let id = service.save_article(&sol, &create("drop", "#java #jpa")).unwrap();

    service.delete_article(&sol, id).unwrap();
    assert!(service.get_article(id).unwrap_err().is_not_found());
    assert_eq!(service.hashtags().unwrap().hashtags, vec!["java"]);
    assert_eq!(service.get_article(keep).unwrap().hashtags, vec!["java"]);
  }

  #[test]
  fn missing_article_is_not_found() {
    let (service, sol, _) = setup();
    assert!(service.get_article(9).unwrap_err().is_not_found());
    assert!(service.get_article_with_comments(9).unwrap_err().is_not_found());
    assert!(service.delete_article(&sol, 9).unwrap_err().is_not_found());
  }

  #[test]
  fn search_by_hashtag() {
    let (service, sol, john) = setup();
    service.save_article(&sol, &create("first", "#java")).unwrap();
    service.save_article(&john, &create("second", "#spring")).unwrap();
    let page = PageRequest::default();

    let found = service.search_articles_via_hashtag(Some("#Java"), &page).unwrap();
    assert_eq!(found.total_elements, 1);
    assert_eq!(found.content[0].title, "first");

    assert!(service.search_articles_via_hashtag(None, &page).unwrap().is_empty());

    let found = service.search_articles(Some(SearchType::AuthorNickname), Some("joh"), &page).unwrap();
    assert_eq!(found.content[0].title, "second");

    let all = service.search_articles(None, None, &page).unwrap();
    assert_eq!(all.total_elements, 2);
  }
}
