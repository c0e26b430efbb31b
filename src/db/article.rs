use log::*;

use crate::error::*;
use crate::models::*;
use crate::util::contains_ignore_case;

use crate::db::*;
use crate::db::util::*;

impl Tables {
  fn article_matches(&self, article: &Article, filter: &ArticleFilter) -> bool {
    match filter {
      ArticleFilter::All => true,
      ArticleFilter::TitleContains(keyword) => contains_ignore_case(&article.title, keyword),
      ArticleFilter::ContentContains(keyword) => contains_ignore_case(&article.content, keyword),
      ArticleFilter::AuthorIdContains(keyword) => contains_ignore_case(&article.user_id, keyword),
      ArticleFilter::AuthorNicknameContains(keyword) => {
        self.users.get(&article.user_id)
          .map(|user| contains_ignore_case(&user.nickname, keyword))
          .unwrap_or(false)
      },
      ArticleFilter::HashtagNamed(name) => {
        article.hashtag_ids.iter()
          .filter_map(|id| self.hashtags.get(id))
          .any(|hashtag| &hashtag.name == name)
      },
    }
  }
}

impl ArticleStore for Tables {
  fn find_article(&self, id: ArticleId) -> Result<Option<Article>> {
    Ok(self.articles.get(&id).cloned())
  }

  fn insert_article(&mut self, article: NewArticle) -> Result<Article> {
    self.last_article_id += 1;
    let article = Article {
      id: self.last_article_id,
      user_id: article.user_id,
      title: article.title,
      content: article.content,
      hashtag_ids: Default::default(),
      audit: article.audit,
    };
    debug!("insert article: id={}", article.id);
    self.articles.insert(article.id, article.clone());
    Ok(article)
  }

  fn save_article(&mut self, article: &Article) -> Result<()> {
    match self.articles.get_mut(&article.id) {
      Some(row) => {
        *row = article.clone();
        Ok(())
      },
      None => Err(Error::not_found("article", article.id)),
    }
  }

  fn delete_article(&mut self, id: ArticleId) -> Result<()> {
    match self.articles.remove(&id) {
      Some(_) => Ok(()),
      None => Err(Error::not_found("article", id)),
    }
  }

  fn find_article_page(&self, filter: &ArticleFilter, page: &PageRequest) -> Result<Page<Article>> {
    let mut rows: Vec<Article> = self.articles.values()
      .filter(|article| self.article_matches(article, filter))
      .cloned()
      .collect();
    sort_articles(&mut rows, &page.sort);
    Ok(page_of(rows, page))
  }

  fn count_articles(&self) -> Result<u64> {
    Ok(self.articles.len() as u64)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn seed() -> Tables {
    let sol = Principal::new("sol", "Ssol");
    let now = crate::util::now();
    let mut tables = Tables::default();
    tables.insert_user(UserAccount {
      user_id: "sol".to_string(),
      nickname: "Ssol".to_string(),
      email: None,
      memo: None,
      audit: AuditFields::new(&sol, now),
    }).unwrap();
    for (title, content) in &[
      ("spring boot guide", "getting started #spring"),
      ("jpa tips", "entity mapping #jpa"),
      ("Rust ownership", "borrowing rules"),
    ] {
      tables.insert_article(NewArticle {
        user_id: "sol".to_string(),
        title: title.to_string(),
        content: content.to_string(),
        audit: AuditFields::new(&sol, now),
      }).unwrap();
    }
    let spring = tables.create_hashtag("spring", &sol).unwrap();
    let mut article = tables.find_article(1).unwrap().unwrap();
    article.hashtag_ids.insert(spring.id);
    tables.save_article(&article).unwrap();
    tables
  }

  fn titles(page: &Page<Article>) -> Vec<&str> {
    page.content.iter().map(|a| a.title.as_str()).collect()
  }

  #[test]
  fn ids_are_assigned_in_sequence() {
    let tables = seed();
    assert_eq!(tables.count_articles().unwrap(), 3);
    assert_eq!(tables.find_article(3).unwrap().unwrap().title, "Rust ownership");
  }

  #[test]
  fn title_filter_ignores_case() {
    let tables = seed();
    let page = tables.find_article_page(
      &ArticleFilter::TitleContains("Spring".to_string()), &PageRequest::default()).unwrap();
    assert_eq!(titles(&page), vec!["spring boot guide"]);
  }

  #[test]
  fn nickname_filter_resolves_author() {
    let tables = seed();
    let page = tables.find_article_page(
      &ArticleFilter::AuthorNicknameContains("ssol".to_string()), &PageRequest::default()).unwrap();
    assert_eq!(page.total_elements, 3);
  }

  #[test]
  fn hashtag_filter_matches_membership() {
    let tables = seed();
    let page = tables.find_article_page(
      &ArticleFilter::HashtagNamed("spring".to_string()), &PageRequest::default()).unwrap();
    assert_eq!(titles(&page), vec!["spring boot guide"]);

    // content mentions #jpa but no membership exists
    let page = tables.find_article_page(
      &ArticleFilter::HashtagNamed("jpa".to_string()), &PageRequest::default()).unwrap();
    assert!(page.is_empty());
  }

  #[test]
  fn saving_unknown_article_is_not_found() {
    let mut tables = seed();
    let mut article = tables.find_article(1).unwrap().unwrap();
    article.id = 99;
    assert!(tables.save_article(&article).unwrap_err().is_not_found());
    assert!(tables.delete_article(99).unwrap_err().is_not_found());
  }
}
