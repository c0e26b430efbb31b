use crate::error::*;
use crate::models::*;

pub mod util;

mod user;
mod article;
mod comment;
mod hashtag;

mod service;
pub use service::*;

/// Listing predicate handed to `ArticleStore::find_article_page`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
  All,
  TitleContains(String),
  ContentContains(String),
  AuthorIdContains(String),
  AuthorNicknameContains(String),
  /// Exact match on a normalized hashtag name.
  HashtagNamed(String),
}

pub trait ArticleStore {
  fn find_article(&self, id: ArticleId) -> Result<Option<Article>>;

  /// Insert a new article, assigning its id.
  fn insert_article(&mut self, article: NewArticle) -> Result<Article>;

  /// Overwrite an existing article.
  fn save_article(&mut self, article: &Article) -> Result<()>;

  fn delete_article(&mut self, id: ArticleId) -> Result<()>;

  fn find_article_page(&self, filter: &ArticleFilter, page: &PageRequest) -> Result<Page<Article>>;

  fn count_articles(&self) -> Result<u64>;
}

pub trait HashtagStore {
  fn find_hashtag_by_name(&self, name: &str) -> Result<Option<Hashtag>>;

  fn find_hashtag(&self, id: HashtagId) -> Result<Option<Hashtag>>;

  /// Create a hashtag. Names are unique.
  fn create_hashtag(&mut self, name: &str, actor: &Principal) -> Result<Hashtag>;

  fn count_referencing_articles(&self, id: HashtagId) -> Result<u64>;

  fn delete_hashtag(&mut self, id: HashtagId) -> Result<()>;

  /// All hashtag names in ascending order.
  fn hashtag_names(&self) -> Result<Vec<String>>;
}

pub trait CommentStore {
  fn find_comment(&self, id: CommentId) -> Result<Option<ArticleComment>>;

  fn insert_comment(&mut self, comment: NewComment) -> Result<ArticleComment>;

  fn save_comment(&mut self, comment: &ArticleComment) -> Result<()>;

  fn delete_comment(&mut self, id: CommentId) -> Result<()>;

  /// Comments of one article, newest first.
  fn comments_by_article(&self, article_id: ArticleId) -> Result<Vec<ArticleComment>>;

  fn delete_comments_by_article(&mut self, article_id: ArticleId) -> Result<u64>;
}

pub trait UserStore {
  fn find_user(&self, user_id: &str) -> Result<Option<UserAccount>>;

  fn insert_user(&mut self, user: UserAccount) -> Result<()>;
}

/// Every store a board service needs.
pub trait Store: ArticleStore + HashtagStore + CommentStore + UserStore {}

impl<T: ArticleStore + HashtagStore + CommentStore + UserStore> Store for T {}
