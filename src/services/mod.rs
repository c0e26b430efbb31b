use log::*;

use crate::error::*;
use crate::app::*;
use crate::db::DbService;
use crate::forms::*;
use crate::models::*;

pub mod hashtag;
pub mod search;
pub mod pagination;

mod user;
mod article;
mod comment;
pub use self::{
  user::UserService,
  article::ArticleService,
  comment::CommentService,
  pagination::PaginationService,
  search::SearchDispatcher,
};

pub trait Service {
  /// Load Service config from AppConfig.
  fn load_app_config(&mut self, config: &AppConfig) -> Result<()>;
}

/// Every board service, sharing one `DbService`.
#[derive(Clone)]
pub struct Services {
  pub db: DbService,
  pub user: UserService,
  pub article: ArticleService,
  pub comment: CommentService,
  pub pagination: PaginationService,
}

impl Services {
  fn new(db: DbService) -> Result<Services> {
    Ok(Services {
      user: UserService::new(db.clone()),
      article: ArticleService::new(db.clone())?,
      comment: CommentService::new(db.clone()),
      pagination: PaginationService::default(),
      db,
    })
  }

  /// Load Service config from AppConfig.
  pub fn load_app_config(&mut self, config: &AppConfig) -> Result<()> {
    info!("Loading UserService config");
    self.user.load_app_config(config)?;
    info!("Loading ArticleService config");
    self.article.load_app_config(config)?;
    info!("Loading CommentService config");
    self.comment.load_app_config(config)?;
    info!("Loading PaginationService config");
    self.pagination.load_app_config(config)?;
    Ok(())
  }

  /// One page of a (possibly filtered) listing with its page-number bar.
  pub fn list_articles(&self, req: &ArticleSearch) -> Result<ArticleListing> {
    let page = self.pagination.page_request(req.page, req.size);
    let articles = self.article.search_articles(
      req.search_type, req.search_value.as_deref(), &page)?;
    let pagination_bar_numbers = self.pagination.bar_numbers(page.page, articles.total_pages());

    Ok(ArticleListing {
      articles,
      pagination_bar_numbers,
      search_types: SearchType::ALL.iter().copied().map(SearchTypeOption::from).collect(),
    })
  }
}

pub fn config_services(config: &AppConfig, db: DbService) -> Result<Services> {
  let mut services = Services::new(db)?;
  services.load_app_config(config)?;
  Ok(services)
}
