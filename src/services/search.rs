use log::*;

use std::collections::HashMap;

use crate::error::*;
use crate::models::*;
use crate::util::non_blank;
use crate::db::{ArticleFilter, ArticleStore};

use super::hashtag::normalize_name;

/// Builds the listing filter for a non-blank keyword, or `None` when the
/// keyword can match nothing.
pub type FilterBuilder = fn(&str) -> Option<ArticleFilter>;

fn title_filter(keyword: &str) -> Option<ArticleFilter> {
  Some(ArticleFilter::TitleContains(keyword.to_string()))
}

fn content_filter(keyword: &str) -> Option<ArticleFilter> {
  Some(ArticleFilter::ContentContains(keyword.to_string()))
}

fn author_id_filter(keyword: &str) -> Option<ArticleFilter> {
  Some(ArticleFilter::AuthorIdContains(keyword.to_string()))
}

fn author_nickname_filter(keyword: &str) -> Option<ArticleFilter> {
  Some(ArticleFilter::AuthorNicknameContains(keyword.to_string()))
}

fn hashtag_filter(keyword: &str) -> Option<ArticleFilter> {
  normalize_name(keyword).ok().map(ArticleFilter::HashtagNamed)
}

fn unfiltered(_keyword: &str) -> Option<ArticleFilter> {
  Some(ArticleFilter::All)
}

lazy_static! {
  static ref SEARCH_FILTERS: HashMap<SearchType, FilterBuilder> = {
    let mut filters = HashMap::new();
    filters.insert(SearchType::Title, title_filter as FilterBuilder);
    filters.insert(SearchType::Content, content_filter as FilterBuilder);
    filters.insert(SearchType::AuthorId, author_id_filter as FilterBuilder);
    filters.insert(SearchType::AuthorNickname, author_nickname_filter as FilterBuilder);
    filters.insert(SearchType::Hashtag, hashtag_filter as FilterBuilder);
    filters.insert(SearchType::None, unfiltered as FilterBuilder);
    filters
  };
}

/// Maps a search type + keyword onto an `ArticleStore` listing.
#[derive(Clone)]
pub struct SearchDispatcher {
  filters: HashMap<SearchType, FilterBuilder>,
}

impl SearchDispatcher {
  pub fn new() -> Result<Self> {
    Self::with_filters(SEARCH_FILTERS.clone())
  }

  /// Fails unless every `SearchType` has a filter.
  pub fn with_filters(filters: HashMap<SearchType, FilterBuilder>) -> Result<Self> {
    let missing: Vec<&str> = SearchType::ALL.iter()
      .filter(|t| !filters.contains_key(*t))
      .map(|t| t.name())
      .collect();
    if !missing.is_empty() {
      return Err(Error::Configuration(format!("no search filter for: {}", missing.join(", "))));
    }
    Ok(Self { filters })
  }

  /// Filter for `search_type`, or `None` when the listing should be empty.
  pub fn filter_for(&self, search_type: SearchType, keyword: Option<&str>) -> Result<Option<ArticleFilter>> {
    let keyword = match non_blank(keyword) {
      Some(keyword) => keyword,
      // no hashtag matches nothing.
      None if search_type == SearchType::Hashtag => return Ok(None),
      None => return Ok(Some(ArticleFilter::All)),
    };
    let build = self.filters.get(&search_type)
      .ok_or_else(|| Error::Configuration(format!("no search filter for: {}", search_type)))?;
    Ok(build(keyword))
  }

  pub fn dispatch<S>(
    &self,
    store: &S,
    search_type: SearchType,
    keyword: Option<&str>,
    page: &PageRequest,
  ) -> Result<Page<Article>>
  where
    S: ArticleStore + ?Sized,
  {
    match self.filter_for(search_type, keyword)? {
      Some(filter) => {
        debug!("dispatch: type={}, filter={:?}, page={}", search_type, filter, page.page);
        store.find_article_page(&filter, page)
      },
      None => {
        debug!("dispatch: type={}: no usable keyword, empty page", search_type);
        Ok(Page::empty(page))
      },
    }
  }
}
