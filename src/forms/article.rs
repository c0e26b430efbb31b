use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::models::*;

pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_CONTENT_LENGTH: usize = 10_000;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSearch {
  pub search_type: Option<SearchType>,
  pub search_value: Option<String>,
  pub page: Option<u32>,
  pub size: Option<u32>,
}

/// A page of articles plus the page-number bar to render under it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListing {
  pub articles: Page<ArticleDetails>,
  pub pagination_bar_numbers: Vec<u32>,
  pub search_types: Vec<SearchTypeOption>,
}

/// One entry of the search type selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchTypeOption {
  pub search_type: SearchType,
  pub description: String,
}

impl From<SearchType> for SearchTypeOption {
  fn from(search_type: SearchType) -> Self {
    SearchTypeOption {
      search_type,
      description: search_type.description().to_string(),
    }
  }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateArticle {
  pub title: String,
  pub content: String,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateArticle {
  pub title: Option<String>,
  pub content: Option<String>,
}

pub fn validate_title(title: &str) -> Result<()> {
  validate_text("title", title, MAX_TITLE_LENGTH)
}

pub fn validate_content(content: &str) -> Result<()> {
  validate_text("content", content, MAX_CONTENT_LENGTH)
}

pub fn validate_text(field: &str, val: &str, max_len: usize) -> Result<()> {
  if val.trim().is_empty() {
    return Err(Error::validation(field, "must not be empty"));
  }
  if val.chars().count() > max_len {
    return Err(Error::validation(field, &format!("must be at most {} characters", max_len)));
  }
  Ok(())
}

impl CreateArticle {
  pub fn validate(&self) -> Result<()> {
    validate_title(&self.title)?;
    validate_content(&self.content)
  }
}

impl UpdateArticle {
  pub fn validate(&self) -> Result<()> {
    if let Some(title) = &self.title {
      validate_title(title)?;
    }
    if let Some(content) = &self.content {
      validate_content(content)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use assert_matches::assert_matches;

  #[test]
  fn blank_title_is_rejected() {
    let form = CreateArticle {
      title: "   ".to_string(),
      content: "content #java".to_string(),
    };
    assert_matches!(form.validate(), Err(Error::Validation(_)));
  }

  #[test]
  fn oversized_content_is_rejected() {
    let form = UpdateArticle {
      title: None,
      content: Some("x".repeat(MAX_CONTENT_LENGTH + 1)),
    };
    assert_matches!(form.validate(), Err(Error::Validation(_)));
  }

  #[test]
  fn partial_update_validates_present_fields_only() {
    let form = UpdateArticle {
      title: Some("new title".to_string()),
      content: None,
    };
    assert!(form.validate().is_ok());
  }
}
