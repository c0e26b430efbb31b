use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::*;

/// Dimension an article listing is filtered on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchType {
  Title,
  Content,
  AuthorId,
  AuthorNickname,
  Hashtag,
  None,
}

impl SearchType {
  pub const ALL: [SearchType; 6] = [
    SearchType::Title,
    SearchType::Content,
    SearchType::AuthorId,
    SearchType::AuthorNickname,
    SearchType::Hashtag,
    SearchType::None,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      SearchType::Title => "TITLE",
      SearchType::Content => "CONTENT",
      SearchType::AuthorId => "AUTHOR_ID",
      SearchType::AuthorNickname => "AUTHOR_NICKNAME",
      SearchType::Hashtag => "HASHTAG",
      SearchType::None => "NONE",
    }
  }

  /// Label shown in search forms.
  pub fn description(&self) -> &'static str {
    match self {
      SearchType::Title => "title",
      SearchType::Content => "content",
      SearchType::AuthorId => "user id",
      SearchType::AuthorNickname => "nickname",
      SearchType::Hashtag => "hashtag",
      SearchType::None => "all",
    }
  }
}

impl fmt::Display for SearchType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for SearchType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let s = s.trim();
    SearchType::ALL.iter()
      .find(|t| t.name().eq_ignore_ascii_case(s))
      .copied()
      .ok_or_else(|| Error::BadRequest(format!("unknown search type: {}", s)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use assert_matches::assert_matches;

  #[test]
  fn parses_names_case_insensitively() {
    assert_eq!("TITLE".parse::<SearchType>().unwrap(), SearchType::Title);
    assert_eq!("author_nickname".parse::<SearchType>().unwrap(), SearchType::AuthorNickname);
    assert_eq!(" hashtag ".parse::<SearchType>().unwrap(), SearchType::Hashtag);
  }

  #[test]
  fn unknown_name_is_bad_request() {
    assert_matches!("TAGS".parse::<SearchType>(), Err(Error::BadRequest(_)));
  }

  #[test]
  fn display_round_trips_through_parse() {
    for t in SearchType::ALL.iter() {
      assert_eq!(t.to_string().parse::<SearchType>().unwrap(), *t);
    }
  }

  #[test]
  fn every_type_has_a_label() {
    assert_eq!(SearchType::AuthorNickname.description(), "nickname");
    assert!(SearchType::ALL.iter().all(|t| !t.description().is_empty()));
  }

  #[test]
  fn serializes_as_screaming_snake_case() {
    let json = serde_json::to_string(&SearchType::AuthorId).unwrap();
    assert_eq!(json, r#""AUTHOR_ID""#);
  }
}
