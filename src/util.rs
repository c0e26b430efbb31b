use chrono::NaiveDateTime;

/// Current UTC time used for audit fields.
pub fn now() -> NaiveDateTime {
  chrono::Utc::now().naive_utc()
}

/// Trimmed keyword, or `None` when absent or blank.
pub fn non_blank(val: Option<&str>) -> Option<&str> {
  val.map(str::trim).filter(|v| !v.is_empty())
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
pub fn init_test_logging() {
  let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_keywords_are_none() {
    assert_eq!(non_blank(None), None);
    assert_eq!(non_blank(Some("")), None);
    assert_eq!(non_blank(Some("  \t")), None);
    assert_eq!(non_blank(Some(" spring ")), Some("spring"));
  }

  #[test]
  fn contains_ignores_case() {
    assert!(contains_ignore_case("spring boot guide", "Spring"));
    assert!(contains_ignore_case("Spring Boot Guide", "BOOT"));
    assert!(!contains_ignore_case("spring boot guide", "jpa"));
  }
}
