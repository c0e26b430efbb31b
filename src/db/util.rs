use std::cmp::Ordering;

use crate::models::*;

fn compare_field(a: &Article, b: &Article, field: SortField) -> Ordering {
  match field {
    SortField::CreatedAt => a.audit.created_at.cmp(&b.audit.created_at),
    SortField::ModifiedAt => a.audit.modified_at.cmp(&b.audit.modified_at),
    SortField::Title => a.title.cmp(&b.title),
    SortField::UserId => a.user_id.cmp(&b.user_id),
  }
}

/// Sort articles by `sort`, breaking ties by id in the same direction.
pub fn sort_articles(articles: &mut Vec<Article>, sort: &Sort) {
  articles.sort_by(|a, b| {
    let ord = compare_field(a, b, sort.field).then_with(|| a.id.cmp(&b.id));
    match sort.direction {
      Direction::Asc => ord,
      Direction::Desc => ord.reverse(),
    }
  });
}

/// Slice already-sorted rows into the requested page.
pub fn page_of<T>(rows: Vec<T>, request: &PageRequest) -> Page<T> {
  let total = rows.len() as u64;
  let content = rows.into_iter()
    .skip(request.offset())
    .take(request.size as usize)
    .collect();
  Page::new(content, request, total)
}

#[cfg(test)]
mod tests {
  use super::*;

  use chrono::Duration;

  fn article(id: ArticleId, title: &str, minutes: i64) -> Article {
    let actor = Principal::new("sol", "Ssol");
    let created = chrono::NaiveDate::from_ymd_opt(2022, 11, 3).unwrap().and_hms_opt(12, 0, 0).unwrap() + Duration::minutes(minutes);
    Article {
      id,
      user_id: "sol".to_string(),
      title: title.to_string(),
      content: "content".to_string(),
      hashtag_ids: Default::default(),
      audit: AuditFields::new(&actor, created),
    }
  }

  #[test]
  fn default_sort_is_newest_first() {
    let mut rows = vec![article(1, "a", 0), article(2, "b", 10), article(3, "c", 5)];
    sort_articles(&mut rows, &Sort::default());
    let ids: Vec<_> = rows.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
  }

  #[test]
  fn ties_break_on_id() {
    let mut rows = vec![article(2, "a", 0), article(1, "a", 0)];
    sort_articles(&mut rows, &Sort { field: SortField::Title, direction: Direction::Asc });
    let ids: Vec<_> = rows.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2]);
  }

  #[test]
  fn page_of_slices_and_counts() {
    let page = page_of((0..25).collect::<Vec<u32>>(), &PageRequest::of(2, 10));
    assert_eq!(page.content, vec![20, 21, 22, 23, 24]);
    assert_eq!(page.total_elements, 25);
    assert_eq!(page.total_pages(), 3);
  }

  #[test]
  fn page_past_the_end_is_empty() {
    let page = page_of(vec![1, 2, 3], &PageRequest::of(5, 10));
    assert!(page.is_empty());
    assert_eq!(page.total_elements, 3);
  }
}
