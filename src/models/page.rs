use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
  CreatedAt,
  ModifiedAt,
  Title,
  UserId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Asc,
  Desc,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sort {
  pub field: SortField,
  pub direction: Direction,
}

impl Default for Sort {
  fn default() -> Self {
    Sort {
      field: SortField::CreatedAt,
      direction: Direction::Desc,
    }
  }
}

/// Zero-based page number, page size and sort order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
  pub page: u32,
  pub size: u32,
  pub sort: Sort,
}

impl Default for PageRequest {
  fn default() -> Self {
    PageRequest::of(0, DEFAULT_PAGE_SIZE)
  }
}

impl PageRequest {
  pub fn of(page: u32, size: u32) -> Self {
    PageRequest {
      page,
      size,
      sort: Sort::default(),
    }
  }

  pub fn sorted(mut self, field: SortField, direction: Direction) -> Self {
    self.sort = Sort { field, direction };
    self
  }

  pub fn offset(&self) -> usize {
    self.page as usize * self.size as usize
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
  pub content: Vec<T>,
  pub page: u32,
  pub size: u32,
  pub total_elements: u64,
}

impl<T> Page<T> {
  pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
    Page {
      content,
      page: request.page,
      size: request.size,
      total_elements,
    }
  }

  pub fn empty(request: &PageRequest) -> Self {
    Page::new(Vec::new(), request, 0)
  }

  pub fn total_pages(&self) -> u32 {
    if self.size == 0 {
      return 0;
    }
    let size = self.size as u64;
    ((self.total_elements + size - 1) / size) as u32
  }

  pub fn is_empty(&self) -> bool {
    self.content.is_empty()
  }

  pub fn try_map<U, E, F>(self, f: F) -> Result<Page<U>, E>
  where
    F: FnMut(T) -> Result<U, E>,
  {
    Ok(Page {
      content: self.content.into_iter().map(f).collect::<Result<Vec<U>, E>>()?,
      page: self.page,
      size: self.size,
      total_elements: self.total_elements,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_request_is_newest_first() {
    let req = PageRequest::default();
    assert_eq!(req.page, 0);
    assert_eq!(req.size, DEFAULT_PAGE_SIZE);
    assert_eq!(req.sort.field, SortField::CreatedAt);
    assert_eq!(req.sort.direction, Direction::Desc);
  }

  #[test]
  fn total_pages_rounds_up() {
    let req = PageRequest::of(0, 10);
    assert_eq!(Page::<u32>::new(vec![], &req, 0).total_pages(), 0);
    assert_eq!(Page::<u32>::new(vec![], &req, 10).total_pages(), 1);
    assert_eq!(Page::<u32>::new(vec![], &req, 125).total_pages(), 13);
  }

  #[test]
  fn offset_is_page_times_size() {
    assert_eq!(PageRequest::of(3, 20).offset(), 60);
  }
}
