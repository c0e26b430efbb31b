use crate::error::*;
use crate::app::*;
use crate::models::*;

pub const DEFAULT_BAR_LENGTH: u32 = 5;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

/// Page numbers to show around `current_page`.
///
/// The window keeps `current_page` centered and is truncated, not
/// re-centered, near either end of the page range.
pub fn window(current_page: u32, total_pages: u32, window_length: u32) -> Vec<u32> {
  let start = current_page.saturating_sub(window_length / 2);
  let end = start.saturating_add(window_length).min(total_pages);
  (start..end).collect()
}

#[derive(Debug, Clone)]
pub struct PaginationService {
  bar_length: u32,
  page_size: u32,
  max_page_size: u32,
}

impl Default for PaginationService {
  fn default() -> Self {
    Self {
      bar_length: DEFAULT_BAR_LENGTH,
      page_size: DEFAULT_PAGE_SIZE,
      max_page_size: DEFAULT_MAX_PAGE_SIZE,
    }
  }
}

impl super::Service for PaginationService {
  fn load_app_config(&mut self, config: &AppConfig) -> Result<()> {
    self.bar_length = config.get_positive("pagination.bar_length", DEFAULT_BAR_LENGTH)?;
    self.page_size = config.get_positive("pagination.page_size", DEFAULT_PAGE_SIZE)?;
    self.max_page_size = config.get_positive("pagination.max_page_size", DEFAULT_MAX_PAGE_SIZE)?;
    if self.page_size > self.max_page_size {
      return Err(Error::Configuration(format!(
        "pagination.page_size ({}) exceeds pagination.max_page_size ({})",
        self.page_size, self.max_page_size)));
    }
    Ok(())
  }
}

impl PaginationService {
  pub fn bar_numbers(&self, current_page: u32, total_pages: u32) -> Vec<u32> {
    window(current_page, total_pages, self.bar_length)
  }

  pub fn current_bar_length(&self) -> u32 {
    self.bar_length
  }

  /// Page request with the configured default size, clamped to `[1, max_page_size]`.
  pub fn page_request(&self, page: Option<u32>, size: Option<u32>) -> PageRequest {
    let size = size.unwrap_or(self.page_size).max(1).min(self.max_page_size);
    PageRequest::of(page.unwrap_or(0), size)
  }
}
