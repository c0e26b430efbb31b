use serde::Serialize;
use serde_json::{json, Value as JsonValue};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  // referenced entity is missing.
  #[error("not found: {0}")]
  NotFound(JsonValue),

  // actor may not mutate the entity.
  #[error("forbidden: {0}")]
  Forbidden(JsonValue),

  // invalid input value.
  #[error("validation failed: {0}")]
  Validation(JsonValue),

  // a defect in the wiring, not user input.
  #[error("configuration error: {0}")]
  Configuration(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("config error")]
  ConfigError {
    #[from]
    source: config::ConfigError,
  },

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

impl Error {
  pub fn not_found<T: Serialize>(entity: &str, id: T) -> Self {
    Error::NotFound(json!({
      "entity": entity,
      "id": id,
    }))
  }

  pub fn forbidden<T: Serialize>(entity: &str, id: T, actor: &str) -> Self {
    Error::Forbidden(json!({
      "entity": entity,
      "id": id,
      "actor": actor,
    }))
  }

  pub fn validation(field: &str, message: &str) -> Self {
    Error::Validation(json!({
      "field": field,
      "message": message,
    }))
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::NotFound(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
