use log::*;

use serde::de::Deserialize;

use config::{Config, ConfigError, Value, File, Environment};

use dotenv::dotenv;

use crate::error::*;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub conf: Config
}

impl AppConfig {
  /// Load defaults, an optional config file, then `BOARD__*` environment overrides.
  pub fn new(config_file: Option<&str>) -> Result<Self> {
    dotenv().ok();

    let mut conf = Self::defaults()?;
    if let Some(config_file) = config_file {
      info!("Loading board config from: {}", config_file);
      conf.merge(File::with_name(config_file))?;
    } else {
      // Get RUN_MODE from environment
      let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
      conf.merge(File::with_name(&format!("conf/{}", env)).required(false))?;
    }

    // Allow overrides from environment
    conf.merge(Environment::with_prefix("board").separator("__"))?;

    Ok(AppConfig {
      conf,
    })
  }

  /// Only the built-in defaults.
  pub fn with_defaults() -> Result<Self> {
    Ok(AppConfig {
      conf: Self::defaults()?,
    })
  }

  fn defaults() -> Result<Config> {
    let mut conf = Config::default();
    conf.set_default("pagination.bar_length", 5i64)?;
    conf.set_default("pagination.page_size", 10i64)?;
    conf.set_default("pagination.max_page_size", 100i64)?;
    conf.set_default("article.allow_update", true)?;
    conf.set_default("article.allow_delete", true)?;
    conf.set_default("comment.max_length", 500i64)?;
    Ok(conf)
  }

  /// Override a single key, mostly useful for tests and embedding.
  pub fn set<T: Into<Value>>(&mut self, key: &str, value: T) -> Result<()> {
    self.conf.set(key, value)?;
    Ok(())
  }

  pub fn get<'de, T: Deserialize<'de>>(&self, key: &'de str) -> Result<Option<T>> {
    Ok(self.conf.get(key).map(Some).or_else(|e| {
      match e {
        ConfigError::NotFound(_) => Ok(None),
        err => Err(err),
      }
    })?)
  }

  pub fn get_int(&self, key: &str) -> Result<Option<i64>> {
    let val = if let Some(val) = self.get(key)? {
      Some(Value::into_int(val)?)
    } else {
      None
    };
    Ok(val)
  }

  pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
    let val = if let Some(val) = self.get(key)? {
      Some(Value::into_bool(val)?)
    } else {
      None
    };
    Ok(val)
  }

  /// Positive integer setting, falling back to `default` when unset.
  pub fn get_positive(&self, key: &str, default: u32) -> Result<u32> {
    match self.get_int(key)? {
      None => Ok(default),
      Some(val) if val > 0 && val <= u32::MAX as i64 => Ok(val as u32),
      Some(val) => Err(Error::Configuration(format!("{} must be > 0, got {}", key, val))),
    }
  }
}
