//! Runtime configuration, layered from defaults, an optional TOML file and
//! the environment.
//!
//! | Source | Example |
//! |--------|---------|
//! | built-in defaults | `port = 8000` |
//! | TOML file (`--config`) | `store_path = "~/dies.db"` |
//! | `DIECOMPARE_*` variables | `DIECOMPARE_ALLOWED_ORIGINS=https://a,https://b` |
//! | `FRONTEND_URL` | appended to the allowed origins |

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STORE_PATH: &str = "./die_compare.db";
pub const DEFAULT_ORIGINS: [&str; 3] = [
  "http://localhost:3000",
  "http://localhost:5173",
  "http://localhost:8000",
];

/// Server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  pub store_path:      PathBuf,
  /// Origins allowed to make cross-origin requests.
  pub allowed_origins: Vec<String>,
  /// Deployed frontend origin, allowed in addition to `allowed_origins`.
  #[serde(default)]
  pub frontend_url:    Option<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            DEFAULT_HOST.to_owned(),
      port:            DEFAULT_PORT,
      store_path:      PathBuf::from(DEFAULT_STORE_PATH),
      allowed_origins: DEFAULT_ORIGINS.iter().map(|o| (*o).to_owned()).collect(),
      frontend_url:    None,
    }
  }
}

impl ServerConfig {
  /// Load configuration from `path` (optional) and the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("store_path", DEFAULT_STORE_PATH)?
      .set_default("allowed_origins", DEFAULT_ORIGINS.to_vec())?
      .add_source(File::from(path).required(false))
      .add_source(
        Environment::with_prefix("DIECOMPARE")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("allowed_origins"),
      )
      .set_override_option("frontend_url", std::env::var("FRONTEND_URL").ok())?
      .build()?
      .try_deserialize()
  }

  /// Every origin allowed by CORS: the configured list plus `frontend_url`.
  pub fn origins(&self) -> Vec<String> {
    self
      .allowed_origins
      .iter()
      .chain(self.frontend_url.iter())
      .cloned()
      .collect()
  }

  /// `host:port`, ready for binding.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `store_path` with a leading `~/` expanded to the home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
