use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use toml::Spanned;

use crate::{Document, Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "aidts.toml";

/// How schema records are retrieved from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Bulk newline-delimited JSON export per collection.
    Dump,
    /// Paginated search bundles.
    Bundle,
}

/// Root of `aidts.toml`.
///
/// Every value is optional here; command-line flags fill in or override them
/// before the run settings are resolved.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub output: OutputConfig,
}

/// `[server]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub base_url: Option<Spanned<String>>,
    pub mode: Option<Mode>,
    pub page_size: Option<Spanned<u32>>,
}

/// `[auth]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    /// Full `Authorization` header value.
    pub header: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// `[output]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub file: Option<PathBuf>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a configuration file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Read {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse configuration from a string with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let doc = Document::new(filename, content);
        let config: Self = toml::from_str(content).map_err(|e| doc.syntax(e))?;
        config.validate(&doc)?;
        Ok(config)
    }

    /// Load the explicitly named file, or `aidts.toml` in `dir` if present.
    ///
    /// Without either, an empty configuration is returned.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let default = dir.join(CONFIG_FILE);
        if default.is_file() {
            Self::from_file(default)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self, doc: &Document) -> Result<()> {
        if let Some(url) = &self.server.base_url {
            let value = url.get_ref();
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(doc.reject(
                    "base_url must start with http:// or https://",
                    Some(url.span()),
                ));
            }
        }
        if let Some(size) = &self.server.page_size
            && *size.get_ref() == 0
        {
            return Err(doc.reject("page_size must be positive", Some(size.span())));
        }
        if self.auth.username.is_some() != self.auth.password.is_some() {
            return Err(doc.reject("[auth] username and password must be given together", None));
        }
        Ok(())
    }
}
