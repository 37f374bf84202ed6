//! Resolution of file configuration and command-line overrides into the
//! settings of one run.

use std::path::PathBuf;

use crate::{Config, Error, Mode, Result};

/// Page size used in bundle mode when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Values given on the command line. Each one replaces the file's value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub mode: Option<Mode>,
    pub page_size: Option<u32>,
    pub auth_header: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub output_file: Option<PathBuf>,
    pub input_dir: Option<PathBuf>,
}

/// How requests authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Anonymous,
    /// Opaque `Authorization` header value.
    Header(String),
    Basic { username: String, password: String },
}

/// Where schema records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote {
        base_url: String,
        mode: Mode,
        page_size: u32,
        credentials: Credentials,
    },
    /// A directory holding `Entity.ndjson` and `Attribute.ndjson`.
    Local { dir: PathBuf },
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: Source,
    pub output: PathBuf,
}

impl Config {
    /// Merge command-line overrides into this configuration.
    pub fn resolve(self, overrides: Overrides) -> Result<Settings> {
        let output = overrides
            .output_file
            .or(self.output.file)
            .ok_or_else(|| {
                Error::missing(
                    "output file",
                    "pass --output-file or set [output] file in aidts.toml",
                )
            })?;

        if let Some(dir) = overrides.input_dir {
            return Ok(Settings {
                source: Source::Local { dir },
                output,
            });
        }

        let base_url = overrides
            .base_url
            .or_else(|| self.server.base_url.map(|u| u.into_inner()))
            .ok_or_else(|| {
                Error::missing(
                    "base URL",
                    "pass --base-url, set [server] base_url in aidts.toml, or read a local snapshot with --input-dir",
                )
            })?;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::invalid(format!(
                "base URL '{}' must start with http:// or https://",
                base_url
            )));
        }

        let page_size = overrides
            .page_size
            .or_else(|| self.server.page_size.map(|s| s.into_inner()))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(Error::invalid("page size must be positive"));
        }

        let header = overrides.auth_header.or(self.auth.header);
        let username = overrides.username.or(self.auth.username);
        let password = overrides.password.or(self.auth.password);
        let credentials = match (header, username, password) {
            (Some(header), _, _) => Credentials::Header(header),
            (None, Some(username), Some(password)) => Credentials::Basic { username, password },
            (None, None, None) => Credentials::Anonymous,
            (None, _, _) => {
                return Err(Error::invalid(
                    "username and password must be given together",
                ));
            }
        };

        Ok(Settings {
            source: Source::Remote {
                base_url: base_url.trim_end_matches('/').to_string(),
                mode: overrides.mode.or(self.server.mode).unwrap_or(Mode::Dump),
                page_size,
                credentials,
            },
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(src: &str) -> Config {
        src.parse().expect("valid config")
    }

    fn remote(settings: Settings) -> (String, Mode, u32, Credentials) {
        match settings.source {
            Source::Remote {
                base_url,
                mode,
                page_size,
                credentials,
            } => (base_url, mode, page_size, credentials),
            Source::Local { .. } => panic!("expected remote source"),
        }
    }

    #[test]
    fn test_defaults_from_flags_only() {
        let settings = Config::default()
            .resolve(Overrides {
                base_url: Some("http://localhost:8888/".to_string()),
                output_file: Some(PathBuf::from("aidbox.ts")),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(settings.output, PathBuf::from("aidbox.ts"));
        let (base_url, mode, page_size, credentials) = remote(settings);
        assert_eq!(base_url, "http://localhost:8888");
        assert_eq!(mode, Mode::Dump);
        assert_eq!(page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(credentials, Credentials::Anonymous);
    }

    #[test]
    fn test_flags_override_file() {
        let file = config(
            r#"
            [server]
            base_url = "http://file:8888"
            mode = "bundle"
            page_size = 50
            [output]
            file = "from-file.ts"
            "#,
        );
        let settings = file
            .resolve(Overrides {
                base_url: Some("https://flag".to_string()),
                page_size: Some(10),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(settings.output, PathBuf::from("from-file.ts"));
        let (base_url, mode, page_size, _) = remote(settings);
        assert_eq!(base_url, "https://flag");
        assert_eq!(mode, Mode::Bundle);
        assert_eq!(page_size, 10);
    }

    #[test]
    fn test_header_wins_over_basic() {
        let file = config(
            r#"
            [server]
            base_url = "http://localhost"
            [auth]
            username = "root"
            password = "secret"
            [output]
            file = "out.ts"
            "#,
        );
        let settings = file
            .resolve(Overrides {
                auth_header: Some("Bearer abc".to_string()),
                ..Default::default()
            })
            .unwrap();
        let (_, _, _, credentials) = remote(settings);
        assert_eq!(credentials, Credentials::Header("Bearer abc".to_string()));
    }

    #[test]
    fn test_basic_credentials() {
        let settings = Config::default()
            .resolve(Overrides {
                base_url: Some("http://localhost".to_string()),
                username: Some("root".to_string()),
                password: Some("secret".to_string()),
                output_file: Some(PathBuf::from("out.ts")),
                ..Default::default()
            })
            .unwrap();
        let (_, _, _, credentials) = remote(settings);
        assert_eq!(
            credentials,
            Credentials::Basic {
                username: "root".to_string(),
                password: "secret".to_string()
            }
        );
    }

    #[test]
    fn test_input_dir_needs_no_base_url() {
        let settings = Config::default()
            .resolve(Overrides {
                input_dir: Some(PathBuf::from("snapshot")),
                output_file: Some(PathBuf::from("out.ts")),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            settings.source,
            Source::Local {
                dir: PathBuf::from("snapshot")
            }
        );
    }

    #[test]
    fn test_missing_values() {
        let err = Config::default().resolve(Overrides::default()).unwrap_err();
        assert!(matches!(*err, Error::Missing { ref what, .. } if what == "output file"));

        let err = Config::default()
            .resolve(Overrides {
                output_file: Some(PathBuf::from("out.ts")),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(*err, Error::Missing { ref what, .. } if what == "base URL"));
    }

    #[test]
    fn test_invalid_flag_values() {
        let base = Overrides {
            output_file: Some(PathBuf::from("out.ts")),
            ..Default::default()
        };

        let err = Config::default()
            .resolve(Overrides {
                base_url: Some("localhost".to_string()),
                ..base.clone()
            })
            .unwrap_err();
        assert!(matches!(*err, Error::Invalid { .. }));

        let err = Config::default()
            .resolve(Overrides {
                base_url: Some("http://localhost".to_string()),
                username: Some("root".to_string()),
                ..base
            })
            .unwrap_err();
        assert!(matches!(*err, Error::Invalid { .. }));
    }
}
