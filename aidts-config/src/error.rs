use std::{ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Boxed so that `Result` stays small on the happy path.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A configuration file's name and text, for errors that point into it.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    fn source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.text.clone())
    }

    /// The file is not valid TOML or does not match the expected tables.
    pub fn syntax(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Syntax {
            src: self.source(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    /// A well-formed value that is not acceptable, optionally located.
    pub fn reject(&self, message: impl Into<String>, at: Option<Range<usize>>) -> Box<Error> {
        Box::new(Error::Value {
            src: self.source(),
            span: at.map(SourceSpan::from),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot read configuration '{path}'")]
    #[diagnostic(code(aidts::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration")]
    #[diagnostic(code(aidts::config::syntax))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(aidts::config::value))]
    Value {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("no {what} configured")]
    #[diagnostic(code(aidts::config::missing), help("{hint}"))]
    Missing { what: String, hint: String },

    #[error("{message}")]
    #[diagnostic(code(aidts::config::invalid))]
    Invalid { message: String },
}

impl Error {
    pub fn missing(what: impl Into<String>, hint: impl Into<String>) -> Box<Self> {
        Box::new(Error::Missing {
            what: what.into(),
            hint: hint.into(),
        })
    }

    pub fn invalid(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Invalid {
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_with_span() {
        let doc = Document::new("aidts.toml", "page_size = 0\n");
        let err = doc.reject("page_size must be positive", Some(12..13));
        match *err {
            Error::Value { span, message, .. } => {
                let span = span.unwrap();
                assert_eq!((span.offset(), span.len()), (12, 1));
                assert_eq!(message, "page_size must be positive");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_has_help() {
        let err = Error::missing("base URL", "pass --base-url");
        assert_eq!(err.to_string(), "no base URL configured");
        assert_eq!(err.help().map(|h| h.to_string()).as_deref(), Some("pass --base-url"));
    }
}
