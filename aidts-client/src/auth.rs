use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::HeaderValue;

use crate::FetchError;

/// Request authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Auth {
    #[default]
    None,
    /// Sent verbatim as the `Authorization` header.
    Header(String),
    /// `Basic base64(username:password)`.
    Basic { username: String, password: String },
}

impl Auth {
    /// The `Authorization` header value, if any.
    pub fn header_value(&self) -> Result<Option<HeaderValue>, FetchError> {
        let raw = match self {
            Auth::None => return Ok(None),
            Auth::Header(value) => value.clone(),
            Auth::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
            }
        };
        let mut value = HeaderValue::from_str(&raw)?;
        value.set_sensitive(true);
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header() {
        let auth = Auth::Basic {
            username: "root".to_string(),
            password: "secret".to_string(),
        };
        let value = auth.header_value().unwrap().unwrap();
        assert_eq!(value.to_str().unwrap(), "Basic cm9vdDpzZWNyZXQ=");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_opaque_header() {
        let auth = Auth::Header("Bearer token".to_string());
        assert_eq!(
            auth.header_value().unwrap().unwrap().to_str().unwrap(),
            "Bearer token"
        );
    }

    #[test]
    fn test_anonymous() {
        assert_eq!(Auth::default(), Auth::None);
        assert!(Auth::None.header_value().unwrap().is_none());
    }

    #[test]
    fn test_invalid_header_value() {
        let auth = Auth::Header("bad\nvalue".to_string());
        assert!(matches!(auth.header_value(), Err(FetchError::InvalidHeader(_))));
    }
}
