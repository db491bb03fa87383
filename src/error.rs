//! Error types for the fallible parsing entry points.
//!
//! Lookups never fail; only explicit parsing of regions and language tags
//! can return an [`Error`].

use thiserror::Error;

/// Result type for regionlang parsing operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The input is not an assigned ISO 3166-1 or UN M.49 region code
    #[error("Invalid region: '{0}'")]
    InvalidRegion(String),

    /// The input is not a well-formed language tag
    #[error("Invalid language tag '{tag}': {source}")]
    InvalidTag {
        tag: String,
        #[source]
        source: unic_langid::LanguageIdentifierError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_region_message() {
        let err = Error::InvalidRegion("EN".to_string());
        assert_eq!(err.to_string(), "Invalid region: 'EN'");
    }

    #[test]
    fn test_invalid_tag_has_source() {
        let source = "!!".parse::<unic_langid::LanguageIdentifier>().unwrap_err();
        let err = Error::InvalidTag {
            tag: "!!".to_string(),
            source,
        };

        assert!(err.to_string().starts_with("Invalid language tag '!!'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
