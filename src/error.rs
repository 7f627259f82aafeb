//! Error types for the bibliography generator.
//!
//! One library-wide error enum with detailed context per failure mode,
//! plus a `Result` alias.

use thiserror::Error;

/// Main error type for the bibliography generator.
#[derive(Debug, Error)]
pub enum BibError {
    /// A bibliography declares no source at all.
    #[error("No source configured for bibliography '{0}'")]
    NoSource(String),

    /// A bibliography declares both sources.
    #[error("'rfc_index' and 'bibxml_ids' are mutually exclusive in bibliography '{0}'")]
    AmbiguousSource(String),

    /// The RFC index remote is not an HTTP(S) URL.
    #[error("'remote' is not a HTTP URL: '{0}'")]
    InvalidRemote(String),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// An author name that cannot be split into name parts.
    #[error("Invalid author name: '{0}'")]
    InvalidName(String),

    /// The rsync mirror operation failed.
    #[error("rsync failed: {0}")]
    Sync(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more bibliographies could not be generated.
    #[error("Failed to generate {0} of the configured bibliographies")]
    PartialFailure(usize),
}

/// Result type alias for bibliography operations.
pub type Result<T> = std::result::Result<T, BibError>;
