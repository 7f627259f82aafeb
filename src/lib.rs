//! ietfbib2bibtex - Generate bibtex files from IETF bibliography sources.
//!
//! This crate converts two IETF bibliographic source formats into
//! bibtex-format bibliography files: the RFC index XML feed
//! (`rfc-index.xml`) and the BibXML Internet-Draft collection mirrored over
//! rsync. For each draft series the latest version is additionally emitted
//! under an unversioned alias key.
//!
//! # Example
//!
//! ```
//! use ietfbib2bibtex::sources::rfc_index::parse_index;
//!
//! let xml = r#"<rfc-index xmlns="http://www.rfc-editor.org/rfc-index">
//!   <rfc-entry>
//!     <doc-id>RFC0781</doc-id>
//!     <title>Specification of the Internet Protocol (IP) timestamp option</title>
//!     <author><name>Z. Su</name></author>
//!     <date><month>May</month><year>1981</year></date>
//!   </rfc-entry>
//! </rfc-index>"#;
//!
//! let entries = parse_index(xml).unwrap();
//! assert_eq!(entries[0].0, "RFC-781");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration file loading and validation
//! - [`types`]: Core data types (BibEntry, Person)
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for fetching the RFC index
//! - [`sync`]: rsync wrapper for mirroring the BibXML collection
//! - [`xml`]: XML utilities
//! - [`sources`]: The two bibliography source extractors
//! - [`bibtex`]: Bibtex aggregation and output
//! - [`bib`]: Per-bibliography orchestration
//! - [`cli`]: Command-line interface

pub mod bib;
pub mod bibtex;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod sources;
pub mod sync;
pub mod types;
pub mod xml;

// Re-export main functions
pub use bib::{create_all_bibtexs, Bib};

// Re-export commonly used items
pub use bibtex::BibliographyData;
pub use config::Config;
pub use error::{BibError, Result};
pub use types::{BibEntry, Person};
