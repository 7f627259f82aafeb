//! Bibliography sources.
//!
//! Two source kinds exist: the RFC index XML feed and the BibXML
//! Internet-Draft collection. Both implement the [`Source`] trait.

pub mod bibxml_ids;
pub mod rfc_index;

pub use bibxml_ids::BibxmlIdsSource;
pub use rfc_index::RfcIndexSource;

use crate::error::Result;
use crate::types::BibEntry;

/// A bibliography source.
pub trait Source {
    /// The remote resource of the bibliography source.
    fn remote(&self) -> &str;

    /// Collect all valid entries of the bibliography source.
    ///
    /// Entries are produced by a single forward pass over the underlying
    /// input, in source order. Malformed records are logged and skipped;
    /// failures of the input as a whole (unreachable remote, failed sync)
    /// are fatal and returned as `Err`.
    fn iterate_entries(&self) -> Result<Vec<(String, BibEntry)>>;
}
