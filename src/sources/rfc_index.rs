//! Source for the RFC index XML feed (`rfc-index.xml`).

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Document;

use crate::config::RfcIndexConfig;
use crate::error::Result;
use crate::http;
use crate::sources::Source;
use crate::types::{BibEntry, Person};
use crate::xml;

/// Pattern matching an RFC doc-id, capturing the number without leading
/// zeros. Entries whose doc-id does not match (e.g. bare `BCP0195`
/// cross-reference stubs) carry no metadata and are skipped.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOC_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^RFC0*([1-9][0-9]*)").expect("valid regex"));

/// `rfc-index.xml` source.
pub struct RfcIndexSource {
    remote: String,
}

impl RfcIndexSource {
    pub fn new(config: &RfcIndexConfig) -> Self {
        Self {
            remote: config.remote.clone(),
        }
    }
}

impl Source for RfcIndexSource {
    fn remote(&self) -> &str {
        &self.remote
    }

    fn iterate_entries(&self) -> Result<Vec<(String, BibEntry)>> {
        let client = http::create_client()?;
        let xml = http::download_string(&client, &self.remote)?;
        parse_index(&xml)
    }
}

/// Extract entries from an RFC index document.
///
/// Iterates every `rfc-entry` element in document order and yields one
/// normalized `(key, entry)` pair per valid RFC, with the key in
/// `RFC-<number>` form (leading zeros stripped): `RFC0781` becomes
/// `RFC-781`.
///
/// Entries without a valid RFC doc-id are skipped; any other missing
/// metadata makes the whole index malformed and is fatal.
pub fn parse_index(xml: &str) -> Result<Vec<(String, BibEntry)>> {
    let doc = Document::parse(xml)?;
    let mut entries = Vec::new();

    for element in doc.descendants().filter(|n| xml::has_tag(*n, "rfc-entry")) {
        let Some(doc_id) = xml::child_text(element, "doc-id") else {
            tracing::debug!("rfc-entry without doc-id, skipping");
            continue;
        };
        let Some(captures) = DOC_ID_PATTERN.captures(&doc_id) else {
            // erroneous tagging
            tracing::debug!(doc_id, "doc-id is not an RFC, skipping");
            continue;
        };
        let number = captures[1].to_string();

        let title = xml::require_text(element, "title", &doc_id)?;
        let date = xml::require_child(element, "date", &doc_id)?;
        let month = xml::require_text(date, "month", &doc_id)?;
        let year = xml::require_text(date, "year", &doc_id)?;

        let mut entry = BibEntry::techreport();
        entry.field("title", format!("{{{title}}}"));
        entry.field("institution", "IETF");
        entry.field("type", "RFC");
        entry.field("number", number.clone());
        entry.field("month", month);
        entry.field("year", year);
        for author in xml::find_children(element, "author") {
            let name = xml::require_text(author, "name", &doc_id)?;
            entry.authors.push(Person::parse(&name)?);
        }

        entries.push((format!("RFC-{number}"), entry));
    }

    Ok(entries)
}
