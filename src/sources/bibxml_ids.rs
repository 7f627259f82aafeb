//! Source for the BibXML Internet-Draft collection.
//!
//! The collection is mirrored from an rsync address into a local directory
//! of per-version reference files (`draft-...-NN.xml`). Besides one entry
//! per draft version, the scan emits one unversioned alias entry per draft
//! series carrying the latest version's data.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Document;

use crate::config::BibxmlIdsConfig;
use crate::error::Result;
use crate::sources::Source;
use crate::sync;
use crate::types::{BibEntry, Person};
use crate::xml;

/// Pattern matching file names with a numeric suffix before `.xml`,
/// the filesystem equivalent of the `*[0-9].xml` glob.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VERSIONED_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]\.xml$").expect("valid regex"));

/// Pattern splitting a draft name into its series name and the trailing
/// two-digit version, e.g. `draft-foo-07` into `draft-foo` and `07`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)-(\d{2})$").expect("valid regex"));

/// BibXML Internet-Draft source (e.g. `rsync.ietf.org::bibxml-ids`).
pub struct BibxmlIdsSource {
    remote: String,
    local: PathBuf,
}

/// One successfully parsed draft file.
struct ParsedDraft {
    versioned: String,
    unversioned: String,
    entry: BibEntry,
}

impl BibxmlIdsSource {
    pub fn new(config: &BibxmlIdsConfig) -> Self {
        Self {
            remote: config.remote.clone(),
            local: config.local.clone(),
        }
    }

    /// The local mirror directory.
    pub fn local(&self) -> &Path {
        &self.local
    }

    /// Scan the local mirror without synchronizing first.
    ///
    /// Files are visited in lexicographically ascending name order, which
    /// guarantees versions of the same draft series arrive in increasing
    /// version order. The scan carries a one-slot lookback: when the series
    /// changes, the previous series' final entry is emitted once more under
    /// its unversioned name, and the last pending entry is flushed after the
    /// loop. For a series with versions 00 and 01 the result is
    /// `(draft-x-00, v00)`, `(draft-x-01, v01)`, `(draft-x, v01)`.
    ///
    /// Files that fail XML parsing or lack the required metadata are logged
    /// and skipped. A missing local directory yields zero entries.
    pub fn scan_local(&self) -> Result<Vec<(String, BibEntry)>> {
        let dir = match fs::read_dir(&self.local) {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut filenames: Vec<PathBuf> = Vec::new();
        for dir_entry in dir {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }
            if VERSIONED_FILE.is_match(&dir_entry.file_name().to_string_lossy()) {
                filenames.push(dir_entry.path());
            }
        }
        filenames.sort();

        let mut entries = Vec::new();
        let mut pending: Option<(String, BibEntry)> = None;
        for filename in &filenames {
            let Some(draft) = parse_draft_file(filename)? else {
                continue;
            };
            if let Some((last_unversioned, last_entry)) = pending.take() {
                if last_unversioned != draft.unversioned {
                    entries.push((last_unversioned, last_entry));
                }
            }
            entries.push((draft.versioned, draft.entry.clone()));
            pending = Some((draft.unversioned, draft.entry));
        }
        if let Some((unversioned, entry)) = pending {
            entries.push((unversioned, entry));
        }

        Ok(entries)
    }
}

impl Source for BibxmlIdsSource {
    fn remote(&self) -> &str {
        &self.remote
    }

    fn iterate_entries(&self) -> Result<Vec<(String, BibEntry)>> {
        sync::mirror(&self.remote, &self.local)?;
        self.scan_local()
    }
}

/// Parse one BibXML reference file.
///
/// Returns `Ok(None)` for files that must be skipped: XML syntax errors,
/// missing `seriesInfo`/`front` metadata, and author names that fail person
/// parsing (the whole file is skipped, never a partial entry). File read
/// errors are fatal.
fn parse_draft_file(filename: &Path) -> Result<Option<ParsedDraft>> {
    // Invalid bytes in the mirrored files are tolerated; broken markup isn't.
    let bytes = fs::read(filename)?;
    let text = String::from_utf8_lossy(&bytes);

    let doc = match Document::parse(&text) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::error!(file = %filename.display(), error = %e, "ignoring file with XML syntax error");
            return Ok(None);
        }
    };
    let root = doc.root_element();

    let series_info = xml::find_child(root, "seriesInfo");
    let front = xml::find_child(root, "front");
    let (Some(series_info), Some(front)) = (series_info, front) else {
        tracing::error!(file = %filename.display(), "ignoring file without seriesInfo/front");
        return Ok(None);
    };

    let (Some(value), Some(series_name)) =
        (series_info.attribute("value"), series_info.attribute("name"))
    else {
        tracing::error!(file = %filename.display(), "ignoring file with incomplete seriesInfo");
        return Ok(None);
    };

    // Without a trailing -NN version both fall back to the full draft name.
    let (unversioned, number) = match VERSION_SUFFIX.captures(value) {
        Some(captures) => (captures[1].to_string(), captures[2].to_string()),
        None => (value.to_string(), value.to_string()),
    };

    let title = xml::child_text(front, "title");
    let date = xml::find_child(front, "date");
    let (Some(title), Some(date)) = (title, date) else {
        tracing::error!(file = %filename.display(), "ignoring file without title/date");
        return Ok(None);
    };
    let (Some(month), Some(year)) = (date.attribute("month"), date.attribute("year")) else {
        tracing::error!(file = %filename.display(), "ignoring file with incomplete date");
        return Ok(None);
    };

    let entry_type = if series_name == "Internet-Draft" {
        format!("{series_name} -- work in progress")
    } else {
        series_name.to_string()
    };

    let mut entry = BibEntry::techreport();
    entry.field("title", format!("{{{title}}}"));
    entry.field("institution", "IETF");
    entry.field("type", entry_type);
    entry.field("number", number);
    entry.field("month", month);
    entry.field("year", year);

    for author in xml::find_children(front, "author") {
        let fullname = author.attribute("fullname").unwrap_or_default();
        match Person::parse(fullname) {
            Ok(person) => entry.authors.push(person),
            Err(e) => {
                tracing::error!(file = %filename.display(), error = %e, "ignoring file with invalid author fullname");
                return Ok(None);
            }
        }
    }

    Ok(Some(ParsedDraft {
        versioned: value.to_string(),
        unversioned,
        entry,
    }))
}
