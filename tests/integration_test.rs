//! End-to-end integration tests: fixture XML in, bibtex out.
//!
//! The BibXML fixtures mirror a small slice of the real collection,
//! including one file with an empty author fullname and one with broken
//! markup, both of which must be skipped without aborting the scan.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use ietfbib2bibtex::config::{BibxmlIdsConfig, RfcIndexConfig};
use ietfbib2bibtex::sources::rfc_index::parse_index;
use ietfbib2bibtex::sources::{BibxmlIdsSource, RfcIndexSource, Source};
use ietfbib2bibtex::BibliographyData;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn bibxml_source() -> BibxmlIdsSource {
    BibxmlIdsSource::new(&BibxmlIdsConfig {
        remote: "foobar::test".to_string(),
        local: fixture_path("bibxml"),
    })
}

#[test]
fn test_rfc_index_fixture() {
    let entries = parse_index(&load_fixture("rfc-index.xml")).unwrap();

    // The bare BCP0195 stub yields no entry.
    assert_eq!(entries.len(), 2);

    let (key, entry) = &entries[0];
    assert_eq!(key, "RFC-781");
    assert_eq!(
        entry.get("title"),
        Some("{Specification of the Internet Protocol (IP) timestamp option}")
    );
    assert_eq!(entry.get("number"), Some("781"));
    assert_eq!(entry.authors.len(), 1);

    let (key, entry) = &entries[1];
    assert_eq!(key, "RFC-9325");
    assert_eq!(entry.get("month"), Some("November"));
    assert_eq!(entry.authors.len(), 3);
}

#[test]
fn test_bibxml_fixture_scan() {
    let entries = bibxml_source().scan_local().unwrap();

    let keys: Vec<&str> = entries.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "draft-ietf-core-dns-over-coap-00",
            "draft-ietf-core-dns-over-coap-01",
            "draft-ietf-core-dns-over-coap",
            "draft-lenders-dns-cns-00",
            "draft-lenders-dns-cns",
        ]
    );

    for (_, entry) in &entries {
        assert_eq!(entry.entry_type, "techreport");
        assert_eq!(entry.get("institution"), Some("IETF"));
        assert_eq!(
            entry.get("type"),
            Some("Internet-Draft -- work in progress")
        );
    }

    assert_eq!(entries[0].1.get("title"), Some("{DNS over CoAP (DoC)}"));
    assert_eq!(entries[0].1.get("number"), Some("00"));
    assert_eq!(entries[0].1.get("month"), Some("July"));
    assert_eq!(entries[0].1.authors.len(), 5);
    assert_eq!(entries[0].1.authors[0].first_names, vec!["Martine"]);
    assert_eq!(entries[0].1.authors[0].middle_names, vec!["Sophie"]);
    assert_eq!(entries[0].1.authors[0].last_names, vec!["Lenders"]);
    assert_eq!(entries[0].1.authors[1].last_names, vec!["Amsüss"]);
    assert_eq!(entries[0].1.authors[2].last_names, vec!["Gündoğan"]);
    assert_eq!(entries[0].1.authors[3].middle_names, vec!["C."]);
    assert_eq!(entries[0].1.authors[4].last_names, vec!["Wählisch"]);

    // The alias entry is the latest version's entry.
    assert_eq!(entries[2].1, entries[1].1);
    assert_eq!(entries[2].1.get("number"), Some("01"));
    assert_eq!(entries[2].1.get("month"), Some("October"));

    assert_eq!(
        entries[3].1.get("title"),
        Some("{Guidance on DNS Message Composition in Constrained Networks}")
    );
    assert_eq!(entries[3].1.authors.len(), 3);
    assert_eq!(entries[4].1, entries[3].1);
}

/// Writer collecting log output into a shared buffer.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_skipped_files_are_logged_with_filename() {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::ERROR)
        .finish();

    let entries =
        tracing::subscriber::with_default(subscriber, || bibxml_source().scan_local().unwrap());
    assert_eq!(entries.len(), 5);

    // Both the empty-fullname file and the broken-markup file are named in
    // the error log.
    let output = capture.contents();
    assert!(output.contains("draft-ietf-idn-amc-ace-v-00.xml"));
    assert!(output.contains("draft-yangcan-cloud-intelligence-web-platform-00.xml"));
}

#[test]
fn test_bibxml_fixture_scan_is_deterministic() {
    let source = bibxml_source();
    assert_eq!(source.scan_local().unwrap(), source.scan_local().unwrap());
}

#[test]
fn test_aggregate_resolves_alias_to_latest_version() {
    let entries = bibxml_source().scan_local().unwrap();

    let mut data = BibliographyData::new();
    for (key, entry) in entries {
        data.insert(key, entry);
    }

    // versioned entries + one alias per series
    assert_eq!(data.len(), 5);
    let bibtex = data.to_bibtex();
    assert!(bibtex.contains("@techreport{draft-ietf-core-dns-over-coap,"));
    assert!(bibtex.contains("author = {Lenders, Martine Sophie and Amsüss, Christian"));
    assert!(bibtex.contains("type = {Internet-Draft -- work in progress}"));
}

#[test]
fn test_write_bib_file() {
    let entries = parse_index(&load_fixture("rfc-index.xml")).unwrap();
    let mut data = BibliographyData::new();
    for (key, entry) in entries {
        data.insert(key, entry);
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rfcs.bib");
    data.to_file(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("@techreport{RFC-781,\n"));
    assert!(written.contains("    author = {Su, Z.},\n"));
    assert!(written.contains("@techreport{RFC-9325,\n"));
    assert!(written.contains("author = {Sheffer, Y. and Saint-Andre, P. and Fossati, T.}"));
    assert!(written.ends_with("}\n"));
}

#[test]
fn test_rfc_index_over_http() {
    // The blocking client must not be driven from an async context, so the
    // mock server runs on its own runtime and the source on the test thread.
    let rt = tokio::runtime::Runtime::new().unwrap();
    let index_xml = load_fixture("rfc-index.xml");
    let server = rt.block_on(async {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/rfc-index.xml"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(index_xml))
            .mount(&server)
            .await;
        server
    });

    let source = RfcIndexSource::new(&RfcIndexConfig {
        remote: format!("{}/rfc-index.xml", server.uri()),
    });
    let entries = source.iterate_entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].0, "RFC-781");
    assert_eq!(entries[1].0, "RFC-9325");
}

#[test]
fn test_rfc_index_http_error_is_fatal() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(404))
            .mount(&server)
            .await;
        server
    });

    let source = RfcIndexSource::new(&RfcIndexConfig {
        remote: format!("{}/rfc-index.xml", server.uri()),
    });
    assert!(source.iterate_entries().is_err());
}
