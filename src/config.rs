//! Configuration file loading and validation.
//!
//! The configuration is a YAML file declaring an optional global output
//! directory and a list of bibliographies, each with exactly one source:
//!
//! ```yaml
//! bibpath: ./bib
//! bibs:
//!   - name: rfcs
//!     rfc_index:
//!       remote: https://www.rfc-editor.org/rfc-index.xml
//!   - name: ids
//!     bibxml_ids:
//!       remote: rsync.ietf.org::bibxml-ids
//!       local: ./bibxml-ids
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BibError, Result};

/// Default configuration file path when `--config-file` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Source for the RFC index XML feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RfcIndexConfig {
    /// HTTP(S) URL of the `rfc-index.xml` document.
    pub remote: String,
}

/// Source for the BibXML Internet-Draft collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BibxmlIdsConfig {
    /// rsync address of the BibXML mirror.
    pub remote: String,

    /// Local directory the mirror is synchronized into.
    pub local: PathBuf,
}

/// One configured bibliography.
///
/// Exactly one of `rfc_index` and `bibxml_ids` must be set; this is
/// enforced by [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BibConfig {
    /// Name of the bibliography, used as the output file stem.
    pub name: String,

    #[serde(default)]
    pub rfc_index: Option<RfcIndexConfig>,

    #[serde(default)]
    pub bibxml_ids: Option<BibxmlIdsConfig>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Directory the `.bib` files are written to (default: working directory).
    #[serde(default)]
    pub bibpath: Option<PathBuf>,

    /// The bibliographies to generate.
    #[serde(default)]
    pub bibs: Vec<BibConfig>,
}

impl Config {
    /// Load and validate a configuration file.
    ///
    /// # Arguments
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Returns
    /// The validated configuration, or an error if the file cannot be read,
    /// parsed, or fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Config =
            serde_yaml_ng::from_str(&text).map_err(|source| BibError::ConfigParse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the default configuration file ([`DEFAULT_CONFIG_FILE`]).
    ///
    /// Unlike an explicitly given file, a missing default file is only a
    /// warning and yields an empty configuration. Any other failure
    /// propagates.
    pub fn from_default_file() -> Result<Self> {
        match Self::from_file(Path::new(DEFAULT_CONFIG_FILE)) {
            Err(BibError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("{DEFAULT_CONFIG_FILE} not found, using empty configuration");
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Validate source declarations.
    ///
    /// Each bibliography must declare exactly one source, and an RFC index
    /// remote must be an HTTP(S) URL.
    pub fn validate(&self) -> Result<()> {
        for bib in &self.bibs {
            match (&bib.rfc_index, &bib.bibxml_ids) {
                (Some(_), Some(_)) => return Err(BibError::AmbiguousSource(bib.name.clone())),
                (None, None) => return Err(BibError::NoSource(bib.name.clone())),
                (Some(rfc_index), None) => validate_http_remote(&rfc_index.remote)?,
                (None, Some(_)) => {}
            }
        }
        Ok(())
    }
}

/// Validate that a remote is an HTTP(S) URL.
fn validate_http_remote(remote: &str) -> Result<()> {
    if remote.starts_with("http:") || remote.starts_with("https:") {
        Ok(())
    } else {
        Err(BibError::InvalidRemote(remote.to_string()))
    }
}
