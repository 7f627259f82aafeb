//! Orchestration: one bibliography from source to `.bib` file.

use std::path::{Path, PathBuf};

use crate::bibtex::BibliographyData;
use crate::config::{BibConfig, Config};
use crate::error::{BibError, Result};
use crate::sources::{BibxmlIdsSource, RfcIndexSource, Source};

/// One configured bibliography bound to its source.
pub struct Bib {
    name: String,
    path: PathBuf,
    source: Box<dyn Source>,
}

impl Bib {
    /// Build a bibliography from its configuration.
    ///
    /// # Arguments
    /// * `bib_config` - The bibliography's configuration
    /// * `bib_path` - Output directory (default: working directory)
    ///
    /// # Errors
    /// When no source or both sources are configured. Validated
    /// configurations never trigger this.
    pub fn new(bib_config: &BibConfig, bib_path: Option<&Path>) -> Result<Self> {
        let source: Box<dyn Source> = match (&bib_config.rfc_index, &bib_config.bibxml_ids) {
            (Some(rfc_index), None) => Box::new(RfcIndexSource::new(rfc_index)),
            (None, Some(bibxml_ids)) => Box::new(BibxmlIdsSource::new(bibxml_ids)),
            (Some(_), Some(_)) => return Err(BibError::AmbiguousSource(bib_config.name.clone())),
            (None, None) => return Err(BibError::NoSource(bib_config.name.clone())),
        };
        Ok(Self {
            name: bib_config.name.clone(),
            path: bib_path.unwrap_or(Path::new(".")).to_path_buf(),
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bibliography's source.
    pub fn source(&self) -> &dyn Source {
        self.source.as_ref()
    }

    /// The `.bib` file this bibliography is written to.
    pub fn output_path(&self) -> PathBuf {
        self.path.join(format!("{}.bib", self.name))
    }

    /// Generate the bibliography: collect all entries and write the file.
    ///
    /// Duplicate citation keys overwrite earlier entries in the aggregate;
    /// the unversioned draft alias relies on this to end up pointing at the
    /// latest version.
    pub fn create_bibtex(&self) -> Result<PathBuf> {
        tracing::info!(bib = %self.name, remote = %self.source.remote(), "checking out bibliography");

        let mut data = BibliographyData::new();
        for (key, entry) in self.source.iterate_entries()? {
            data.insert(key, entry);
        }

        let output_path = self.output_path();
        tracing::debug!(bib = %self.name, path = %output_path.display(), entries = data.len(), "storing bibliography");
        data.to_file(&output_path)?;
        Ok(output_path)
    }
}

/// Generate every configured bibliography.
///
/// Bibliographies are processed independently: a failure is logged and does
/// not stop the remaining ones. `report` is called with each bibliography's
/// outcome (the CLI uses this for styled per-bibliography output). If any
/// bibliography failed, the error reports how many.
pub fn create_all_bibtexs(
    config: &Config,
    mut report: impl FnMut(&BibConfig, &Result<PathBuf>),
) -> Result<()> {
    let mut failures = 0;
    for bib_config in &config.bibs {
        let result = Bib::new(bib_config, config.bibpath.as_deref())
            .and_then(|bib| bib.create_bibtex());
        match &result {
            Ok(path) => {
                tracing::info!(bib = %bib_config.name, path = %path.display(), "bibliography written");
            }
            Err(e) => {
                tracing::error!(bib = %bib_config.name, error = %e, "failed to generate bibliography");
                failures += 1;
            }
        }
        report(bib_config, &result);
    }
    if failures > 0 {
        return Err(BibError::PartialFailure(failures));
    }
    Ok(())
}
