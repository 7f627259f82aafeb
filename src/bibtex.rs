//! Bibtex output generation.
//!
//! A small hand-written writer: entries are aggregated under their citation
//! keys and rendered to a `.bib` document. Inserting a key twice overwrites
//! the earlier entry in place, which is exactly how the unversioned draft
//! alias resolves to the latest version.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::BibEntry;

/// An aggregate of bibliography entries keyed by citation key.
#[derive(Debug, Default)]
pub struct BibliographyData {
    entries: Vec<(String, BibEntry)>,
}

impl BibliographyData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under a citation key.
    ///
    /// A duplicate key overwrites the earlier entry while keeping its
    /// original position.
    pub fn insert(&mut self, key: String, entry: BibEntry) {
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = entry;
        } else {
            self.entries.push((key, entry));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BibEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Render the aggregate as a bibtex document.
    pub fn to_bibtex(&self) -> String {
        let mut output = String::new();
        for (i, (key, entry)) in self.entries.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            render_entry(&mut output, key, entry);
        }
        output
    }

    /// Write the bibtex document to a file.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_bibtex())?;
        Ok(())
    }
}

/// Render one entry block.
fn render_entry(output: &mut String, key: &str, entry: &BibEntry) {
    output.push_str(&format!("@{}{{{}", entry.entry_type, key));
    if !entry.authors.is_empty() {
        let authors: Vec<String> = entry.authors.iter().map(|p| p.to_bibtex()).collect();
        output.push_str(&format!(",\n    author = {{{}}}", authors.join(" and ")));
    }
    for (name, value) in &entry.fields {
        output.push_str(&format!(",\n    {name} = {{{value}}}"));
    }
    output.push_str("\n}\n");
}
