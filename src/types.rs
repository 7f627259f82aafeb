//! Core data types: person names and bibliography entries.

use crate::error::{BibError, Result};

/// A person name split into its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub first_names: Vec<String>,
    pub middle_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl Person {
    /// Parse a free-text full name.
    ///
    /// The name is split on whitespace: the first token becomes the given
    /// name, the last token the family name, and interior tokens the middle
    /// names. A single token is a family name only.
    ///
    /// # Errors
    /// [`BibError::InvalidName`] when the name is empty or contains more than
    /// two comma-separated parts.
    ///
    /// # Examples
    /// ```
    /// use ietfbib2bibtex::types::Person;
    ///
    /// let person = Person::parse("Z. Su").unwrap();
    /// assert_eq!(person.first_names, vec!["Z."]);
    /// assert!(person.middle_names.is_empty());
    /// assert_eq!(person.last_names, vec!["Su"]);
    /// ```
    pub fn parse(full_name: &str) -> Result<Self> {
        let trimmed = full_name.trim();
        if trimmed.is_empty() || trimmed.matches(',').count() > 2 {
            return Err(BibError::InvalidName(full_name.to_string()));
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let Some((&first, rest)) = tokens.split_first() else {
            return Err(BibError::InvalidName(full_name.to_string()));
        };
        Ok(match rest.split_last() {
            None => Self {
                first_names: Vec::new(),
                middle_names: Vec::new(),
                last_names: vec![first.to_string()],
            },
            Some((&last, middle)) => Self {
                first_names: vec![first.to_string()],
                middle_names: middle.iter().map(|s| (*s).to_string()).collect(),
                last_names: vec![last.to_string()],
            },
        })
    }

    /// Render the name in bibtex `Family, Given Middle` form.
    pub fn to_bibtex(&self) -> String {
        let last = self.last_names.join(" ");
        let mut given: Vec<&str> = Vec::new();
        given.extend(self.first_names.iter().map(String::as_str));
        given.extend(self.middle_names.iter().map(String::as_str));
        if given.is_empty() {
            last
        } else {
            format!("{}, {}", last, given.join(" "))
        }
    }
}

/// A normalized bibliography entry.
///
/// Fields keep their insertion order so the rendered bibtex output is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BibEntry {
    /// Bibtex entry type (always `techreport` in this domain).
    pub entry_type: String,

    /// Ordered (field name, value) pairs.
    pub fields: Vec<(String, String)>,

    /// Authors in document order.
    pub authors: Vec<Person>,
}

impl BibEntry {
    /// Create an empty `techreport` entry.
    pub fn techreport() -> Self {
        Self {
            entry_type: "techreport".to_string(),
            fields: Vec::new(),
            authors: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.push((name.to_string(), value.into()));
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}
