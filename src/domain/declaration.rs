//! Declaration builders.
//!
//! The same structs back both the TOML files under `cheatsheets/` and the
//! fluent construction API, so a declaration written in Rust and one read
//! from disk go through the same `build()` checks.

use crate::domain::models::{Category, Cheatsheet, Entry};
use serde::Deserialize;
use std::fmt;

/// Where in a declaration a problem was found. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Cheatsheet,
    Category {
        index: usize,
        id: Option<String>,
    },
    Entry {
        category: usize,
        category_id: Option<String>,
        index: usize,
    },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Cheatsheet => write!(f, "cheatsheet"),
            Location::Category {
                index,
                id: Some(id),
            } => write!(f, "category {} (`{}`)", index, id),
            Location::Category { index, id: None } => write!(f, "category {}", index),
            Location::Entry {
                category,
                category_id,
                index,
            } => {
                write!(f, "entry {} of category {}", index, category)?;
                if let Some(id) = category_id {
                    write!(f, " (`{}`)", id)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("missing required field `{field}` in {location}")]
    MissingField {
        field: &'static str,
        location: Location,
    },
    #[error("field `{field}` in {location} must not be blank")]
    BlankField {
        field: &'static str,
        location: Location,
    },
    #[error("field `{field}` in {location} is invalid: {reason}")]
    InvalidField {
        field: &'static str,
        location: Location,
        reason: String,
    },
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheatsheetDecl {
    title: Option<String>,
    docset_file_name: Option<String>,
    keyword: Option<String>,
    introduction: Option<String>,
    source_url: Option<String>,
    #[serde(default, rename = "category")]
    categories: Vec<CategoryDecl>,
    notes: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryDecl {
    id: Option<String>,
    #[serde(default, rename = "entry")]
    entries: Vec<EntryDecl>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryDecl {
    command: Option<String>,
    name: Option<String>,
    notes: Option<String>,
}

fn required(
    field: &'static str,
    value: Option<String>,
    location: &Location,
) -> Result<String, DeclarationError> {
    match value {
        None => Err(DeclarationError::MissingField {
            field,
            location: location.clone(),
        }),
        Some(v) if v.trim().is_empty() => Err(DeclarationError::BlankField {
            field,
            location: location.clone(),
        }),
        Some(v) => Ok(v),
    }
}

fn invalid(field: &'static str, reason: &str) -> DeclarationError {
    DeclarationError::InvalidField {
        field,
        location: Location::Cheatsheet,
        reason: reason.to_string(),
    }
}

impl CheatsheetDecl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn docset_file_name(mut self, name: impl Into<String>) -> Self {
        self.docset_file_name = Some(name.into());
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = Some(introduction.into());
        self
    }

    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn category(mut self, category: CategoryDecl) -> Self {
        self.categories.push(category);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Validates the declaration and materializes it. Fails on the first
    /// problem found, walking fields top-down in declaration order.
    pub fn build(self) -> Result<Cheatsheet, DeclarationError> {
        let at = Location::Cheatsheet;
        let title = required("title", self.title, &at)?;
        let docset_file_name = required("docset_file_name", self.docset_file_name, &at)?;
        let keyword = required("keyword", self.keyword, &at)?;
        let introduction = required("introduction", self.introduction, &at)?;
        let source_url = required("source_url", self.source_url, &at)?;

        if keyword.chars().any(char::is_whitespace) {
            return Err(invalid("keyword", "must not contain whitespace"));
        }
        if docset_file_name.contains(['/', '\\'])
            || docset_file_name == "."
            || docset_file_name == ".."
        {
            return Err(invalid("docset_file_name", "must be a plain file name"));
        }

        let categories = self
            .categories
            .into_iter()
            .enumerate()
            .map(|(i, c)| c.build(i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cheatsheet {
            title,
            docset_file_name,
            keyword,
            introduction,
            source_url,
            categories,
            notes: self.notes.map(|n| n.trim().to_string()).unwrap_or_default(),
        })
    }
}

impl CategoryDecl {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            entries: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn entry(mut self, entry: EntryDecl) -> Self {
        self.entries.push(entry);
        self
    }

    fn build(self, index: usize) -> Result<Category, DeclarationError> {
        let at = Location::Category {
            index,
            id: self.id.clone(),
        };
        let id = required("id", self.id, &at)?;
        let entries = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(j, e)| {
                e.build(Location::Entry {
                    category: index,
                    category_id: Some(id.clone()),
                    index: j + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Category { id, entries })
    }
}

impl EntryDecl {
    pub fn new(command: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            name: Some(name.into()),
            notes: None,
        }
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    fn build(self, at: Location) -> Result<Entry, DeclarationError> {
        Ok(Entry {
            command: required("command", self.command, &at)?,
            name: required("name", self.name, &at)?,
            notes: self.notes,
        })
    }
}
