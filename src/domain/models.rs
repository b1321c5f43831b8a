use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One materialized cheatsheet. Built through
/// [`CheatsheetDecl::build`](crate::domain::declaration::CheatsheetDecl::build)
/// and read-only afterwards.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Cheatsheet {
    pub(crate) title: String,
    pub(crate) docset_file_name: String,
    pub(crate) keyword: String,
    pub(crate) introduction: String,
    pub(crate) source_url: String,
    pub(crate) categories: Vec<Category>,
    pub(crate) notes: String,
}

impl Cheatsheet {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn docset_file_name(&self) -> &str {
        &self.docset_file_name
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn introduction(&self) -> &str {
        &self.introduction
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> impl ExactSizeIterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Category {
    pub(crate) id: String,
    pub(crate) entries: Vec<Entry>,
}

impl Category {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &Entry> {
        self.entries.iter()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) command: String,
    pub(crate) name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) notes: Option<String>,
}

impl Entry {
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// A cheatsheet together with the declaration file it came from.
#[derive(Debug, Clone)]
pub struct LoadedCheatsheet {
    pub path: PathBuf,
    pub cheatsheet: Cheatsheet,
}

#[derive(Serialize)]
pub struct CheatsheetSummary {
    pub keyword: String,
    pub docset_file_name: String,
    pub title: String,
    pub categories: usize,
    pub entries: usize,
    pub path: String,
}

impl From<&LoadedCheatsheet> for CheatsheetSummary {
    fn from(l: &LoadedCheatsheet) -> Self {
        Self {
            keyword: l.cheatsheet.keyword.clone(),
            docset_file_name: l.cheatsheet.docset_file_name.clone(),
            title: l.cheatsheet.title.clone(),
            categories: l.cheatsheet.categories.len(),
            entries: l.cheatsheet.entry_count(),
            path: l.path.to_string_lossy().to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct CheckItem {
    pub path: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct ValidateReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}

#[derive(Serialize)]
pub struct ExportReport {
    pub written: Vec<String>,
    pub failed: Vec<CheckItem>,
}
