use crate::domain::declaration::{CheatsheetDecl, DeclarationError};
use crate::domain::models::{Cheatsheet, LoadedCheatsheet};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DECLARATION_EXTENSION: &str = "toml";

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("{}: cannot list declarations: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: cannot read declaration: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: malformed declaration: {source}", .path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{}: malformed declaration: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: DeclarationError,
    },
    #[error("{}: duplicate keyword `{keyword}` (already declared by {})", .path.display(), .first.display())]
    DuplicateKeyword {
        path: PathBuf,
        keyword: String,
        first: PathBuf,
    },
    #[error("{}: duplicate docset file name `{docset_file_name}` (already declared by {})", .path.display(), .first.display())]
    DuplicateDocsetFileName {
        path: PathBuf,
        docset_file_name: String,
        first: PathBuf,
    },
}

impl LoadError {
    /// The file (or directory) the failure belongs to.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::ReadDir { path, .. }
            | LoadError::Read { path, .. }
            | LoadError::Syntax { path, .. }
            | LoadError::Malformed { path, .. }
            | LoadError::DuplicateKeyword { path, .. }
            | LoadError::DuplicateDocsetFileName { path, .. } => path,
        }
    }
}

/// Outcome of loading one directory. Each declaration file ends up in
/// exactly one of the two lists.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<LoadedCheatsheet>,
    pub failures: Vec<LoadError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn cheatsheets(&self) -> impl Iterator<Item = &Cheatsheet> {
        self.loaded.iter().map(|l| &l.cheatsheet)
    }

    pub fn find_by_keyword(&self, keyword: &str) -> Option<&LoadedCheatsheet> {
        self.loaded.iter().find(|l| l.cheatsheet.keyword() == keyword)
    }
}

pub fn declaration_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let read_dir_err = |source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some(DECLARATION_EXTENSION)
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn load_file(path: &Path) -> Result<Cheatsheet, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let decl: CheatsheetDecl = toml::from_str(&raw).map_err(|source| LoadError::Syntax {
        path: path.to_path_buf(),
        source,
    })?;
    decl.build().map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Default)]
struct Claims {
    keywords: HashMap<String, PathBuf>,
    docset_file_names: HashMap<String, PathBuf>,
}

impl Claims {
    /// First file to claim a keyword or docset file name keeps it. File
    /// names compare case-insensitively since exports land on disk.
    fn claim(&mut self, path: &Path, sheet: &Cheatsheet) -> Result<(), LoadError> {
        if let Some(first) = self.keywords.get(sheet.keyword()) {
            return Err(LoadError::DuplicateKeyword {
                path: path.to_path_buf(),
                keyword: sheet.keyword().to_string(),
                first: first.clone(),
            });
        }
        let file_key = sheet.docset_file_name().to_lowercase();
        if let Some(first) = self.docset_file_names.get(&file_key) {
            return Err(LoadError::DuplicateDocsetFileName {
                path: path.to_path_buf(),
                docset_file_name: sheet.docset_file_name().to_string(),
                first: first.clone(),
            });
        }
        self.keywords.insert(sheet.keyword().to_string(), path.to_path_buf());
        self.docset_file_names.insert(file_key, path.to_path_buf());
        Ok(())
    }
}

/// Loads every declaration in `dir`. Only a failure to list the directory
/// is fatal; per-file failures are collected in the report.
pub fn load_dir(dir: &Path) -> Result<LoadReport, LoadError> {
    let files = declaration_files(dir)?;
    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered declarations");

    let mut report = LoadReport::default();
    let mut claims = Claims::default();
    for path in files {
        let loaded = load_file(&path).and_then(|sheet| {
            claims.claim(&path, &sheet)?;
            Ok(sheet)
        });
        match loaded {
            Ok(cheatsheet) => {
                tracing::debug!(
                    path = %path.display(),
                    keyword = cheatsheet.keyword(),
                    entries = cheatsheet.entry_count(),
                    "loaded cheatsheet"
                );
                report.loaded.push(LoadedCheatsheet { path, cheatsheet });
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping declaration");
                report.failures.push(e);
            }
        }
    }
    Ok(report)
}
