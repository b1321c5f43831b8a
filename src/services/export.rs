use crate::services::loader::LoadReport;
use std::path::{Path, PathBuf};

pub fn export_path(out_dir: &Path, docset_file_name: &str) -> PathBuf {
    out_dir.join(format!("{}.json", docset_file_name))
}

/// Writes one JSON handoff document per loaded cheatsheet. Failed
/// declarations are not written; the caller decides how to report them.
pub fn export_dir(report: &LoadReport, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();
    for sheet in report.cheatsheets() {
        let path = export_path(out_dir, sheet.docset_file_name());
        std::fs::write(&path, serde_json::to_string_pretty(sheet)?)?;
        tracing::debug!(
            path = %path.display(),
            keyword = sheet.keyword(),
            "exported cheatsheet"
        );
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::declaration::{CategoryDecl, CheatsheetDecl, EntryDecl};
    use crate::domain::models::LoadedCheatsheet;
    use tempfile::TempDir;

    #[test]
    fn writes_handoff_named_after_docset_file() {
        let cheatsheet = CheatsheetDecl::new()
            .title("My Vim Cheatsheet")
            .docset_file_name("my_vim_cheatsheet")
            .keyword("mvc")
            .introduction("Vim.")
            .source_url("https://example.com")
            .category(
                CategoryDecl::new("Customizations")
                    .entry(EntryDecl::new("<left>", "Cycle left."))
                    .entry(
                        EntryDecl::new("<Right>", "Next suggestion.").notes("Insert mode only."),
                    ),
            )
            .notes("For use with ~/.vimrc")
            .build()
            .unwrap();
        let report = LoadReport {
            loaded: vec![LoadedCheatsheet {
                path: PathBuf::from("my_vim_cheatsheet.toml"),
                cheatsheet,
            }],
            failures: vec![],
        };

        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out");
        let written = export_dir(&report, &out).unwrap();
        assert_eq!(written, vec![out.join("my_vim_cheatsheet.json")]);

        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(v["keyword"], "mvc");
        assert_eq!(v["notes"], "For use with ~/.vimrc");
        let entries = &v["categories"][0]["entries"];
        assert_eq!(entries[0]["command"], "<left>");
        assert!(entries[0].get("notes").is_none());
        assert_eq!(entries[1]["notes"], "Insert mode only.");
    }
}
