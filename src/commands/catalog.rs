use crate::cli::{Cli, Commands};
use crate::domain::models::{CheatsheetSummary, CheckItem, ExportReport, ValidateReport};
use crate::services::export::export_dir;
use crate::services::loader::{load_dir, LoadReport};
use crate::services::output::{print_one, print_out};

fn failure_items(report: &LoadReport) -> Vec<CheckItem> {
    report
        .failures
        .iter()
        .map(|e| CheckItem {
            path: e.path().to_string_lossy().to_string(),
            status: e.to_string(),
        })
        .collect()
}

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    let report = load_dir(&cli.dir)?;

    match &cli.command {
        Commands::List => {
            let items: Vec<CheatsheetSummary> =
                report.loaded.iter().map(CheatsheetSummary::from).collect();
            print_out(cli.json, report.is_clean(), &items, |s| {
                format!(
                    "{}\t{}\t{}\t{} categories\t{} entries",
                    s.keyword, s.docset_file_name, s.title, s.categories, s.entries
                )
            })?;
        }
        Commands::Show { keyword } => {
            let loaded = report
                .find_by_keyword(keyword)
                .ok_or_else(|| anyhow::anyhow!("cheatsheet not found: {}", keyword))?;
            print_one(cli.json, report.is_clean(), &loaded.cheatsheet, |sheet| {
                let mut lines = vec![
                    format!("{} ({})", sheet.title(), sheet.keyword()),
                    sheet.introduction().to_string(),
                    format!("source: {}", sheet.source_url()),
                ];
                for category in sheet.categories() {
                    lines.push(String::new());
                    lines.push(format!("[{}]", category.id()));
                    for entry in category.entries() {
                        lines.push(match entry.notes() {
                            Some(notes) => {
                                format!("{}\t{}\t({})", entry.command(), entry.name(), notes)
                            }
                            None => format!("{}\t{}", entry.command(), entry.name()),
                        });
                    }
                }
                if !sheet.notes().is_empty() {
                    lines.push(String::new());
                    lines.push(sheet.notes().to_string());
                }
                lines
            })?;
        }
        Commands::Validate => {
            let mut checks: Vec<CheckItem> = report
                .loaded
                .iter()
                .map(|l| CheckItem {
                    path: l.path.to_string_lossy().to_string(),
                    status: "ok".to_string(),
                })
                .collect();
            checks.extend(failure_items(&report));
            checks.sort_by(|a, b| a.path.cmp(&b.path));
            let overall = if report.is_clean() { "ok" } else { "failed" };
            let data = ValidateReport {
                overall: overall.to_string(),
                checks,
            };
            print_one(cli.json, report.is_clean(), data, |r| {
                let mut lines = vec![format!("declarations: {}", r.overall)];
                lines.extend(r.checks.iter().map(|c| format!("{}\t{}", c.path, c.status)));
                lines
            })?;
            if !report.is_clean() {
                std::process::exit(1);
            }
        }
        Commands::Export { out } => {
            let written = export_dir(&report, out)?;
            let data = ExportReport {
                written: written
                    .iter()
                    .map(|p| p.to_string_lossy().to_string())
                    .collect(),
                failed: failure_items(&report),
            };
            print_one(cli.json, report.is_clean(), data, |r| {
                let mut lines: Vec<String> =
                    r.written.iter().map(|p| format!("wrote {}", p)).collect();
                lines.extend(r.failed.iter().map(|c| format!("failed {}", c.status)));
                lines
            })?;
            if !report.is_clean() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
