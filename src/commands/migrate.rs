use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::report::MigrationReport;
use crate::rewrite::{ensure_import, render_previews, FilePreview, ImportOutcome, UrlReplacer};
use crate::rules::MIGRATION_TARGETS;

#[derive(Serialize)]
struct RunOutput<'a> {
    report: &'a MigrationReport,
    previews: &'a [FilePreview],
}

pub fn run(project_root: PathBuf, preview: bool, format: &crate::OutputFormat) -> Result<()> {
    let replacer = UrlReplacer::new()?;
    let mut report = MigrationReport::new();
    let mut previews: Vec<FilePreview> = Vec::new();

    let text = matches!(format, crate::OutputFormat::Text);

    if text {
        println!("🚀 Starting URL replacement script...");
        println!("📁 Processing files...");
    }

    for relative in MIGRATION_TARGETS {
        let path = project_root.join(relative);

        if !path.exists() {
            if text {
                println!("⚠️  File not found: {}", relative);
            }
            warn!("file not found: {}", relative);
            report.add_warning(format!("file not found: {}", relative));
            report.files_skipped += 1;
            continue;
        }

        if text {
            println!("🔍 Processing: {}", relative);
        }

        if let Err(e) = process_file(
            &path,
            relative,
            &replacer,
            preview,
            text,
            &mut report,
            &mut previews,
        ) {
            if text {
                println!("  ❌ Error processing {}: {:#}", relative, e);
            }
            warn!("error processing {}: {:#}", relative, e);
            report.add_error(format!("{}: {:#}", relative, e));
        }
    }

    match format {
        crate::OutputFormat::Json => {
            let output = RunOutput {
                report: &report,
                previews: &previews,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        crate::OutputFormat::Text => {
            if preview && !previews.is_empty() {
                println!("\n{}", render_previews(&previews));
                println!("💡 Run without --preview to apply changes");
            }
            println!("{}", report.format_summary(preview));
        }
    }

    Ok(())
}

/// Read, rewrite, and (unless previewing) write back a single file. Errors
/// stay local to the file: the caller records them and moves on.
fn process_file(
    path: &Path,
    relative: &str,
    replacer: &UrlReplacer,
    preview: bool,
    text: bool,
    report: &mut MigrationReport,
    previews: &mut Vec<FilePreview>,
) -> Result<()> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    report.files_processed += 1;

    let rewrite = replacer.rewrite(&original);
    if text {
        if rewrite.changed() {
            println!("  🔄 Replaced URLs in {}", relative);
        } else {
            println!("  ✅ No URLs to replace in {}", relative);
        }
    }

    let (content, import) = ensure_import(&rewrite.content);
    match import {
        ImportOutcome::Inserted => {
            if text {
                println!("  ➕ Added API_URLS import to {}", relative);
            }
            report.imports_added += 1;
        }
        ImportOutcome::NoAnchor => {
            if text {
                println!("  ⚠️  Could not find import section in {}", relative);
            }
            report.add_warning(format!("no import section in {}", relative));
        }
        ImportOutcome::NotNeeded | ImportOutcome::AlreadyPresent => {}
    }

    // Byte equality decides whether to write; the import pass alone can
    // change content even when no URL was replaced.
    if content != original {
        if preview {
            previews.push(FilePreview::new(
                PathBuf::from(relative),
                rewrite.replacements,
                import == ImportOutcome::Inserted,
                &original,
                &content,
            ));
        } else {
            fs::write(path, &content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if text {
                println!("  ✅ Successfully updated {}", relative);
            }
        }
        report.add_modified_file(PathBuf::from(relative), rewrite.replacements);
    } else {
        if text {
            println!("  ➖ No changes needed for {}", relative);
        }
        report.files_unchanged += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SIGNUP: &str = "src/components/Signup.jsx";

    fn project_with(relative: &str, content: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        temp
    }

    fn migrate(root: &Path) -> (MigrationReport, Vec<FilePreview>) {
        migrate_mode(root, false)
    }

    fn migrate_mode(root: &Path, preview: bool) -> (MigrationReport, Vec<FilePreview>) {
        let replacer = UrlReplacer::new().unwrap();
        let mut report = MigrationReport::new();
        let mut previews = Vec::new();

        for relative in MIGRATION_TARGETS {
            let path = root.join(relative);
            if !path.exists() {
                report.add_warning(format!("file not found: {}", relative));
                report.files_skipped += 1;
                continue;
            }
            if let Err(e) = process_file(
                &path,
                relative,
                &replacer,
                preview,
                false,
                &mut report,
                &mut previews,
            ) {
                report.add_error(format!("{}: {:#}", relative, e));
            }
        }

        (report, previews)
    }

    #[test]
    fn test_rewrites_file_and_adds_import() {
        let input = concat!(
            "import React from \"react\";\n",
            "import axios from \"axios\";\n",
            "\n",
            "const signup = () => axios.post(\"http://localhost:3000/api/users/signup\");\n",
        );
        let temp = project_with(SIGNUP, input);

        let (report, _) = migrate(temp.path());

        let written = fs::read_to_string(temp.path().join(SIGNUP)).unwrap();
        assert_eq!(
            written,
            concat!(
                "import React from \"react\";\n",
                "import axios from \"axios\";\n",
                "import { API_URLS } from \"../config/server\";\n",
                "\n",
                "const signup = () => axios.post(API_URLS.USERS.SIGNUP);\n",
            )
        );
        assert_eq!(report.files_processed, 1);
        assert_eq!(report.files_skipped, 7);
        assert_eq!(report.replacements_made, 1);
        assert_eq!(report.imports_added, 1);
        assert_eq!(report.files_modified, vec![PathBuf::from(SIGNUP)]);
    }

    #[test]
    fn test_file_without_urls_is_left_byte_identical() {
        let input = "import React from \"react\";\n\nexport default () => null;\n";
        let temp = project_with(SIGNUP, input);

        let (report, _) = migrate(temp.path());

        let written = fs::read_to_string(temp.path().join(SIGNUP)).unwrap();
        assert_eq!(written, input);
        assert_eq!(report.files_unchanged, 1);
        assert_eq!(report.imports_added, 0);
        assert!(report.files_modified.is_empty());
    }

    #[test]
    fn test_url_replaced_without_anchor_still_writes_and_warns() {
        let input = "fetch(\"http://localhost:3000/api/users/login\");\n";
        let temp = project_with(SIGNUP, input);

        let (report, _) = migrate(temp.path());

        let written = fs::read_to_string(temp.path().join(SIGNUP)).unwrap();
        assert_eq!(written, "fetch(API_URLS.USERS.LOGIN);\n");
        assert!(!written.contains("config/server"));
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("no import section")));
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let input = concat!(
            "import axios from \"axios\";\n",
            "axios.get(`http://localhost:3000/api/contests/getcon/${id}`);\n",
        );
        let temp = project_with(SIGNUP, input);

        migrate(temp.path());
        let after_first = fs::read_to_string(temp.path().join(SIGNUP)).unwrap();
        assert!(after_first.contains("API_URLS.CONTESTS.GET_BY_ID(id)"));

        let (report, _) = migrate(temp.path());
        let after_second = fs::read_to_string(temp.path().join(SIGNUP)).unwrap();
        assert_eq!(after_first, after_second);
        assert_eq!(report.files_unchanged, 1);
        assert_eq!(report.replacements_made, 0);
    }

    #[test]
    fn test_preview_reports_but_writes_nothing() {
        let input = concat!(
            "import axios from \"axios\";\n",
            "axios.post(\"http://localhost:3000/api/users/login\");\n",
        );
        let temp = project_with(SIGNUP, input);

        let (report, previews) = migrate_mode(temp.path(), true);

        let on_disk = fs::read_to_string(temp.path().join(SIGNUP)).unwrap();
        assert_eq!(on_disk, input);
        assert_eq!(report.files_modified, vec![PathBuf::from(SIGNUP)]);
        assert_eq!(previews.len(), 1);
        assert!(previews[0].import_added);
        assert!(previews[0].diff.contains("+axios.post(API_URLS.USERS.LOGIN);"));
    }

    #[test]
    fn test_unreadable_target_is_recorded_and_run_continues() {
        let temp = TempDir::new().unwrap();
        // A directory where a file is expected: exists, but read fails.
        fs::create_dir_all(temp.path().join(SIGNUP)).unwrap();

        let navbar = "src/components/Navbar.jsx";
        let path = temp.path().join(navbar);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            "import React from 'react';\nfetch('http://localhost:3000/api/users/all');\n",
        )
        .unwrap();

        let (report, _) = migrate(temp.path());

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains(SIGNUP));

        // The other file was still migrated.
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("API_URLS.USERS.ALL"));
    }

    #[test]
    fn test_missing_files_are_skipped_with_warnings() {
        let temp = TempDir::new().unwrap();

        let (report, _) = migrate(temp.path());

        assert_eq!(report.files_skipped, MIGRATION_TARGETS.len());
        assert_eq!(report.warnings.len(), MIGRATION_TARGETS.len());
        assert_eq!(report.files_processed, 0);
        assert!(report.errors.is_empty());
    }
}
