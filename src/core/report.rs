use serde::Serialize;
use std::path::PathBuf;

/// Aggregated result of one migration run. The per-file outcome taxonomy
/// (updated, unchanged, skipped, failed) folds into the counters here.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    /// Target files that existed and were read
    pub files_processed: usize,

    /// Target paths missing on disk
    pub files_skipped: usize,

    /// Files read but left untouched
    pub files_unchanged: usize,

    /// Total literal and template replacements
    pub replacements_made: usize,

    /// Import lines inserted
    pub imports_added: usize,

    /// Files that were written (or would be, in preview)
    pub files_modified: Vec<PathBuf>,

    /// Non-fatal conditions: missing files, missing import anchors
    pub warnings: Vec<String>,

    /// Per-file failures
    pub errors: Vec<String>,
}

impl MigrationReport {
    pub fn new() -> Self {
        Self {
            files_processed: 0,
            files_skipped: 0,
            files_unchanged: 0,
            replacements_made: 0,
            imports_added: 0,
            files_modified: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_modified_file(&mut self, path: PathBuf, replacements: usize) {
        self.replacements_made += replacements;
        self.files_modified.push(path);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    /// Format the run summary for the console.
    pub fn format_summary(&self, preview: bool) -> String {
        let mut output = String::new();

        if preview {
            output.push_str("\n🎉 Preview complete!\n");
        } else {
            output.push_str("\n🎉 URL replacement completed!\n");
        }

        output.push_str("\n📋 Summary:\n");
        output.push_str(&format!(
            "  • {} file{} processed, {} skipped\n",
            self.files_processed,
            if self.files_processed == 1 { "" } else { "s" },
            self.files_skipped
        ));
        output.push_str(&format!(
            "  • {} URL{} replaced across {} file{}\n",
            self.replacements_made,
            if self.replacements_made == 1 { "" } else { "s" },
            self.files_modified.len(),
            if self.files_modified.len() == 1 { "" } else { "s" }
        ));
        output.push_str(&format!(
            "  • {} API_URLS import{} added\n",
            self.imports_added,
            if self.imports_added == 1 { "" } else { "s" }
        ));

        if !self.files_modified.is_empty() {
            output.push_str(&format!(
                "\n📝 {} file{}:\n",
                if preview { "Would modify" } else { "Modified" },
                if self.files_modified.len() == 1 { "" } else { "s" }
            ));
            for file in &self.files_modified {
                output.push_str(&format!("  • {}\n", file.display()));
            }
        }

        if !self.warnings.is_empty() {
            output.push_str("\n⚠️  Warnings:\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {}\n", warning));
            }
        }

        if !self.errors.is_empty() {
            output.push_str("\n❌ Errors:\n");
            for error in &self.errors {
                output.push_str(&format!("  • {}\n", error));
            }
        }

        if !preview {
            output.push_str("\n🧪 Next steps:\n");
            output.push_str("  1. Test the application: npm run dev\n");
            output.push_str("  2. Check for any compilation errors\n");
            output.push_str("  3. Verify API calls work correctly\n");
        }

        output
    }
}

impl Default for MigrationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_modified_files_and_warnings() {
        let mut report = MigrationReport::new();
        report.files_processed = 2;
        report.files_skipped = 1;
        report.add_modified_file(PathBuf::from("src/components/Signup.jsx"), 3);
        report.imports_added = 1;
        report.add_warning("file not found: src/components/Navbar.jsx".to_string());

        let summary = report.format_summary(false);
        assert!(summary.contains("URL replacement completed"));
        assert!(summary.contains("2 files processed, 1 skipped"));
        assert!(summary.contains("3 URLs replaced across 1 file"));
        assert!(summary.contains("src/components/Signup.jsx"));
        assert!(summary.contains("file not found"));
        assert!(summary.contains("npm run dev"));
    }

    #[test]
    fn test_preview_summary_omits_next_steps() {
        let report = MigrationReport::new();
        let summary = report.format_summary(true);
        assert!(summary.contains("Preview complete"));
        assert!(!summary.contains("Next steps"));
    }
}
