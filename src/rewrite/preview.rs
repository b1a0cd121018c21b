use serde::Serialize;
use similar::TextDiff;
use std::path::PathBuf;

/// Pending change to one file, captured instead of written in preview mode.
#[derive(Debug, Clone, Serialize)]
pub struct FilePreview {
    /// Path relative to the project root
    pub path: PathBuf,

    /// Replacements the rewrite pass made
    pub replacements: usize,

    /// Whether the constants import was inserted
    pub import_added: bool,

    /// Unified diff of the pending change
    pub diff: String,
}

impl FilePreview {
    pub fn new(
        path: PathBuf,
        replacements: usize,
        import_added: bool,
        old: &str,
        new: &str,
    ) -> Self {
        let text_diff = TextDiff::from_lines(old, new);
        let diff = text_diff.unified_diff().context_radius(2).to_string();

        Self {
            path,
            replacements,
            import_added,
            diff,
        }
    }
}

/// Generate the human-readable preview for all pending changes.
pub fn render_previews(previews: &[FilePreview]) -> String {
    let mut output = String::new();

    let total_replacements: usize = previews.iter().map(|p| p.replacements).sum();

    output.push_str("========================================\n");
    output.push_str("           PREVIEW CHANGES\n");
    output.push_str("========================================\n\n");
    output.push_str(&format!(
        "📊 {} file{}, {} replacement{}\n",
        previews.len(),
        if previews.len() == 1 { "" } else { "s" },
        total_replacements,
        if total_replacements == 1 { "" } else { "s" }
    ));

    for preview in previews {
        output.push_str(&format!("\n📝 {}\n", preview.path.display()));
        if preview.import_added {
            output.push_str("   + API_URLS import\n");
        }
        for line in preview.diff.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output.push_str("\n========================================\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_shows_removed_and_added_lines() {
        let preview = FilePreview::new(
            PathBuf::from("src/components/Signup.jsx"),
            1,
            false,
            "fetch(\"http://localhost:3000/api/users/signup\")\n",
            "fetch(API_URLS.USERS.SIGNUP)\n",
        );

        assert!(preview.diff.contains("-fetch(\"http://localhost:3000/api/users/signup\")"));
        assert!(preview.diff.contains("+fetch(API_URLS.USERS.SIGNUP)"));
    }

    #[test]
    fn test_render_includes_totals_and_paths() {
        let previews = vec![
            FilePreview::new(PathBuf::from("a.jsx"), 2, true, "old\n", "new\n"),
            FilePreview::new(PathBuf::from("b.jsx"), 1, false, "x\n", "y\n"),
        ];

        let rendered = render_previews(&previews);
        assert!(rendered.contains("2 files, 3 replacements"));
        assert!(rendered.contains("a.jsx"));
        assert!(rendered.contains("b.jsx"));
        assert!(rendered.contains("+ API_URLS import"));
    }
}
