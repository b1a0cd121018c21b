mod imports;
mod preview;
mod replacer;

pub use imports::{ensure_import, ImportOutcome};
pub use preview::{render_previews, FilePreview};
pub use replacer::{Rewrite, UrlReplacer};
