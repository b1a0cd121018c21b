use thiserror::Error;

/// Failure while building the compiled-in rule set. The only structured
/// error this tool can produce; everything per-file is reported through the
/// run summary instead of failing the run.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("invalid dynamic URL pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },
}
