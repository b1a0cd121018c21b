use regex::Regex;
use tracing::debug;

use crate::core::error::RuleError;
use crate::rules::{DynamicRule, DYNAMIC_RULES, STATIC_RULES};

/// Outcome of rewriting one file's content.
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// Content after both replacement passes
    pub content: String,

    /// Number of literal and template occurrences replaced
    pub replacements: usize,
}

impl Rewrite {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Rewrites hardcoded endpoint URLs to API_URLS references.
///
/// Two passes: plain substring replacement for the fixed literals (each in
/// its three quoted forms), then regex replacement for the template-literal
/// URLs, re-emitting the interpolated expression as a call argument.
pub struct UrlReplacer {
    dynamic: Vec<(Regex, &'static DynamicRule)>,
}

impl UrlReplacer {
    /// Compile the dynamic patterns once for the whole run.
    pub fn new() -> Result<Self, RuleError> {
        let mut dynamic = Vec::with_capacity(DYNAMIC_RULES.len());
        for rule in DYNAMIC_RULES {
            let regex = Regex::new(rule.pattern).map_err(|source| RuleError::InvalidPattern {
                pattern: rule.pattern,
                source,
            })?;
            dynamic.push((regex, rule));
        }
        Ok(Self { dynamic })
    }

    /// Replace every known endpoint literal and template URL in `content`.
    pub fn rewrite(&self, content: &str) -> Rewrite {
        let mut content = content.to_string();
        let mut replacements = 0;

        for rule in STATIC_RULES {
            for quoted in rule.quoted_forms() {
                let count = content.matches(quoted.as_str()).count();
                if count > 0 {
                    content = content.replace(quoted.as_str(), rule.reference);
                    replacements += count;
                    debug!("replaced {} occurrence(s) of {}", count, quoted);
                }
            }
        }

        for (regex, rule) in &self.dynamic {
            let count = regex.find_iter(&content).count();
            if count > 0 {
                content = regex.replace_all(&content, rule.replacement).into_owned();
                replacements += count;
                debug!("replaced {} template URL(s) via {}", count, rule.pattern);
            }
        }

        Rewrite {
            content,
            replacements,
        }
    }
}
