use glob::Pattern;
use std::path::Path;

/// Glob-based path exclusion.
///
/// Patterns are matched against the whole path, so `*/node_modules/*` skips
/// a `node_modules` directory at any depth. `*` also matches `/`.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    rules: Vec<Rule>,
}

#[derive(Debug, Clone)]
enum Rule {
    Glob(Pattern),
    /// A pattern that failed to compile only matches itself.
    Literal(String),
}

impl Rule {
    fn matches(&self, candidate: &str) -> bool {
        match self {
            Rule::Glob(pattern) => pattern.matches(candidate),
            Rule::Literal(text) => text == candidate,
        }
    }
}

impl ExclusionFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = patterns
            .into_iter()
            .map(|p| {
                let raw = p.as_ref();
                Pattern::new(raw)
                    .map(Rule::Glob)
                    .unwrap_or_else(|e| {
                        log::debug!("Treating malformed pattern '{raw}' literally: {e}");
                        Rule::Literal(raw.to_string())
                    })
            })
            .collect();
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True if `path` must be skipped.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let candidate = normalize(path);
        self.rules.iter().any(|rule| rule.matches(&candidate))
    }

    /// True if nothing below directory `dir` can be included.
    ///
    /// Checked against `dir/` so that `*/dist/*` prunes `src/dist` itself.
    pub fn is_excluded_dir(&self, dir: &Path) -> bool {
        let mut candidate = normalize(dir);
        if !candidate.ends_with('/') {
            candidate.push('/');
        }
        self.rules.iter().any(|rule| rule.matches(&candidate))
    }
}

fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
