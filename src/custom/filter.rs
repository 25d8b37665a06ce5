use crate::error::{B0xError, Result};
use globset::{GlobBuilder, GlobMatcher};
use indexmap::IndexMap;

/// A glob pattern joined to the custom block's prefix
///
/// Double-star matching: `*` and `?` stay inside one segment, `**` spans any
/// number of segments and `{a,b}` matches either alternative. A `**` that is
/// not a whole segment behaves like `*`.
#[derive(Debug, Clone)]
pub struct PathGlob {
    source: String,
    matcher: GlobMatcher,
}

impl PathGlob {
    /// Compile `prefix + pattern`
    pub fn new(prefix: &str, pattern: &str) -> Result<Self> {
        let source = format!("{}{}", prefix, pattern);
        let matcher = GlobBuilder::new(&source)
            .literal_separator(true)
            .build()
            .map_err(|e| B0xError::Glob {
                pattern: source.clone(),
                source: e,
            })?
            .compile_matcher();
        Ok(Self { source, matcher })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Exclusion patterns of one custom block
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    globs: Vec<PathGlob>,
}

impl Exclusions {
    pub fn compile(prefix: &str, patterns: &[String]) -> Result<Self> {
        let globs = patterns
            .iter()
            .map(|pattern| PathGlob::new(prefix, pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { globs })
    }

    /// First pattern matching `path`, if any
    pub fn first_match(&self, path: &str) -> Option<&PathGlob> {
        self.globs.iter().find(|glob| glob.matches(path))
    }
}

/// A replacement rule with its path glob compiled
#[derive(Debug, Clone)]
pub struct ReplaceRule<'a> {
    pub glob: PathGlob,
    pub pairs: &'a IndexMap<String, String>,
}

impl<'a> ReplaceRule<'a> {
    pub fn compile(prefix: &str, file: &str, pairs: &'a IndexMap<String, String>) -> Result<Self> {
        Ok(Self {
            glob: PathGlob::new(prefix, file)?,
            pairs,
        })
    }
}
