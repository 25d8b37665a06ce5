//! Custom file sets and the walk that turns them into embedded files
//!
//! A [`Custom`] block names the roots to walk and how the files found there
//! are mapped, filtered and rewritten. [`Custom::parse`] walks every root and
//! returns a [`Bundle`] of encoded files.
//!
//! ```no_run
//! use b0x::{Compression, Custom, SharedConfig};
//!
//! let custom = Custom::new(["assets"])
//!     .with_base("assets")
//!     .with_prefix("static")
//!     .exclude("**/*.map")
//!     .replace("**/*.html", [("{{version}}", "1.2.0")]);
//!
//! let shared = SharedConfig::new("assets.rs").with_compression(Compression::gzip());
//! let bundle = custom.parse(&shared)?;
//! for file in bundle.files.iter() {
//!     println!("{} -> {} bytes of literal", file.path, file.data.len());
//! }
//! # Ok::<(), b0x::B0xError>(())
//! ```

mod filter;
mod path;
mod transform;

pub use filter::{Exclusions, PathGlob, ReplaceRule};
pub use path::{fix_path, map_path};
pub use transform::{replace_all, transform};

use crate::bundle::{Bundle, VirtualFile};
use crate::compression::{Compression, Compressor};
use crate::error::{B0xError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Settings shared by every custom block of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Base name of the generated artifact; files with this name are never
    /// embedded
    pub output: String,

    /// Compression applied to every file
    #[serde(default)]
    pub compression: Compression,
}

impl SharedConfig {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            compression: Compression::None,
        }
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }
}

/// Substitutions applied to the content of files matching `file`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacer {
    /// Glob matched against the mapped path, after the block's prefix
    pub file: String,

    /// Literal substring to replacement, applied in insertion order
    #[serde(default)]
    pub replace: IndexMap<String, String>,
}

/// A set of files with dedicated mapping, exclusion and replacement rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Custom {
    /// Files or directories to walk, in order
    pub files: Vec<String>,

    /// Part of the real path replaced by `prefix`
    #[serde(default)]
    pub base: String,

    /// Virtual prefix substituted for `base` and joined to every pattern
    #[serde(default)]
    pub prefix: String,

    /// Globs of files to leave out
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Content replacements, in order
    #[serde(default)]
    pub replace: Vec<Replacer>,
}

impl Custom {
    /// Create a custom block walking `files`
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Add an exclusion glob
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    /// Add a replacement rule for files matching `file`
    pub fn replace<I, K, V>(mut self, file: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.replace.push(Replacer {
            file: file.into(),
            replace: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        });
        self
    }

    /// Walk every root and return the encoded files
    pub fn parse(&self, config: &SharedConfig) -> Result<Bundle> {
        let mut bundle = Bundle::new();
        self.parse_into(&mut bundle, config)?;
        Ok(bundle)
    }

    /// Walk every root, registering files into an existing bundle.
    ///
    /// On error the files registered before the failure stay in `bundle`.
    pub fn parse_into(&self, bundle: &mut Bundle, config: &SharedConfig) -> Result<()> {
        self.parse_with(bundle, &config.output, &config.compression)
    }

    /// Like [`Custom::parse_into`] with any [`Compressor`]
    pub fn parse_with<C: Compressor + ?Sized>(
        &self,
        bundle: &mut Bundle,
        output: &str,
        compressor: &C,
    ) -> Result<()> {
        let exclusions = Exclusions::compile(&self.prefix, &self.exclude)?;
        let rules = self
            .replace
            .iter()
            .map(|r| ReplaceRule::compile(&self.prefix, &r.file, &r.replace))
            .collect::<Result<Vec<_>>>()?;

        for root in &self.files {
            let root = fix_path(root);
            debug!(root = %root, "walking");

            for entry in WalkDir::new(&root).sort_by_file_name() {
                let entry = entry?;

                // directories only open sub-walks
                if entry.file_type().is_dir() {
                    continue;
                }

                if let Some(file) = self.process(&entry, output, &exclusions, &rules, compressor)? {
                    trace!(path = %file.path, "registering");
                    bundle.register(file);
                }
            }
        }

        Ok(())
    }

    /// Map, filter, transform and encode one discovered file
    fn process<C: Compressor + ?Sized>(
        &self,
        entry: &DirEntry,
        output: &str,
        exclusions: &Exclusions,
        rules: &[ReplaceRule<'_>],
        compressor: &C,
    ) -> Result<Option<VirtualFile>> {
        let real_path = entry.path().to_string_lossy();
        let mapped = map_path(&real_path, &self.base, &self.prefix);

        if let Some(glob) = exclusions.first_match(&mapped) {
            debug!(path = %mapped, pattern = glob.as_str(), "excluded");
            return Ok(None);
        }

        let name = entry.file_name().to_string_lossy();
        if name == output {
            debug!(path = %mapped, "skipping generated output");
            return Ok(None);
        }

        let content = std::fs::read(entry.path()).map_err(|source| B0xError::Read {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let content = transform(content, &mapped, rules, compressor)?;

        Ok(Some(VirtualFile::new(name, mapped, &content)))
    }
}
