use std::collections::BTreeSet;

/// Deduplicated set of virtual directories, iterated in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirSet {
    dirs: BTreeSet<String>,
}

impl DirSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a directory. Returns `false` if it was already present.
    pub fn insert(&mut self, dir: impl Into<String>) -> bool {
        self.dirs.insert(dir.into())
    }

    pub fn contains(&self, dir: &str) -> bool {
        self.dirs.contains(dir)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut dirs = DirSet::new();
        assert!(dirs.insert("static/img"));
        assert!(dirs.insert("static"));
        assert!(!dirs.insert("static/img"));

        assert_eq!(dirs.len(), 2);
        assert_eq!(dirs.iter().collect::<Vec<_>>(), vec!["static", "static/img"]);
    }
}
