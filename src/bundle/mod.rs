mod dir;
mod file;

pub use dir::DirSet;
pub use file::{FileMap, VirtualFile};

/// Everything one run produces: the virtual directories to create and the
/// files to embed, keyed by mapped path.
///
/// A bundle only grows. Every registered file has its parent directory in
/// [`Bundle::dirs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    pub dirs: DirSet,
    pub files: FileMap,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file and its parent directory.
    ///
    /// Returns the record previously stored under the same path, if any.
    pub fn register(&mut self, file: VirtualFile) -> Option<VirtualFile> {
        self.dirs.insert(parent_dir(&file.path));
        self.files.insert(file)
    }

    /// Number of registered files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Look up a registered file by mapped path
    pub fn get(&self, path: &str) -> Option<&VirtualFile> {
        self.files.get(path)
    }
}

/// Parent directory of a slash-separated path.
///
/// A bare name lives in `"."` and a file directly under the root in `"/"`.
pub fn parent_dir(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        None => ".".to_string(),
        Some(0) => "/".to_string(),
        Some(idx) => trimmed[..idx].trim_end_matches('/').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("a/b/c.txt"), "a/b");
        assert_eq!(parent_dir("c.txt"), ".");
        assert_eq!(parent_dir("/c.txt"), "/");
        assert_eq!(parent_dir("static/img/a.png"), "static/img");
    }

    #[test]
    fn test_register_adds_parent_dir() {
        let mut bundle = Bundle::new();
        bundle.register(VirtualFile::new("c.txt", "a/b/c.txt", b"hi"));

        assert_eq!(bundle.len(), 1);
        assert!(bundle.dirs.contains("a/b"));
        assert_eq!(bundle.get("a/b/c.txt").unwrap().decode().unwrap(), b"hi");
    }

    #[test]
    fn test_register_overwrites_same_path() {
        let mut bundle = Bundle::new();
        assert!(bundle
            .register(VirtualFile::new("x", "d/x", b"first"))
            .is_none());

        let previous = bundle.register(VirtualFile::new("x", "d/x", b"second"));
        assert_eq!(previous.unwrap().decode().unwrap(), b"first");

        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.dirs.len(), 1);
        assert_eq!(bundle.get("d/x").unwrap().decode().unwrap(), b"second");
    }
}
