use crate::error::Result;
use crate::literal;
use std::collections::BTreeMap;

/// One embedded file: its base name, its mapped path and the byte literal
/// holding its final content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    pub name: String,
    pub path: String,
    pub data: String,
}

impl VirtualFile {
    /// Encode `content` into a new record
    pub fn new(name: impl Into<String>, path: impl Into<String>, content: &[u8]) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            data: literal::encode(content),
        }
    }

    /// Bytes held by the literal (still compressed if compression was on)
    pub fn decode(&self) -> Result<Vec<u8>> {
        literal::decode(&self.data)
    }
}

/// Registered files keyed by mapped path, iterated in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMap {
    files: BTreeMap<String, VirtualFile>,
}

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `file.path`, replacing and returning any earlier record
    pub fn insert(&mut self, file: VirtualFile) -> Option<VirtualFile> {
        self.files.insert(file.path.clone(), file)
    }

    pub fn get(&self, path: &str) -> Option<&VirtualFile> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VirtualFile> {
        self.files.values()
    }
}
