//! Directory entries as seen by the walkers

use std::ffi::OsStr;
use std::fs::Metadata;
use std::path::PathBuf;

/// What an entry is, judged from its own status (symlinks are not followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, fifos, devices.
    Other,
}

impl EntryKind {
    pub fn from_metadata(meta: &Metadata) -> Self {
        let file_type = meta.file_type();
        if file_type.is_symlink() {
            EntryKind::Other
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One child of a directory, produced while that directory is being read.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Size in bytes; only meaningful for files.
    pub size: u64,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Exact, case-sensitive comparison of the file name.
    pub fn name_matches(&self, keyword: &str) -> bool {
        self.path.file_name() == Some(OsStr::new(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: PathBuf::from("root").join(name),
            kind: EntryKind::File,
            size: 0,
        }
    }

    #[test]
    fn test_name_matches_is_exact() {
        let entry = file("b.txt");
        assert!(entry.name_matches("b.txt"));
        assert!(!entry.name_matches("b"));
        assert!(!entry.name_matches("b.txt2"));
        assert!(!entry.name_matches("*.txt"));
        assert!(!entry.name_matches("root/b.txt"));
    }

    #[test]
    fn test_name_matches_is_case_sensitive() {
        let entry = file("README.md");
        assert!(entry.name_matches("README.md"));
        assert!(!entry.name_matches("readme.md"));
    }

    #[test]
    fn test_kind_from_symlink_metadata() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("target");
        std::fs::write(&target, "x").unwrap();
        let meta = std::fs::symlink_metadata(&target).unwrap();
        assert_eq!(EntryKind::from_metadata(&meta), EntryKind::File);

        let meta = std::fs::symlink_metadata(dir.path()).unwrap();
        assert_eq!(EntryKind::from_metadata(&meta), EntryKind::Directory);

        #[cfg(unix)]
        {
            let link = dir.path().join("link");
            std::os::unix::fs::symlink(&target, &link).unwrap();
            let meta = std::fs::symlink_metadata(&link).unwrap();
            assert_eq!(EntryKind::from_metadata(&meta), EntryKind::Other);
        }
    }
}
