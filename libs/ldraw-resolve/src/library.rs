//! # Library Search
//!
//! Ordered lookup of referenced file names against the parts library.
//!
//! A reference is tried (1) relative to the library root, then under
//! (2) `parts/` and (3) `p/`. Reference names use backslash separators by
//! LDraw convention (`s\subpart.dat`); they are normalized to path
//! components before lookup.

use std::path::{Path, PathBuf};

use crate::filesystem::FileSystem;

/// Root of a parts library. Immutable per resolution session.
#[derive(Debug, Clone)]
pub struct PartLibrary {
    root: PathBuf,
}

impl PartLibrary {
    /// Wraps a library root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the library root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locates a referenced file name, in search order.
    pub fn locate<F: FileSystem>(&self, fs: &F, name: &str) -> Option<PathBuf> {
        let relative = normalize_name(name);
        let candidates = [
            self.root.join(&relative),
            self.root.join("parts").join(&relative),
            self.root.join("p").join(&relative),
        ];
        candidates.into_iter().find(|c| fs.is_file(c))
    }
}

/// Converts an LDraw reference name into a relative path.
fn normalize_name(name: &str) -> PathBuf {
    name.replace('\\', "/").split('/').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::InMemoryFilesystem;

    fn library_with(paths: &[&str]) -> (PartLibrary, InMemoryFilesystem) {
        let mut fs = InMemoryFilesystem::default();
        for path in paths {
            fs.insert(*path, "0 stub");
        }
        (PartLibrary::new("lib"), fs)
    }

    #[test]
    fn test_root_relative_wins() {
        let (library, fs) = library_with(&["lib/stud.dat", "lib/parts/stud.dat"]);
        assert_eq!(
            library.locate(&fs, "stud.dat"),
            Some(PathBuf::from("lib/stud.dat"))
        );
    }

    #[test]
    fn test_parts_before_p() {
        let (library, fs) = library_with(&["lib/parts/stud.dat", "lib/p/stud.dat"]);
        assert_eq!(
            library.locate(&fs, "stud.dat"),
            Some(PathBuf::from("lib/parts/stud.dat"))
        );
    }

    #[test]
    fn test_p_directory_fallback() {
        let (library, fs) = library_with(&["lib/p/4-4disc.dat"]);
        assert_eq!(
            library.locate(&fs, "4-4disc.dat"),
            Some(PathBuf::from("lib/p/4-4disc.dat"))
        );
    }

    #[test]
    fn test_backslash_names_normalized() {
        let (library, fs) = library_with(&["lib/parts/s/3001s01.dat"]);
        assert_eq!(
            library.locate(&fs, "s\\3001s01.dat"),
            Some(PathBuf::from("lib/parts/s/3001s01.dat"))
        );
    }

    #[test]
    fn test_missing_is_none() {
        let (library, fs) = library_with(&["lib/parts/stud.dat"]);
        assert_eq!(library.locate(&fs, "ghost.dat"), None);
    }
}
