use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::ExtractionError;

/// File extension of a single FCPXML document.
pub const DOCUMENT_EXTENSION: &str = "fcpxml";

/// Extension of the bundle-style package directory that wraps a document
/// alongside media and metadata.
pub const PACKAGE_EXTENSION: &str = "fcpxmld";

/// Resolves a user-supplied path to the document that should be parsed.
///
/// A `.fcpxmld` package is scanned one level deep for `.fcpxml` entries and
/// the lexicographically first one wins, so resolution does not depend on
/// filesystem enumeration order. Any other path is taken as the document
/// itself.
pub fn resolve_document(path: impl AsRef<Path>) -> Result<PathBuf, ExtractionError> {
    let path = path.as_ref();

    if path.extension().and_then(|ext| ext.to_str()) != Some(PACKAGE_EXTENSION) {
        return Ok(path.to_path_buf());
    }

    if !path.is_dir() {
        return Err(ExtractionError::PathIsNotADirectory(path.to_path_buf()));
    }

    let entries = fs::read_dir(path).map_err(|e| ExtractionError::unreadable(path, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ExtractionError::unreadable(path, e))?;
        let entry_path = entry.path();

        if entry_path.extension().and_then(|ext| ext.to_str()) == Some(DOCUMENT_EXTENSION) {
            candidates.push(entry_path);
        }
    }
    candidates.sort();

    match candidates.into_iter().next() {
        Some(document) => {
            log::debug!(
                "Resolved package {} to {}",
                path.display(),
                document.display()
            );
            Ok(document)
        }
        None => Err(ExtractionError::DirectoryHasNoDocument(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn plain_paths_pass_through() {
        let path = Path::new("episode_03.fcpxml");
        assert_eq!(resolve_document(path).unwrap(), path);

        // No package suffix, no special handling, even for directories.
        let dir = tempdir().unwrap();
        assert_eq!(resolve_document(dir.path()).unwrap(), dir.path());
    }

    #[test]
    fn package_resolves_to_its_document() {
        let dir = tempdir().unwrap();
        let package = dir.path().join("episode.fcpxmld");
        fs::create_dir(&package).unwrap();
        File::create(package.join("Info.plist")).unwrap();
        File::create(package.join("media.bin")).unwrap();
        File::create(package.join("project.fcpxml")).unwrap();

        assert_eq!(
            resolve_document(&package).unwrap(),
            package.join("project.fcpxml")
        );
    }

    #[test]
    fn package_with_several_documents_picks_lexicographically_first() {
        let dir = tempdir().unwrap();
        let package = dir.path().join("episode.fcpxmld");
        fs::create_dir(&package).unwrap();
        File::create(package.join("b.fcpxml")).unwrap();
        File::create(package.join("a.fcpxml")).unwrap();

        assert_eq!(resolve_document(&package).unwrap(), package.join("a.fcpxml"));
    }

    #[test]
    fn package_without_document_fails() {
        let dir = tempdir().unwrap();
        let package = dir.path().join("episode.fcpxmld");
        fs::create_dir(&package).unwrap();
        File::create(package.join("Info.plist")).unwrap();

        assert!(matches!(
            resolve_document(&package).unwrap_err(),
            ExtractionError::DirectoryHasNoDocument(p) if p == package
        ));
    }

    #[test]
    fn package_suffix_on_a_file_fails() {
        let dir = tempdir().unwrap();
        let bogus = dir.path().join("episode.fcpxmld");
        File::create(&bogus).unwrap();

        assert!(matches!(
            resolve_document(&bogus).unwrap_err(),
            ExtractionError::PathIsNotADirectory(p) if p == bogus
        ));
    }

    #[test]
    fn document_scan_is_not_recursive() {
        let dir = tempdir().unwrap();
        let package = dir.path().join("episode.fcpxmld");
        let nested = package.join("nested");
        fs::create_dir_all(&nested).unwrap();
        File::create(nested.join("project.fcpxml")).unwrap();

        assert!(matches!(
            resolve_document(&package).unwrap_err(),
            ExtractionError::DirectoryHasNoDocument(_)
        ));
    }
}
