//! Kernel metadata directory backend (`/sys/class/net`).

use std::path::{Path, PathBuf};

use crate::network::{Candidates, InterfaceCandidate, InterfaceSource, MetadataDirectory, ProbeError};

/// Name of the per-interface attribute holding the hardware address.
pub const ADDRESS_ATTRIBUTE: &str = "address";

/// [`MetadataDirectory`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysfsDirectory;

impl SysfsDirectory {
    /// Creates a filesystem-backed metadata directory accessor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MetadataDirectory for SysfsDirectory {
    fn list_entries(&self, path: &Path) -> Result<Vec<String>, ProbeError> {
        let entries = std::fs::read_dir(path).map_err(|e| ProbeError::ListDirectory {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Entries that vanish mid-listing are skipped, not fatal
        Ok(entries
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect())
    }

    fn read_attribute(&self, path: &Path) -> Result<String, ProbeError> {
        std::fs::read_to_string(path).map_err(|e| ProbeError::ReadAttribute {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Enumerates interfaces from a metadata directory.
///
/// Entries are listed eagerly but their address attributes are read
/// lazily, one per yielded candidate, so enumeration stops reading as soon
/// as the consumer stops pulling.
#[derive(Debug, Clone)]
pub struct SysfsSource<D> {
    directory: D,
    root: PathBuf,
}

impl<D: MetadataDirectory> SysfsSource<D> {
    /// Creates a source reading `<root>/<interface>/address`.
    #[must_use]
    pub fn new(directory: D, root: impl Into<PathBuf>) -> Self {
        Self {
            directory,
            root: root.into(),
        }
    }

    fn read_candidate(&self, name: String) -> InterfaceCandidate {
        let path = self.root.join(&name).join(ADDRESS_ATTRIBUTE);

        match self.directory.read_attribute(&path) {
            Ok(raw) => InterfaceCandidate {
                name,
                raw_address: Some(raw),
            },
            Err(e) => {
                tracing::debug!("Skipping interface {name}: {e}");
                InterfaceCandidate::without_address(name)
            }
        }
    }
}

impl<D: MetadataDirectory> InterfaceSource for SysfsSource<D> {
    fn candidates(&self) -> Candidates<'_> {
        let entries = match self.directory.list_entries(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Metadata directory unavailable: {e}");
                return Box::new(std::iter::empty());
            }
        };

        if entries.is_empty() {
            tracing::debug!("Metadata directory {} is empty", self.root.display());
        }

        Box::new(entries.into_iter().map(|name| self.read_candidate(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_address_files_from_real_directory() {
        let root = tempfile::tempdir().unwrap();
        let eth0 = root.path().join("eth0");
        fs::create_dir(&eth0).unwrap();
        fs::write(eth0.join("address"), "00:12:3f:be:22:01\n").unwrap();

        let source = SysfsSource::new(SysfsDirectory::new(), root.path());
        let candidates: Vec<_> = source.candidates().collect();

        assert_eq!(
            candidates,
            vec![InterfaceCandidate::new("eth0", "00:12:3f:be:22:01\n")]
        );
    }

    #[test]
    fn unreadable_entry_becomes_candidate_without_address() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("bond0")).unwrap();

        let source = SysfsSource::new(SysfsDirectory::new(), root.path());
        let candidates: Vec<_> = source.candidates().collect();

        assert_eq!(candidates, vec![InterfaceCandidate::without_address("bond0")]);
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let root = tempfile::tempdir().unwrap();
        let source = SysfsSource::new(SysfsDirectory::new(), root.path().join("absent"));

        assert_eq!(source.candidates().count(), 0);
    }

    #[test]
    fn list_entries_reports_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let result = SysfsDirectory::new().list_entries(&root.path().join("absent"));

        assert!(matches!(result, Err(ProbeError::ListDirectory { .. })));
    }

    #[test]
    fn read_attribute_reports_missing_file() {
        let root = tempfile::tempdir().unwrap();
        let result = SysfsDirectory::new().read_attribute(&root.path().join("address"));

        assert!(matches!(result, Err(ProbeError::ReadAttribute { .. })));
    }
}
