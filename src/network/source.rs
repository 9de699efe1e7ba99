//! Enumeration seams: candidate sources and the host collaborators they use.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::InterfaceCandidate;

/// Error type for host collaborator operations.
///
/// These errors never reach the resolver's caller. Enumeration backends
/// log them and continue with fewer candidates.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The metadata directory could not be listed.
    #[error("Failed to list '{}': {source}", path.display())]
    ListDirectory {
        /// Directory that was listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An interface attribute could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    ReadAttribute {
        /// Attribute file that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The inspection command could not be started.
    #[error("Failed to run '{}': {source}", program.display())]
    Spawn {
        /// Program that was executed
        program: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Lazy, finite sequence of candidates in source order.
pub type Candidates<'a> = Box<dyn Iterator<Item = InterfaceCandidate> + 'a>;

/// A backend that enumerates interface candidates.
///
/// # Contract
///
/// - Candidates are yielded in source order; nothing is reordered or
///   synthesized.
/// - Each call to [`candidates`](Self::candidates) starts a fresh
///   enumeration, so a source can be walked more than once.
/// - Failures are absorbed: an unavailable backend yields an empty sequence.
pub trait InterfaceSource {
    /// Starts enumerating candidates.
    fn candidates(&self) -> Candidates<'_>;
}

/// Access to a kernel network-interface metadata directory.
///
/// # Example
///
/// ```ignore
/// use macfact::network::{MetadataDirectory, ProbeError};
///
/// struct FixedDirectory;
///
/// impl MetadataDirectory for FixedDirectory {
///     fn list_entries(&self, _path: &Path) -> Result<Vec<String>, ProbeError> {
///         Ok(vec!["eth0".to_string()])
///     }
///
///     fn read_attribute(&self, _path: &Path) -> Result<String, ProbeError> {
///         Ok("00:12:3f:be:22:01\n".to_string())
///     }
/// }
/// ```
pub trait MetadataDirectory: Send + Sync {
    /// Lists entry names under `path`, in the order the directory reports
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::ListDirectory`] if the directory is missing or
    /// unreadable.
    fn list_entries(&self, path: &Path) -> Result<Vec<String>, ProbeError>;

    /// Reads the contents of an attribute file.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::ReadAttribute`] if the file cannot be read.
    fn read_attribute(&self, path: &Path) -> Result<String, ProbeError>;
}

/// Execution of network-configuration inspection commands.
pub trait CommandExecutor: Send + Sync {
    /// Returns the first of `candidates` that can be executed, or `None` if
    /// the command is not installed.
    fn locate(&self, candidates: &[PathBuf]) -> Option<PathBuf>;

    /// Runs `program` with `args` and returns its standard output.
    ///
    /// Standard error is discarded. A non-zero exit status is not an error:
    /// whatever was printed is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Spawn`] if the program cannot be started.
    fn run(&self, program: &Path, args: &[String]) -> Result<String, ProbeError>;
}

impl<T: InterfaceSource + ?Sized> InterfaceSource for &T {
    fn candidates(&self) -> Candidates<'_> {
        (**self).candidates()
    }
}

impl<T: MetadataDirectory + ?Sized> MetadataDirectory for &T {
    fn list_entries(&self, path: &Path) -> Result<Vec<String>, ProbeError> {
        (*self).list_entries(path)
    }

    fn read_attribute(&self, path: &Path) -> Result<String, ProbeError> {
        (*self).read_attribute(path)
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &T {
    fn locate(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        (*self).locate(candidates)
    }

    fn run(&self, program: &Path, args: &[String]) -> Result<String, ProbeError> {
        (*self).run(program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn list_directory_displays_path() {
        let error = ProbeError::ListDirectory {
            path: PathBuf::from("/sys/class/net"),
            source: Error::new(ErrorKind::NotFound, "missing"),
        };
        let message = error.to_string();

        assert!(message.contains("/sys/class/net"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn read_attribute_displays_path() {
        let error = ProbeError::ReadAttribute {
            path: PathBuf::from("/sys/class/net/eth0/address"),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("/sys/class/net/eth0/address"));
    }

    #[test]
    fn spawn_displays_program() {
        let error = ProbeError::Spawn {
            program: PathBuf::from("/sbin/ifconfig"),
            source: Error::new(ErrorKind::NotFound, "no such file"),
        };
        assert!(error.to_string().contains("/sbin/ifconfig"));
    }

    #[test]
    fn boxed_iterator_source_restarts() {
        struct Fixed(Vec<InterfaceCandidate>);

        impl InterfaceSource for Fixed {
            fn candidates(&self) -> Candidates<'_> {
                Box::new(self.0.iter().cloned())
            }
        }

        let source = Fixed(vec![
            InterfaceCandidate::new("eth0", "00:12:3f:be:22:01"),
            InterfaceCandidate::without_address("lo"),
        ]);

        let first: Vec<_> = source.candidates().collect();
        let second: Vec<_> = source.candidates().collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
