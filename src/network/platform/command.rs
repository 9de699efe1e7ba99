//! Command-output backend (`ifconfig`, `getmac`).

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::network::parse::ListingFormat;
use crate::network::strategy::CommandSpec;
use crate::network::{Candidates, CommandExecutor, InterfaceSource, ProbeError};

/// [`CommandExecutor`] that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommand;

impl SystemCommand {
    /// Creates a process-spawning executor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemCommand {
    fn locate(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        candidates
            .iter()
            .find(|candidate| is_bare_name(candidate) || candidate.is_file())
            .cloned()
    }

    fn run(&self, program: &Path, args: &[String]) -> Result<String, ProbeError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ProbeError::Spawn {
                program: program.to_path_buf(),
                source: e,
            })?;

        if !output.status.success() {
            tracing::debug!("{} exited with {}", program.display(), output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// A bare program name is left for the OS to find on `PATH`.
fn is_bare_name(candidate: &Path) -> bool {
    candidate.is_relative() && candidate.components().count() == 1
}

/// Enumerates interfaces by running a command and parsing its output.
///
/// The command runs once per call to [`candidates`](InterfaceSource::candidates);
/// a missing program, a spawn failure or empty output all yield an empty
/// sequence.
#[derive(Debug, Clone)]
pub struct CommandSource<C> {
    executor: C,
    command: CommandSpec,
    format: ListingFormat,
}

impl<C: CommandExecutor> CommandSource<C> {
    /// Creates a source running `command` and parsing it as `format`.
    #[must_use]
    pub const fn new(executor: C, command: CommandSpec, format: ListingFormat) -> Self {
        Self {
            executor,
            command,
            format,
        }
    }

    fn capture(&self) -> Option<String> {
        let Some(program) = self.executor.locate(&self.command.programs) else {
            tracing::debug!("No usable program among {}", self.command);
            return None;
        };

        match self.executor.run(&program, &self.command.args) {
            Ok(output) if output.trim().is_empty() => {
                tracing::debug!("{} produced no output", program.display());
                None
            }
            Ok(output) => Some(output),
            Err(e) => {
                tracing::debug!("Command backend unavailable: {e}");
                None
            }
        }
    }
}

impl<C: CommandExecutor> InterfaceSource for CommandSource<C> {
    fn candidates(&self) -> Candidates<'_> {
        let candidates = self
            .capture()
            .map(|output| self.format.parse(&output))
            .unwrap_or_default();

        tracing::debug!(
            "Parsed {} candidate(s) as {}",
            candidates.len(),
            self.format
        );

        Box::new(candidates.into_iter())
    }
}
