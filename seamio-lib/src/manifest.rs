//! The job-manifest resolver.
//!
//! A SEAM job manifest lists one candidate input file per line as an
//! absolute drive-letter path. Each line is classified by its extension into
//! one of five input roles, checked for existence in the local input
//! directory, and the first accepted path per role is kept. Failures are
//! collected as diagnostics, never raised — a job can run with any subset of
//! its inputs resolved.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Manifest lines must start with the fixed drive letter; anything else is
/// filler and skipped without a diagnostic.
const DRIVE_SENTINEL: char = 'C';

/// The role an input file plays in a simulation job, determined by its
/// extension marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    Material,
    Subsystem,
    Junction,
    Excitation,
    Parameter,
}

impl InputRole {
    pub const ALL: [InputRole; 5] = [
        InputRole::Material,
        InputRole::Subsystem,
        InputRole::Junction,
        InputRole::Excitation,
        InputRole::Parameter,
    ];

    /// Extension marker matched as a substring anywhere in the line.
    pub fn marker(self) -> &'static str {
        match self {
            InputRole::Material => ".mat",
            InputRole::Subsystem => ".sub",
            InputRole::Junction => ".jun",
            InputRole::Excitation => ".exc",
            InputRole::Parameter => ".par",
        }
    }

    /// Short tag used in diagnostics and the CLI report.
    pub fn label(self) -> &'static str {
        match self {
            InputRole::Material => "MAT",
            InputRole::Subsystem => "SUB",
            InputRole::Junction => "JNC",
            InputRole::Excitation => "EXC",
            InputRole::Parameter => "PAR",
        }
    }

    /// Classify a manifest line by the first matching extension marker, in
    /// fixed role order. `None` means the line is unrecognized.
    pub fn classify(line: &str) -> Option<InputRole> {
        Self::ALL.into_iter().find(|role| line.contains(role.marker()))
    }
}

/// Resolved input paths for one job, one optional slot per role, plus the
/// diagnostics accumulated while resolving.
#[derive(Debug, Clone, Default)]
pub struct ManifestPaths {
    pub material: Option<PathBuf>,
    pub subsystem: Option<PathBuf>,
    pub junction: Option<PathBuf>,
    pub excitation: Option<PathBuf>,
    pub parameter: Option<PathBuf>,
    pub diagnostics: Vec<String>,
}

impl ManifestPaths {
    pub fn get(&self, role: InputRole) -> Option<&Path> {
        self.slot(role).as_deref()
    }

    fn slot(&self, role: InputRole) -> &Option<PathBuf> {
        match role {
            InputRole::Material => &self.material,
            InputRole::Subsystem => &self.subsystem,
            InputRole::Junction => &self.junction,
            InputRole::Excitation => &self.excitation,
            InputRole::Parameter => &self.parameter,
        }
    }

    fn slot_mut(&mut self, role: InputRole) -> &mut Option<PathBuf> {
        match role {
            InputRole::Material => &mut self.material,
            InputRole::Subsystem => &mut self.subsystem,
            InputRole::Junction => &mut self.junction,
            InputRole::Excitation => &mut self.excitation,
            InputRole::Parameter => &mut self.parameter,
        }
    }
}

/// Read and resolve a job manifest from disk.
///
/// Only an unreadable manifest is an error; every per-line failure becomes a
/// diagnostic in the returned struct.
pub fn resolve_manifest(manifest: &Path, input_dir: &Path) -> Result<ManifestPaths> {
    let raw = fs::read_to_string(manifest)?;
    Ok(resolve_manifest_str(&raw, input_dir))
}

/// Resolve manifest content from an in-memory string.
///
/// Manifest paths are written on the authoring machine, so the referenced
/// file is looked up by its final path component rebased onto `input_dir`.
/// The first line per role whose file exists wins; later matches for a
/// filled slot are ignored.
pub fn resolve_manifest_str(raw: &str, input_dir: &Path) -> ManifestPaths {
    let mut resolved = ManifestPaths::default();

    for line in raw.lines() {
        let line = line.trim_end();
        if !line.starts_with(DRIVE_SENTINEL) {
            continue;
        }

        match InputRole::classify(line) {
            Some(role) => {
                let candidate = input_dir.join(file_name(line));
                if candidate.is_file() {
                    let slot = resolved.slot_mut(role);
                    if slot.is_none() {
                        *slot = Some(candidate);
                    }
                } else {
                    resolved
                        .diagnostics
                        .push(format!("{} file does not exist - {line}", role.label()));
                }
            }
            None => resolved
                .diagnostics
                .push(format!("unsupported file type - {line}")),
        }
    }

    resolved
}

/// Final path component of a manifest line, tolerating both separator
/// styles.
fn file_name(line: &str) -> &str {
    line.rsplit(['\\', '/']).next().unwrap_or(line)
}
