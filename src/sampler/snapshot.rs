//! Sampler reading profile documents from a directory.
//!
//! Layout: one `<kind>.json` file per registered kind, e.g. `heap.json`,
//! `cpu.json`. An external collector keeps the files current; a missing
//! file means the kind is not registered.

use super::{CpuSession, Sampler};
use crate::profile::ProfileKind;
use crate::utils::error::SamplerError;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Directory-backed sampler
#[derive(Debug)]
pub struct SnapshotDirSampler {
    root: PathBuf,
    session: CpuSession,
    wait: bool,
}

impl SnapshotDirSampler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            session: CpuSession::new(),
            wait: true,
        }
    }

    /// Read `cpu.json` immediately instead of waiting out the window
    pub fn without_wait(mut self) -> Self {
        self.wait = false;
        self
    }

    /// File holding the document for `kind`
    pub fn path_for(&self, kind: ProfileKind) -> PathBuf {
        self.root.join(format!("{}.json", kind))
    }

    fn read(&self, kind: ProfileKind) -> Result<Vec<u8>, SamplerError> {
        let path = self.path_for(kind);
        if !path.is_file() {
            return Err(SamplerError::Unregistered(kind.to_string()));
        }
        debug!("Reading {} snapshot from {}", kind, path.display());
        Ok(fs::read(&path)?)
    }
}

impl Sampler for SnapshotDirSampler {
    fn snapshot(&self, kind: ProfileKind) -> Result<Vec<u8>, SamplerError> {
        self.read(kind)
    }

    fn sample_cpu(&self, duration: Duration) -> Result<Vec<u8>, SamplerError> {
        let _session = self.session.try_begin()?;

        if self.wait {
            info!("Collecting CPU samples for {}s", duration.as_secs());
            std::thread::sleep(duration);
        }

        self.read(ProfileKind::Cpu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_kind() {
        let sampler = SnapshotDirSampler::new("/tmp/profiles");
        assert_eq!(
            sampler.path_for(ProfileKind::ThreadCreate),
            PathBuf::from("/tmp/profiles/threadcreate.json")
        );
    }

    #[test]
    fn test_missing_file_is_unregistered() {
        let dir = tempfile::tempdir().unwrap();
        let sampler = SnapshotDirSampler::new(dir.path());
        assert!(matches!(
            sampler.snapshot(ProfileKind::Heap),
            Err(SamplerError::Unregistered(_))
        ));
    }

    #[test]
    fn test_reads_file_bytes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cpu.json"), b"{}").unwrap();
        let sampler = SnapshotDirSampler::new(dir.path()).without_wait();
        assert_eq!(sampler.sample_cpu(Duration::from_secs(1)).unwrap(), b"{}".to_vec());
    }
}
