//! Profile acquisition.
//!
//! A [`Sampler`] is the host capability that produces serialized profile
//! documents. Non-CPU kinds are always on and can be read at any time;
//! CPU profiles need an explicit sampling window, and only one window may
//! be open at a time.

pub mod http;
pub mod memory;
pub mod snapshot;

pub use http::HttpSampler;
pub use memory::MemorySampler;
pub use snapshot::SnapshotDirSampler;

use crate::profile::ProfileKind;
use crate::utils::error::SamplerError;
use std::sync::{Mutex, MutexGuard, TryLockError};
use std::time::Duration;

/// Source of serialized profile documents
pub trait Sampler: Send + Sync {
    /// Current accumulated data for an always-on profile kind
    ///
    /// # Errors
    /// `SamplerError::Unregistered` when the kind is not available.
    fn snapshot(&self, kind: ProfileKind) -> Result<Vec<u8>, SamplerError>;

    /// Run CPU sampling for `duration` and return the collected profile
    ///
    /// # Errors
    /// `SamplerError::CpuSessionActive` when another window is still open.
    fn sample_cpu(&self, duration: Duration) -> Result<Vec<u8>, SamplerError>;
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn snapshot(&self, kind: ProfileKind) -> Result<Vec<u8>, SamplerError> {
        (**self).snapshot(kind)
    }

    fn sample_cpu(&self, duration: Duration) -> Result<Vec<u8>, SamplerError> {
        (**self).sample_cpu(duration)
    }
}

/// Guard for the single CPU sampling window
#[derive(Debug, Default)]
pub struct CpuSession {
    lock: Mutex<()>,
}

impl CpuSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the window, or fail if one is already open
    pub fn try_begin(&self) -> Result<MutexGuard<'_, ()>, SamplerError> {
        match self.lock.try_lock() {
            Ok(guard) => Ok(guard),
            // A panicked session left nothing behind worth protecting
            Err(TryLockError::Poisoned(poisoned)) => Ok(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => Err(SamplerError::CpuSessionActive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_cpu_session_is_rejected() {
        let session = CpuSession::new();
        let first = session.try_begin().unwrap();
        assert!(matches!(
            session.try_begin(),
            Err(SamplerError::CpuSessionActive)
        ));
        drop(first);
        assert!(session.try_begin().is_ok());
    }
}
