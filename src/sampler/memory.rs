//! In-process sampler backed by profiles held in memory.
//!
//! Useful for embedding the engine next to an instrumentation layer that
//! already builds [`Profile`] values, and for tests.

use super::{CpuSession, Sampler};
use crate::profile::{encode_profile, Profile, ProfileKind};
use crate::utils::error::SamplerError;
use chrono::Utc;
use log::debug;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

/// Sampler serving profiles registered per kind
#[derive(Debug)]
pub struct MemorySampler {
    profiles: RwLock<HashMap<ProfileKind, Profile>>,
    session: CpuSession,
    wait: bool,
}

impl Default for MemorySampler {
    fn default() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            session: CpuSession::new(),
            wait: true,
        }
    }
}

impl MemorySampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `profile` under its own kind
    pub fn with_profile(self, profile: Profile) -> Self {
        self.publish(profile);
        self
    }

    /// Return CPU profiles immediately instead of sleeping through the window
    pub fn without_wait(mut self) -> Self {
        self.wait = false;
        self
    }

    /// Replace the data served for `profile.kind`
    pub fn publish(&self, profile: Profile) {
        let mut profiles = self
            .profiles
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        profiles.insert(profile.kind, profile);
    }

    fn lookup(&self, kind: ProfileKind) -> Option<Profile> {
        let profiles = self
            .profiles
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        profiles.get(&kind).cloned()
    }
}

impl Sampler for MemorySampler {
    fn snapshot(&self, kind: ProfileKind) -> Result<Vec<u8>, SamplerError> {
        let profile = self
            .lookup(kind)
            .ok_or_else(|| SamplerError::Unregistered(kind.to_string()))?;
        Ok(encode_profile(&profile)?)
    }

    fn sample_cpu(&self, duration: Duration) -> Result<Vec<u8>, SamplerError> {
        let _session = self.session.try_begin()?;

        if self.wait {
            debug!("Sampling CPU for {:?}", duration);
            std::thread::sleep(duration);
        }

        let mut profile = self
            .lookup(ProfileKind::Cpu)
            .ok_or_else(|| SamplerError::Unregistered(ProfileKind::Cpu.to_string()))?;
        profile.duration_nanos = Some(i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX));
        profile.collected_at.get_or_insert_with(Utc::now);

        Ok(encode_profile(&profile)?)
    }
}
