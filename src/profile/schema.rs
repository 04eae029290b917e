//! Profile document schema.
//!
//! This is both the in-memory model the engine works on and the JSON
//! document samplers hand over. Schema is versioned alongside the crate
//! (see `utils::config::SCHEMA_VERSION`).

use crate::utils::error::ProfileError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of runtime profile
///
/// The kind decides how each value slot is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Heap,
    Goroutine,
    ThreadCreate,
    Block,
    Allocs,
    Cpu,
}

impl ProfileKind {
    /// Every kind, in registration order
    pub const ALL: [ProfileKind; 6] = [
        ProfileKind::Heap,
        ProfileKind::Goroutine,
        ProfileKind::ThreadCreate,
        ProfileKind::Block,
        ProfileKind::Allocs,
        ProfileKind::Cpu,
    ];

    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Heap => "heap",
            ProfileKind::Goroutine => "goroutine",
            ProfileKind::ThreadCreate => "threadcreate",
            ProfileKind::Block => "block",
            ProfileKind::Allocs => "allocs",
            ProfileKind::Cpu => "cpu",
        }
    }

    /// Whether the kind needs an explicit sampling window
    pub fn is_cpu(&self) -> bool {
        matches!(self, ProfileKind::Cpu)
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = ProfileError;

    /// Names are case-sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ProfileError::NotFound(s.to_string()))
    }
}

/// One stack entry
///
/// Either field may be missing when the sampler could not resolve the
/// frame; such frames have no location key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
}

impl Frame {
    pub fn new(function: impl Into<String>, line: i64) -> Self {
        Self {
            function: Some(function.into()),
            line: Some(line),
        }
    }

    /// Frame without symbol or line information
    pub fn unresolved() -> Self {
        Self::default()
    }
}

/// One observation: a stack plus its measurements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Innermost (currently executing) frame first
    #[serde(default)]
    pub frames: Vec<Frame>,

    /// Measurement per slot, meaning defined by the profile kind
    #[serde(default)]
    pub values: Vec<i64>,
}

impl Sample {
    pub fn new(frames: Vec<Frame>, values: Vec<i64>) -> Self {
        Self { frames, values }
    }
}

/// Name and unit of one value slot (e.g. `inuse_space` / `bytes`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueType {
    pub name: String,
    pub unit: String,
}

/// A sampled runtime profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Which runtime resource the samples describe
    pub kind: ProfileKind,

    /// When the sampler produced the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<DateTime<Utc>>,

    /// Length of the sampling window (CPU profiles only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_nanos: Option<i64>,

    /// Slot descriptions, if the sampler provides them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sample_types: Vec<ValueType>,

    #[serde(default)]
    pub samples: Vec<Sample>,
}

impl Profile {
    pub fn new(kind: ProfileKind, samples: Vec<Sample>) -> Self {
        Self {
            kind,
            collected_at: None,
            duration_nanos: None,
            sample_types: Vec::new(),
            samples,
        }
    }

    pub fn with_collected_at(mut self, at: DateTime<Utc>) -> Self {
        self.collected_at = Some(at);
        self
    }

    pub fn with_duration_nanos(mut self, nanos: i64) -> Self {
        self.duration_nanos = Some(nanos);
        self
    }

    pub fn with_sample_types(mut self, sample_types: Vec<ValueType>) -> Self {
        self.sample_types = sample_types;
        self
    }
}
