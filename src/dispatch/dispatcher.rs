//! Acquire a profile through a sampler and render the requested view.

use crate::profile::{decode_expecting, profile_to_string, Profile, ProfileKind, Sample};
use crate::sampler::Sampler;
use crate::utils::config::default_cpu_duration;
use crate::utils::error::{ProfileError, SamplerError};
use crate::views::{self, ViewMode, ViewSelection};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Parameters of one render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    /// Profile kind name, validated by the dispatcher
    pub profile: String,

    pub selection: ViewSelection,

    /// CPU sampling window; ignored for other kinds
    pub duration: Duration,
}

impl ProfileRequest {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            selection: ViewSelection::default(),
            duration: default_cpu_duration(),
        }
    }

    pub fn with_view(mut self, mode: ViewMode) -> Self {
        self.selection = ViewSelection::new(mode, self.selection.limit);
        self
    }

    /// A limit of 0 falls back to the default
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.selection = ViewSelection::new(self.selection.mode, limit);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Routes profile requests to a sampler and the view renderer
///
/// The dispatcher holds no state besides the sampler; concurrent calls
/// are independent, except that the sampler may reject a second
/// overlapping CPU window.
pub struct Dispatcher<S> {
    sampler: S,
}

impl<S: Sampler> Dispatcher<S> {
    pub fn new(sampler: S) -> Self {
        Self { sampler }
    }

    /// Acquire the requested profile and render it as text
    ///
    /// # Errors
    /// * `ProfileError::NotFound` - unknown or unregistered kind
    /// * `ProfileError::Write` - the sampler failed to produce data
    /// * `ProfileError::Parse` - the sampler's data could not be decoded
    pub fn render(&self, request: &ProfileRequest) -> Result<String, ProfileError> {
        let start_time = Instant::now();
        let kind: ProfileKind = request.profile.parse()?;

        info!(
            "Rendering {} profile ({} view, limit {})",
            kind, request.selection.mode, request.selection.limit
        );

        let profile = self.acquire(kind, request.duration)?;
        let text = views::render_as(&profile, kind, request.selection);

        debug!(
            "Rendered {} profile in {:.3}s",
            kind,
            start_time.elapsed().as_secs_f64()
        );

        Ok(text)
    }

    /// Fetch and decode a profile
    ///
    /// CPU profiles run a sampling window of `duration`; every other kind
    /// reads the sampler's current snapshot.
    pub fn acquire(&self, kind: ProfileKind, duration: Duration) -> Result<Profile, ProfileError> {
        let bytes = if kind.is_cpu() {
            info!("Starting CPU profile for {:?}", duration);
            self.sampler.sample_cpu(duration)
        } else {
            self.sampler.snapshot(kind)
        }
        .map_err(|err| sampler_failure(kind, err))?;

        decode_expecting(&bytes, kind).map_err(|source| ProfileError::Parse {
            kind: kind.to_string(),
            source,
        })
    }

    /// Current samples of an always-on kind
    ///
    /// CPU has no always-on data and is reported as not found.
    pub fn current_samples(&self, kind: ProfileKind) -> Result<Vec<Sample>, ProfileError> {
        if kind.is_cpu() {
            return Err(ProfileError::NotFound(kind.to_string()));
        }
        Ok(self.acquire(kind, Duration::ZERO)?.samples)
    }

    /// Full profile as pretty JSON, without any aggregation
    pub fn export(&self, profile: &str, duration: Duration) -> Result<String, ProfileError> {
        let kind: ProfileKind = profile.parse()?;
        let profile = self.acquire(kind, duration)?;
        profile_to_string(&profile).map_err(|err| ProfileError::Write {
            kind: kind.to_string(),
            source: SamplerError::Encode(err),
        })
    }
}

/// Render serialized profile bytes that were acquired elsewhere
pub fn render_raw(profile: &str, raw: &[u8], selection: ViewSelection) -> Result<String, ProfileError> {
    let kind: ProfileKind = profile.parse()?;
    let parsed = decode_expecting(raw, kind).map_err(|source| ProfileError::Parse {
        kind: kind.to_string(),
        source,
    })?;
    Ok(views::render_as(&parsed, kind, selection))
}

fn sampler_failure(kind: ProfileKind, err: SamplerError) -> ProfileError {
    match err {
        SamplerError::Unregistered(_) => ProfileError::NotFound(kind.to_string()),
        source => ProfileError::Write {
            kind: kind.to_string(),
            source,
        },
    }
}
