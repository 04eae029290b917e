//! Decoding and encoding of serialized profile documents.

use super::schema::{Profile, ProfileKind};
use log::{debug, warn};

/// Decode a serialized profile document
///
/// # Errors
/// Returns the underlying `serde_json::Error` when the bytes are not a
/// valid profile document (malformed JSON, unknown kind, wrong types).
pub fn decode_profile(bytes: &[u8]) -> Result<Profile, serde_json::Error> {
    let profile: Profile = serde_json::from_slice(bytes)?;

    debug!(
        "Decoded {} profile with {} samples",
        profile.kind,
        profile.samples.len()
    );

    if let Some(first) = profile.samples.first() {
        let width = first.values.len();
        if profile.samples.iter().any(|s| s.values.len() != width) {
            warn!(
                "{} profile has samples with differing value counts; totals use the shared prefix",
                profile.kind
            );
        }
    }

    Ok(profile)
}

/// Decode a profile and check it against the kind that was requested
///
/// A mismatching document is accepted; the caller keeps formatting with
/// the requested kind.
pub fn decode_expecting(bytes: &[u8], expected: ProfileKind) -> Result<Profile, serde_json::Error> {
    let profile = decode_profile(bytes)?;
    if profile.kind != expected {
        warn!(
            "Requested {} profile but sampler returned {} data",
            expected, profile.kind
        );
    }
    Ok(profile)
}

/// Encode a profile as a compact JSON document
pub fn encode_profile(profile: &Profile) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(profile)
}

/// Encode a profile as pretty-printed JSON text
pub fn profile_to_string(profile: &Profile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(profile)
}
