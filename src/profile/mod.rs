//! Profile model, location keys and document codec.
//!
//! This module handles:
//! - The sample/frame/profile data model
//! - Resolving frames to `function:line` location keys
//! - Decoding serialized profile documents handed over by samplers

pub mod codec;
pub mod location;
pub mod schema;

// Re-export main types
pub use codec::{decode_expecting, decode_profile, encode_profile, profile_to_string};
pub use location::{innermost_location, location_key};
pub use schema::{Frame, Profile, ProfileKind, Sample, ValueType};
