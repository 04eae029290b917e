//! Profile dispatch: kind lookup, acquisition, rendering.

pub mod dispatcher;

pub use dispatcher::{render_raw, Dispatcher, ProfileRequest};
