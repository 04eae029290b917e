//! Location keys for stack frames.
//!
//! Two frames are "the same location" when they resolve to the same
//! `function:line` key. Frames missing either part have no key and are
//! left out of every aggregation.

use super::schema::{Frame, Sample};

/// Resolve a frame to its `function:line` key
pub fn location_key(frame: &Frame) -> Option<String> {
    let function = frame.function.as_deref().filter(|name| !name.is_empty())?;
    let line = frame.line?;
    Some(format!("{}:{}", function, line))
}

/// Key of a sample's innermost frame
pub fn innermost_location(sample: &Sample) -> Option<String> {
    sample.frames.first().and_then(location_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_key_joins_function_and_line() {
        assert_eq!(
            location_key(&Frame::new("main.work", 42)),
            Some("main.work:42".to_string())
        );
    }

    #[test]
    fn test_unresolved_frames_have_no_key() {
        assert_eq!(location_key(&Frame::unresolved()), None);
        assert_eq!(
            location_key(&Frame {
                function: Some("main.work".to_string()),
                line: None,
            }),
            None
        );
        assert_eq!(location_key(&Frame::new("", 3)), None);
    }

    #[test]
    fn test_innermost_location_uses_first_frame() {
        let sample = Sample::new(
            vec![Frame::new("leaf", 1), Frame::new("root", 9)],
            vec![1],
        );
        assert_eq!(innermost_location(&sample), Some("leaf:1".to_string()));
        assert_eq!(innermost_location(&Sample::new(vec![], vec![1])), None);
    }
}
