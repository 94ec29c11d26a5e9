//! Field path addressing
//!
//! A path names a (possibly nested) field slot: either a dotted string
//! (`"user.roles.1"`), a single segment (string or non-negative integer),
//! or an explicit ordered sequence of segments. Integer segments resolve
//! to the same key as their decimal string form.

/// Split a dotted path into its segments.
///
/// A string without dots is a single segment. The empty string is the
/// single empty-string segment, which is the key that records without a
/// path are filed under.
pub(crate) fn split(path: &str) -> Vec<String> {
    path.split('.').map(String::from).collect()
}

/// Types accepted as a field path by collection lookups.
///
/// Implemented for dotted strings (`"user.roles.1"`), native indices
/// (`usize`) and explicit segment slices. An implementation yielding an
/// empty segment sequence matches nothing.
pub trait ErrorPath {
    /// The ordered segment sequence this path resolves through.
    fn segments(&self) -> Vec<String>;
}

impl ErrorPath for str {
    fn segments(&self) -> Vec<String> {
        split(self)
    }
}

impl ErrorPath for String {
    fn segments(&self) -> Vec<String> {
        split(self)
    }
}

impl ErrorPath for usize {
    fn segments(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl ErrorPath for [&str] {
    fn segments(&self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl ErrorPath for [String] {
    fn segments(&self) -> Vec<String> {
        self.to_vec()
    }
}

impl<T: ErrorPath + ?Sized> ErrorPath for &T {
    fn segments(&self) -> Vec<String> {
        (**self).segments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_string_splits() {
        assert_eq!("user.roles.1".segments(), vec!["user", "roles", "1"]);
    }

    #[test]
    fn test_single_segment_string() {
        assert_eq!("accessKey".segments(), vec!["accessKey"]);
    }

    #[test]
    fn test_empty_string_is_the_empty_segment() {
        assert_eq!("".segments(), vec![""]);
    }

    #[test]
    fn test_index_matches_decimal_string() {
        assert_eq!(1usize.segments(), "1".segments());
        assert_eq!(0usize.segments(), vec!["0"]);
    }

    #[test]
    fn test_slice_segments_are_taken_verbatim() {
        let segments: &[&str] = &["user", "roles.0"];
        // Slices are explicit sequences; no further splitting happens.
        assert_eq!(segments.segments(), vec!["user", "roles.0"]);
    }

    #[test]
    fn test_empty_slice_has_no_segments() {
        let none: &[&str] = &[];
        assert!(none.segments().is_empty());
    }
}
