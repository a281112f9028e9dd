//! Property-based tests for path segmentation.

use proptest::prelude::*;
use std::path::{Path, PathBuf};

use crate::case::{CaseSensitivity, Comparer};
use crate::path::{common_prefix, directory_segments, join, segments};

// Strategy for relative paths built from plain name segments
fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9_.-]{1,10}", 1..=6).prop_map(|parts| parts.join("/"))
}

proptest! {
    /// Joining segments reproduces the relative path.
    #[test]
    fn segments_join_roundtrip(s in relative_path_strategy()) {
        let segs = segments(Path::new(&s));
        prop_assert_eq!(join(&segs), s);
    }

    /// Directory segments are always one shorter than full segments for
    /// relative paths.
    #[test]
    fn directory_segments_drop_filename(s in relative_path_strategy()) {
        let full = segments(Path::new(&s));
        let dirs = directory_segments(Path::new(&s)).unwrap();
        prop_assert_eq!(dirs.len() + 1, full.len());
        prop_assert_eq!(&full[..dirs.len()], &dirs[..]);
    }

    /// The common prefix is a leading run of every path's directory list.
    #[test]
    fn common_prefix_is_leading_run(
        paths in prop::collection::vec(relative_path_strategy(), 1..=5)
    ) {
        let bufs: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
        let cmp = Comparer::new(CaseSensitivity::Sensitive);
        let prefix = common_prefix(&bufs, &cmp).unwrap();
        for path in &bufs {
            let dirs = directory_segments(path).unwrap();
            prop_assert!(prefix.len() <= dirs.len());
            prop_assert_eq!(&dirs[..prefix.len()], &prefix[..]);
        }
    }
}
