//! Path segmentation and common-prefix utilities.
//!
//! The core treats a path purely as an ordered segment sequence with an
//! optional root. This module provides the decomposition
//! ([`segments`], [`directory_segments`]) and the case-aware common leading
//! run across a path set ([`common_prefix`]).
//!
//! # Root handling
//!
//! A single-character POSIX root is one segment; a drive-letter root is two
//! segments (letter, then separator):
//!
//! ```
//! use pathpat::path::segments;
//! use std::path::Path;
//!
//! # #[cfg(unix)]
//! assert_eq!(segments(Path::new("/a/b")), vec!["/", "a", "b"]);
//! ```

mod prefix;
mod segment;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use prefix::common_prefix;
pub use segment::{directory_segments, is_root_segment, join, segments};
