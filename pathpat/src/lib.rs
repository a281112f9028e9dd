#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathpat
//!
//! A library for inferring a compact, human-readable pattern describing the
//! common structure and variation across a set of file paths or strings.
//!
//! A directory listing like `PREFIX_5671_aaaa/file21.txt`,
//! `PREFIX_2991_bbb/file23.txt` summarizes to
//! `PREFIX_${0}_${1}/${2}.txt`, with per-variable detail available under a
//! rendering width budget.
//!
//! ## Core Types
//!
//! - [`Pattern`] and [`PatternElement`]: the inferred element sequence
//! - [`find_pattern_in_paths`] / [`find_pattern_in_strings`]: entry points
//! - [`CaseSensitivity`] and [`Comparer`]: comparison policy
//! - [`FrequencyMap`]: value ranking for descriptions
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathpat::{find_pattern_in_paths, CaseSensitivity};
//! use std::path::PathBuf;
//!
//! let paths = vec![
//!     PathBuf::from("logs/app_2021_a.log"),
//!     PathBuf::from("logs/app_2022_b.log"),
//! ];
//! let pattern = find_pattern_in_paths(&paths, CaseSensitivity::Sensitive).unwrap();
//! # #[cfg(unix)]
//! assert_eq!(pattern.describe_short(), "logs/app_202${0}_${1}.log");
//! ```

pub mod case;
pub mod config;
mod describe;
pub mod error;
mod find;
pub mod frequency;
pub mod logging;
pub mod path;
pub mod pattern;
pub mod resolve;
pub mod trim;

// Re-export key types at crate root for convenience
pub use case::{CaseSensitivity, Comparer};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use find::{find_pattern_in_paths, find_pattern_in_strings};
pub use frequency::FrequencyMap;
pub use logging::{init_logger, LogLevel, Logger};
pub use pattern::{Pattern, PatternElement};
pub use resolve::Resolver;
pub use trim::Skipper;
