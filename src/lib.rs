//! A crate for turning sequences into key lists, key sets, maps and groups.
//!
//! Every conversion takes its input as anything `IntoIterator` plus one or
//! two extractor closures, and makes a single pass over the input.
//!
//! ```
//! use listmap::{group_by_key, filter_greater_than};
//! let scores = [("ann", Some(7)), ("bob", None), ("cat", Some(2)), ("dan", Some(9))];
//! assert_eq!(filter_greater_than(&scores, |s| s.1, 5), vec![7, 9]);
//! let by_len = group_by_key(&scores, |s| s.0.len());
//! assert_eq!(by_len[&3].len(), 4);
//! ```

#[macro_use] extern crate log;
extern crate fxhash;

/// Sequence to list/set/map/group conversions.
pub mod conv;
pub use conv::*;

/// The same conversions, as methods on any `IntoIterator`.
pub mod ext;
pub use ext::ListMapExt;
