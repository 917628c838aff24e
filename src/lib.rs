#![deny(clippy::suspicious)]
#![warn(clippy::pedantic)]
#![warn(let_underscore_drop)]
// Allows need to be after warn/deny
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! Helpers for ordered sequences of unique strings.
//!
//! A sequence is represented as `Option<Vec<String>>`. `None` (no sequence) and `Some(vec![])`
//! (an empty sequence) are distinct states: `remove()` and `filter()` keep a missing sequence
//! missing, while `add()` treats it as empty. All functions compare items exactly and never
//! reorder the items they keep.

mod list;
#[cfg(feature = "python")]
mod python;

pub use list::{add, filter, has, remove, try_filter, UniqueList};
#[cfg(feature = "python")]
pub use python::stringslice;
