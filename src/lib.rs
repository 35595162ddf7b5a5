#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! A small reader for line-oriented INI files.
//!
//! ```text
//! [meta]
//! title=Tiger Trap
//! bpm=120
//! ```
//!
//! Every line is either a `[title]` header, a `key=value` entry, or ignored. Entries before
//! the first header belong to no section and are dropped, as are lines without an `=`.

mod document;
mod error;
mod parser;
mod policy;
mod section;
mod source;

pub use document::{DEFAULT_LOCATION, Document};
pub use error::Error;
pub use parser::{Parsed, Parser, header_title, split_entry};
pub use policy::{DuplicatePolicy, UnknownPolicy};
pub use section::{Iter, Section};
