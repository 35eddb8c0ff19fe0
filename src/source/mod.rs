//! Data acquisition: document sources and the all-or-nothing joint fetch.

mod acquire;
#[cfg(feature = "download")]
mod http;
mod source;

pub use acquire::{acquire, source_for, Dataset, DEFAULT_EDUCATION_URL, DEFAULT_TOPOLOGY_URL};
#[cfg(feature = "download")]
pub use http::HttpSource;
pub use source::{DocumentSource, FileSource, MemSource};
