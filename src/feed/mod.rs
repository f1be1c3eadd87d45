pub mod http;
pub mod source;
pub mod timestamp;
pub mod types;

pub use http::HttpPostSource;
pub use source::{FetchError, PostSource};
pub use types::{Post, PostId, Tone};
