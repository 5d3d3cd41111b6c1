//! Lenient, immutable URL manipulation.
//!
//! A [`Url`] is parsed best-effort (malformed input degrades instead of
//! failing), then normalized: slash runs and `.`/`..` path segments are
//! collapsed, a port equal to the scheme default is elided, the query is
//! decoded into an ordered mapping and re-encoded RFC 3986 style on output.
//! Parts missing from the input are seeded from an ambient
//! [`RequestContext`]. Instances are never mutated; every edit returns a new
//! value.
//!
//! ```
//! use urlish::{Edit, Url};
//!
//! let url = Url::parse("http://www.google.com/search?q=new+test&page=2#results");
//! assert_eq!(
//!     url.to_string(),
//!     "http://www.google.com/search?q=new%20test&page=2#results"
//! );
//!
//! let secure = url.modify(Edit::new().scheme("https"));
//! assert_eq!(secure.domain(), "https://www.google.com");
//!
//! // The original is untouched.
//! assert_eq!(url.domain(), "http://www.google.com");
//! ```

// Internal modules (not public API)
mod context;
mod edit;
mod encoding;
mod error;
mod parser;
mod query;
mod scheme;
mod url;

// Public API
pub use context::{RequestContext, default_context, set_default_context};
pub use edit::{Edit, Location};
pub use error::ContextError;
pub use query::Query;
pub use url::Url;
