//! Helper functions shared by the generator, server and commands
//!
//! Date rendering, URL joining and the path segments used by tag and
//! category pages.

pub mod date;
pub mod routes;
mod url;

pub use date::{format_date, parse_date, rfc822};
pub use routes::{from_path_segment, to_path_segment, RouteManifest, TaxonomyTable};
pub use url::*;
