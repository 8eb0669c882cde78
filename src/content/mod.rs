//! Content module - documents, front-matter and the content index

mod document;
mod frontmatter;
pub mod loader;
mod markdown;

pub use document::{Collection, Document};
pub use frontmatter::FrontMatter;
pub use loader::ContentIndex;
pub use markdown::MarkdownRenderer;
