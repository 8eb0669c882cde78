//! Error types for the content layer

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `ContentError`
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised while reading the content store
#[derive(Error, Debug)]
pub enum ContentError {
    /// Front-matter block is unterminated or not valid YAML
    #[error("Frontmatter error in {path}: {message}")]
    Frontmatter { path: PathBuf, message: String },

    /// Collection name outside of `blog` / `changelog`
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    /// Create a new frontmatter error
    pub fn frontmatter(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Frontmatter {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmatter_error() {
        let err = ContentError::frontmatter("content/blog/hello.mdx", "unterminated block");
        assert!(err.to_string().contains("Frontmatter error"));
        assert!(err.to_string().contains("content/blog/hello.mdx"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ContentError = io_err.into();
        assert!(err.to_string().contains("IO error"));
        assert!(matches!(err, ContentError::Io(_)));
    }
}
