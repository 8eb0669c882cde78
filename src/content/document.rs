//! Document and collection models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::FrontMatter;
use crate::error::{ContentError, Result};
use crate::helpers::{date, routes};

/// A named bucket of documents, one directory in the content store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Blog,
    Changelog,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Blog, Collection::Changelog];

    /// Directory name and URL prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Changelog => "changelog",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blog" => Ok(Self::Blog),
            "changelog" => Ok(Self::Changelog),
            other => Err(ContentError::UnknownCollection(other.to_string())),
        }
    }
}

/// One blog post or changelog entry
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// File stem, unique within the collection
    pub slug: String,
    pub collection: Collection,
    pub title: String,
    pub description: String,
    /// Date as written in the front-matter
    pub date: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub published: bool,

    /// Raw body after the front-matter block
    pub content: String,

    #[serde(skip)]
    pub source: PathBuf,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Document {
    /// Parse a document from its file contents
    pub fn parse(collection: Collection, slug: &str, path: &Path, text: &str) -> Result<Self> {
        let (fm, body) = FrontMatter::parse(text, path)?;

        Ok(Self {
            slug: slug.to_string(),
            collection,
            title: fm.title.unwrap_or_default(),
            description: fm.description.unwrap_or_default(),
            date: fm.date.unwrap_or_default(),
            author: fm.author,
            tags: fm.tags,
            category: fm.category.filter(|c| !c.is_empty()),
            published: fm.published,
            content: body.to_string(),
            source: path.to_path_buf(),
            extra: fm.extra,
        })
    }

    /// Parsed publication date, `None` when the front-matter date is invalid
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        date::parse_date(&self.date)
    }

    /// Long-form display date
    pub fn display_date(&self) -> String {
        date::format_date(&self.date)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Site-relative page path, e.g. `/changelog/v1-2`
    pub fn path(&self) -> String {
        routes::document_path(self.collection, &self.slug)
    }

    /// Listing order: newest first, undated last, then slug ascending
    pub fn newest_first(a: &Document, b: &Document) -> Ordering {
        match (a.published_at(), b.published_at()) {
            (Some(da), Some(db)) => db.cmp(&da),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| a.slug.cmp(&b.slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(slug: &str, date: &str) -> Document {
        let text = format!("---\ntitle: {}\ndate: \"{}\"\n---\nbody", slug, date);
        Document::parse(
            Collection::Blog,
            slug,
            Path::new("content/blog/x.mdx"),
            &text,
        )
        .unwrap()
    }

    #[test]
    fn test_collection_from_str() {
        assert_eq!("blog".parse::<Collection>().unwrap(), Collection::Blog);
        assert_eq!(
            "changelog".parse::<Collection>().unwrap(),
            Collection::Changelog
        );
        assert!(matches!(
            "news".parse::<Collection>(),
            Err(ContentError::UnknownCollection(_))
        ));
        assert_eq!(Collection::Changelog.to_string(), "changelog");
    }

    #[test]
    fn test_parse_defaults() {
        let d = Document::parse(
            Collection::Changelog,
            "v1",
            Path::new("content/changelog/v1.mdx"),
            "plain body",
        )
        .unwrap();
        assert_eq!(d.slug, "v1");
        assert_eq!(d.title, "");
        assert!(d.published);
        assert!(d.tags.is_empty());
        assert_eq!(d.content, "plain body");
        assert_eq!(d.path(), "/changelog/v1");
        assert_eq!(d.display_date(), "Invalid Date");
    }

    #[test]
    fn test_empty_category_is_none() {
        let d = Document::parse(
            Collection::Blog,
            "a",
            Path::new("a.mdx"),
            "---\ncategory: \"\"\n---\n",
        )
        .unwrap();
        assert_eq!(d.category, None);
    }

    #[test]
    fn test_newest_first() {
        let mut docs = vec![
            doc("b", "2024-01-01"),
            doc("undated", "soon"),
            doc("c", "2024-02-01"),
            doc("a", "2024-01-01"),
        ];
        docs.sort_by(Document::newest_first);
        let slugs: Vec<_> = docs.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "a", "b", "undated"]);
    }
}
