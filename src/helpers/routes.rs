//! Page paths derived from the content index
//!
//! Tag and category pages live under `/<collection>/tag/<segment>` and
//! `/<collection>/category/<segment>`. A segment is the display name
//! lowercased with whitespace runs replaced by `-`. Mapping a segment back to
//! a name by capitalizing each word is lossy ("API Access" comes back as
//! "Api Access"), so lookups should go through [`TaxonomyTable`] which keeps
//! the canonical names.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::content::{Collection, ContentIndex};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize a tag or category name into a URL path segment
pub fn to_path_segment(name: &str) -> String {
    WHITESPACE
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Rebuild a display name from a path segment by capitalizing each word.
///
/// Only exact for names made of capitalized, space-separated words.
pub fn from_path_segment(segment: &str) -> String {
    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Page path of a single document
pub fn document_path(collection: Collection, slug: &str) -> String {
    format!("/{}/{}", collection, slug)
}

/// Page path listing documents with a tag
pub fn tag_path(collection: Collection, tag: &str) -> String {
    format!("/{}/tag/{}", collection, to_path_segment(tag))
}

/// Page path listing documents in a category
pub fn category_path(collection: Collection, category: &str) -> String {
    format!("/{}/category/{}", collection, to_path_segment(category))
}

/// Segment -> canonical display name
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaxonomyTable {
    names: BTreeMap<String, String>,
}

impl TaxonomyTable {
    /// Build a table from sorted, distinct names.
    ///
    /// When two names share a segment the first one wins.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = BTreeMap::new();
        for name in names {
            let name = name.into();
            let segment = to_path_segment(&name);
            match table.get(&segment) {
                Some(existing) => tracing::warn!(
                    "{:?} and {:?} both map to segment {:?}; keeping {:?}",
                    existing,
                    name,
                    segment,
                    existing
                ),
                None => {
                    table.insert(segment, name);
                }
            }
        }
        Self { names: table }
    }

    pub fn tags(index: &ContentIndex, collection: Collection) -> Self {
        Self::from_names(index.list_all_tags(collection))
    }

    pub fn categories(index: &ContentIndex, collection: Collection) -> Self {
        Self::from_names(index.list_all_categories(collection))
    }

    /// Canonical name for a segment, if any document uses it
    pub fn lookup(&self, segment: &str) -> Option<&str> {
        self.names.get(segment).map(String::as_str)
    }

    /// Canonical name, falling back to the lossy inverse transform
    pub fn resolve(&self, segment: &str) -> String {
        self.lookup(segment)
            .map(str::to_string)
            .unwrap_or_else(|| from_path_segment(segment))
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Every valid page path derived from content
#[derive(Debug, Clone, Serialize)]
pub struct RouteManifest {
    pub documents: Vec<String>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

impl RouteManifest {
    /// Collect page paths for all collections.
    ///
    /// Document pages come from `list_slugs`, so unpublished documents still
    /// get a path; tag and category pages only cover published documents.
    pub fn build(index: &ContentIndex) -> Self {
        let mut documents = Vec::new();
        let mut tags = Vec::new();
        let mut categories = Vec::new();

        for collection in Collection::ALL {
            documents.push(format!("/{}", collection));
            documents.extend(
                index
                    .list_slugs(collection)
                    .iter()
                    .map(|slug| document_path(collection, slug)),
            );
        }

        let table = TaxonomyTable::tags(index, Collection::Blog);
        tags.extend(
            table
                .segments()
                .map(|segment| format!("/{}/tag/{}", Collection::Blog, segment)),
        );
        let table = TaxonomyTable::categories(index, Collection::Blog);
        categories.extend(
            table
                .segments()
                .map(|segment| format!("/{}/category/{}", Collection::Blog, segment)),
        );

        Self {
            documents,
            tags,
            categories,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len() + self.tags.len() + self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_to_path_segment() {
        assert_eq!(to_path_segment("Bank Import"), "bank-import");
        assert_eq!(to_path_segment("Multi  Currency\tSupport"), "multi-currency-support");
        assert_eq!(to_path_segment("API Access"), "api-access");
    }

    #[test]
    fn test_round_trip_title_case() {
        for name in ["Bank Import", "Security", "Product Updates"] {
            assert_eq!(from_path_segment(&to_path_segment(name)), name);
        }
    }

    #[test]
    fn test_round_trip_is_lossy_for_acronyms() {
        assert_eq!(from_path_segment(&to_path_segment("API Access")), "Api Access");
        assert_eq!(from_path_segment(&to_path_segment("open source")), "Open Source");
    }

    #[test]
    fn test_taxonomy_table_keeps_canonical_names() {
        let table = TaxonomyTable::from_names(["API Access", "Bank Import"]);
        assert_eq!(table.lookup("api-access"), Some("API Access"));
        assert_eq!(table.resolve("api-access"), "API Access");
        assert_eq!(table.lookup("unknown-tag"), None);
        assert_eq!(table.resolve("unknown-tag"), "Unknown Tag");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_taxonomy_table_collision_keeps_first() {
        let table = TaxonomyTable::from_names(["API", "Api"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("api"), Some("API"));
    }

    #[test]
    fn test_paths() {
        assert_eq!(document_path(Collection::Changelog, "v1"), "/changelog/v1");
        assert_eq!(tag_path(Collection::Blog, "Bank Import"), "/blog/tag/bank-import");
        assert_eq!(
            category_path(Collection::Blog, "Product Updates"),
            "/blog/category/product-updates"
        );
    }

    #[test]
    fn test_route_manifest() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("blog")).unwrap();
        fs::write(
            dir.path().join("blog/hello.mdx"),
            "---\ntitle: Hello\ndate: 2024-01-01\ntags: [API Access]\ncategory: Engineering\n---\n",
        )
        .unwrap();
        let index = ContentIndex::new(dir.path(), &["mdx".to_string()]);

        let manifest = RouteManifest::build(&index);
        assert_eq!(manifest.documents, vec!["/blog", "/blog/hello", "/changelog"]);
        assert_eq!(manifest.tags, vec!["/blog/tag/api-access"]);
        assert_eq!(manifest.categories, vec!["/blog/category/engineering"]);
        assert_eq!(manifest.len(), 5);
    }
}
