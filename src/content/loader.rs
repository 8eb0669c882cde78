//! Content index - reads documents from the content store on every query

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Collection, Document};
use crate::error::Result;
use crate::Site;

/// Read-only views over the `<root>/<collection>/<slug>.<ext>` content store.
///
/// Nothing is cached: every call goes back to the filesystem, so results
/// always reflect what is on disk at query time.
#[derive(Debug, Clone)]
pub struct ContentIndex {
    root: PathBuf,
    extensions: Vec<String>,
}

impl ContentIndex {
    /// Create an index over `root`, accepting the given file extensions in lookup order
    pub fn new<P: AsRef<Path>>(root: P, extensions: &[String]) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions: extensions.to_vec(),
        }
    }

    /// Create an index for a site's configured content directory
    pub fn for_site(site: &Site) -> Self {
        Self::new(&site.content_dir, &site.config.content.extensions)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.as_str())
    }

    /// List every document slug in a collection, sorted ascending.
    ///
    /// A missing collection directory yields an empty list.
    pub fn list_slugs(&self, collection: Collection) -> Vec<String> {
        let dir = self.collection_dir(collection);
        if !dir.is_dir() {
            tracing::debug!("Collection directory {:?} does not exist", dir);
            return Vec::new();
        }

        let slugs: BTreeSet<String> = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let path = e.path();
                let ext = path.extension()?.to_str()?;
                if !self.extensions.iter().any(|accepted| accepted == ext) {
                    return None;
                }
                path.file_stem()?.to_str().map(str::to_string)
            })
            .collect();

        slugs.into_iter().collect()
    }

    /// Load a single document.
    ///
    /// Returns `Ok(None)` when no file exists for the slug. Malformed
    /// front-matter is an error for this document only.
    pub fn get_by_slug(&self, collection: Collection, slug: &str) -> Result<Option<Document>> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }

        let dir = self.collection_dir(collection);
        for ext in &self.extensions {
            let path = dir.join(format!("{}.{}", slug, ext));
            if !path.is_file() {
                continue;
            }
            let text = fs::read_to_string(&path)?;
            return Document::parse(collection, slug, &path, &text).map(Some);
        }

        Ok(None)
    }

    /// Every published document, newest first
    pub fn list_all(&self, collection: Collection) -> Vec<Document> {
        let mut documents: Vec<Document> = self
            .list_slugs(collection)
            .iter()
            .filter_map(|slug| match self.get_by_slug(collection, slug) {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::warn!("Skipping {}/{}: {}", collection, slug, e);
                    None
                }
            })
            .filter(|doc| doc.published)
            .collect();

        documents.sort_by(Document::newest_first);
        tracing::debug!("Loaded {} {} documents", documents.len(), collection);

        documents
    }

    /// Published documents carrying `tag` (exact, case-sensitive)
    pub fn list_by_tag(&self, collection: Collection, tag: &str) -> Vec<Document> {
        self.list_all(collection)
            .into_iter()
            .filter(|doc| doc.has_tag(tag))
            .collect()
    }

    /// Published documents whose category equals `category`
    pub fn list_by_category(&self, collection: Collection, category: &str) -> Vec<Document> {
        self.list_all(collection)
            .into_iter()
            .filter(|doc| doc.category.as_deref() == Some(category))
            .collect()
    }

    /// Distinct tags of published documents, sorted ascending
    pub fn list_all_tags(&self, collection: Collection) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .list_all(collection)
            .into_iter()
            .flat_map(|doc| doc.tags)
            .collect();
        tags.into_iter().collect()
    }

    /// Distinct non-empty categories of published documents, sorted ascending
    pub fn list_all_categories(&self, collection: Collection) -> Vec<String> {
        let categories: BTreeSet<String> = self
            .list_all(collection)
            .into_iter()
            .filter_map(|doc| doc.category)
            .filter(|c| !c.is_empty())
            .collect();
        categories.into_iter().collect()
    }
}

/// Slugs are bare file stems: no path separators and not a directory alias
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}
