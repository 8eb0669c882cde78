//! Create a new blog post or changelog entry

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::content::Collection;
use crate::server::RESERVED_SLUGS;
use crate::Site;

/// Front-matter written into new documents
#[derive(Serialize)]
struct Scaffold<'a> {
    title: &'a str,
    description: &'a str,
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    published: bool,
}

/// Options for a new document
#[derive(Debug, Default)]
pub struct NewDocument<'a> {
    pub title: &'a str,
    /// File stem; derived from the title when absent
    pub slug: Option<&'a str>,
    pub author: Option<&'a str>,
    pub category: Option<&'a str>,
    pub draft: bool,
}

/// Write a new document with front-matter into the collection directory
pub fn create_document(
    site: &Site,
    collection: Collection,
    options: &NewDocument<'_>,
) -> Result<PathBuf> {
    let now = chrono::Utc::now();

    let slug = match options.slug {
        Some(slug) => slug.to_string(),
        None => slug::slugify(options.title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", options.title);
    }
    if RESERVED_SLUGS.contains(&slug.as_str()) {
        anyhow::bail!("Slug {:?} is reserved by the content API", slug);
    }

    let ext = site
        .config
        .content
        .extensions
        .first()
        .map(String::as_str)
        .unwrap_or("mdx");

    let target_dir = site.content_dir.join(collection.as_str());
    fs::create_dir_all(&target_dir)?;
    let file_path = target_dir.join(format!("{}.{}", slug, ext));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold = Scaffold {
        title: options.title,
        description: "",
        date: now.format("%Y-%m-%d").to_string(),
        author: options.author,
        tags: Vec::new(),
        category: options.category,
        published: !options.draft,
    };
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&scaffold)?);

    fs::write(&file_path, content)?;
    tracing::info!("Created {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_document_is_indexed() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let path = create_document(
            &site,
            Collection::Changelog,
            &NewDocument {
                title: "Multi-currency: revaluation",
                category: Some("Release"),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(path.file_name().unwrap(), "multi-currency-revaluation.mdx");

        let doc = site
            .index()
            .get_by_slug(Collection::Changelog, "multi-currency-revaluation")
            .unwrap()
            .unwrap();
        assert_eq!(doc.title, "Multi-currency: revaluation");
        assert_eq!(doc.category.as_deref(), Some("Release"));
        assert!(doc.published);
        assert!(doc.published_at().is_some());
    }

    #[test]
    fn test_create_draft_is_unlisted() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        create_document(
            &site,
            Collection::Blog,
            &NewDocument {
                title: "Draft",
                slug: Some("draft-post"),
                draft: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(site.index().list_slugs(Collection::Blog), vec!["draft-post"]);
        assert!(site.index().list_all(Collection::Blog).is_empty());
    }

    #[test]
    fn test_create_reserved_slug_fails() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        for title in ["Tags", "Categories"] {
            let options = NewDocument {
                title,
                ..Default::default()
            };
            assert!(create_document(&site, Collection::Blog, &options).is_err());
        }
        let explicit = NewDocument {
            title: "All tags",
            slug: Some("tags"),
            ..Default::default()
        };
        assert!(create_document(&site, Collection::Changelog, &explicit).is_err());
        assert!(site.index().list_slugs(Collection::Blog).is_empty());
    }

    #[test]
    fn test_create_existing_fails() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let options = NewDocument {
            title: "Hello",
            ..Default::default()
        };
        create_document(&site, Collection::Blog, &options).unwrap();
        assert!(create_document(&site, Collection::Blog, &options).is_err());
    }
}
