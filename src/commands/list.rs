//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::Collection;
use crate::helpers::routes;
use crate::Site;

/// Print a listing of one collection
pub fn run(site: &Site, collection: Collection, content_type: &str) -> Result<()> {
    for line in lines(site, collection, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// Build the listing lines for a content type
pub fn lines(site: &Site, collection: Collection, content_type: &str) -> Result<Vec<String>> {
    let index = site.index();
    let mut out = Vec::new();

    match content_type {
        "post" | "posts" | "doc" | "docs" => {
            let documents = index.list_all(collection);
            out.push(format!("Documents in {} ({}):", collection, documents.len()));
            for doc in documents {
                out.push(format!(
                    "  {} - {} [{}]",
                    doc.display_date(),
                    doc.title,
                    doc.path()
                ));
            }
        }
        "slug" | "slugs" => {
            let slugs = index.list_slugs(collection);
            out.push(format!("Slugs in {} ({}):", collection, slugs.len()));
            for slug in slugs {
                out.push(format!("  {}", slug));
            }
        }
        "tag" | "tags" => {
            let documents = index.list_all(collection);
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for tag in documents.iter().flat_map(|d| &d.tags) {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
            let tags = index.list_all_tags(collection);
            out.push(format!("Tags ({}):", tags.len()));
            for tag in &tags {
                out.push(format!(
                    "  {} ({}) {}",
                    tag,
                    counts.get(tag.as_str()).copied().unwrap_or(0),
                    routes::tag_path(collection, tag)
                ));
            }
        }
        "category" | "categories" => {
            let documents = index.list_all(collection);
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for category in documents.iter().filter_map(|d| d.category.as_deref()) {
                *counts.entry(category).or_insert(0) += 1;
            }
            let categories = index.list_all_categories(collection);
            out.push(format!("Categories ({}):", categories.len()));
            for category in &categories {
                out.push(format!(
                    "  {} ({}) {}",
                    category,
                    counts.get(category.as_str()).copied().unwrap_or(0),
                    routes::category_path(collection, category)
                ));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, slug, tag, category",
                content_type
            );
        }
    }

    Ok(out)
}
