//! Generator module - writes the changelog feed, sitemap and route manifest

pub mod feed;
pub mod sitemap;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::{Collection, ContentIndex};
use crate::helpers::RouteManifest;
use crate::Site;

pub use feed::FeedGenerator;
pub use sitemap::SitemapGenerator;

/// Writes derived artifacts into the public directory
pub struct Generator {
    site: Site,
    index: ContentIndex,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        Self {
            site: site.clone(),
            index: site.index(),
        }
    }

    /// Generate every artifact
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)
            .with_context(|| format!("Failed to create {:?}", self.site.public_dir))?;

        let blog = self.index.list_all(Collection::Blog);
        let changelog = self.index.list_all(Collection::Changelog);
        tracing::info!(
            "Indexed {} blog posts and {} changelog entries",
            blog.len(),
            changelog.len()
        );

        let feed = FeedGenerator::new(&self.site.config).generate(&changelog);
        self.write(feed::FEED_PATH, &feed)?;
        tracing::info!("Generated {}", feed::FEED_PATH);

        let sitemap = SitemapGenerator::new(&self.site.config).generate(&blog, &changelog);
        self.write("sitemap.xml", &sitemap)?;
        tracing::info!("Generated sitemap.xml");

        let manifest = RouteManifest::build(&self.index);
        self.write("routes.json", &serde_json::to_string_pretty(&manifest)?)?;
        tracing::info!("Generated routes.json ({} routes)", manifest.len());

        Ok(())
    }

    fn write(&self, relative: &str, contents: &str) -> Result<()> {
        let output_path = self.site.public_dir.join(relative.trim_start_matches('/'));
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, contents)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        Ok(())
    }

    /// Output directory
    pub fn public_dir(&self) -> &Path {
        &self.site.public_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_writes_artifacts() {
        let dir = TempDir::new().unwrap();
        let changelog = dir.path().join("content/changelog");
        fs::create_dir_all(&changelog).unwrap();
        fs::write(
            changelog.join("v1.mdx"),
            "---\ntitle: v1\ndate: 2024-01-01\n---\nFirst release",
        )
        .unwrap();
        fs::write(
            changelog.join("v2.mdx"),
            "---\ntitle: v2\ndate: 2024-02-01\npublished: false\n---\nUnreleased",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let generator = Generator::new(&site);
        generator.generate().unwrap();

        let public = generator.public_dir();
        let feed = fs::read_to_string(public.join("changelog/rss.xml")).unwrap();
        assert!(feed.contains("https://accounted.app/changelog/v1"));
        assert!(!feed.contains("https://accounted.app/changelog/v2"));

        let sitemap = fs::read_to_string(public.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://accounted.app/changelog/v1</loc>"));
        assert!(!sitemap.contains("changelog/v2"));

        let routes: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(public.join("routes.json")).unwrap())
                .unwrap();
        let documents = routes["documents"].as_array().unwrap();
        assert!(documents.iter().any(|p| p == "/changelog/v1"));
    }
}
