//! Site configuration (site.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration, loaded once at startup and passed by reference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub name: String,
    pub description: String,
    pub tagline: String,
    pub contact_email: String,

    // URL
    pub base_url: String,
    pub app_url: String,
    pub repo_url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Accounted".to_string(),
            description: "Open-source, multi-tenant accounting for teams that need security, auditability, and performance.".to_string(),
            tagline: "Enterprise accounting for modern teams".to_string(),
            contact_email: "contact@accounted.app".to_string(),

            base_url: "https://accounted.app".to_string(),
            app_url: "https://my.accounted.app".to_string(),
            repo_url: "https://github.com/accounted-hq/accounted-app".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),

            content: ContentConfig::default(),
            feed: FeedConfig::default(),
            sitemap: SitemapConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Base URL without a trailing slash
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Author line used by the feed, e.g. `noreply@accounted.app (Accounted Team)`
    pub fn feed_author(&self) -> String {
        format!("{} ({} Team)", self.feed.email, self.name)
    }
}

/// Content store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Accepted document file extensions, in lookup order
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["mdx".to_string()],
        }
    }
}

/// Changelog feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Refresh hint in minutes
    pub ttl: u32,
    pub email: String,
    pub language: String,
    pub logo_path: String,
    pub logo_size: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            ttl: 60,
            email: "noreply@accounted.app".to_string(),
            language: "en-US".to_string(),
            logo_path: "/logo.png".to_string(),
            logo_size: 144,
        }
    }
}

/// Change frequency hint for sitemap entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// A hand-authored marketing page listed in the sitemap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticRoute {
    pub path: String,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

impl StaticRoute {
    fn new(path: &str, changefreq: ChangeFreq, priority: f32) -> Self {
        Self {
            path: path.to_string(),
            changefreq,
            priority,
        }
    }
}

/// Sitemap settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub static_routes: Vec<StaticRoute>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        use ChangeFreq::*;
        Self {
            static_routes: vec![
                StaticRoute::new("/", Weekly, 1.0),
                StaticRoute::new("/features", Monthly, 0.8),
                StaticRoute::new("/open-source", Monthly, 0.8),
                StaticRoute::new("/pricing", Weekly, 0.9),
                StaticRoute::new("/api", Weekly, 0.7),
                StaticRoute::new("/security", Monthly, 0.7),
                StaticRoute::new("/blog", Weekly, 0.8),
                StaticRoute::new("/changelog", Weekly, 0.7),
                StaticRoute::new("/about", Monthly, 0.6),
                StaticRoute::new("/docs", Weekly, 0.7),
                StaticRoute::new("/terms", Yearly, 0.3),
                StaticRoute::new("/privacy", Yearly, 0.3),
                StaticRoute::new("/imprint", Yearly, 0.3),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.name, "Accounted");
        assert_eq!(config.feed.ttl, 60);
        assert_eq!(config.content.extensions, vec!["mdx"]);
        assert_eq!(config.sitemap.static_routes.len(), 13);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
name: Ledgerly
base_url: https://ledgerly.test/
content:
  extensions: [mdx, md]
feed:
  ttl: 30
sitemap:
  static_routes:
    - path: /
      changefreq: daily
      priority: 1.0
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "Ledgerly");
        assert_eq!(config.base(), "https://ledgerly.test");
        assert_eq!(config.content.extensions, vec!["mdx", "md"]);
        assert_eq!(config.feed.ttl, 30);
        assert_eq!(config.feed.email, "noreply@accounted.app");
        assert_eq!(config.sitemap.static_routes.len(), 1);
        assert_eq!(config.sitemap.static_routes[0].changefreq, ChangeFreq::Daily);
        assert_eq!(config.feed_author(), "noreply@accounted.app (Ledgerly Team)");
    }
}
