//! Sitemap generation.
//!
//! Lists the hand-authored marketing pages from the site config followed by
//! every published blog post and changelog entry.

use chrono::{DateTime, Utc};

use crate::config::{ChangeFreq, SiteConfig};
use crate::content::Document;
use crate::helpers::date::w3c_date;
use crate::helpers::{escape_xml, full_url_for};

/// A sitemap URL entry.
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: Option<DateTime<Utc>>,
    pub changefreq: ChangeFreq,
    /// 0.0 to 1.0
    pub priority: f32,
}

/// Sitemap generator.
pub struct SitemapGenerator<'a> {
    config: &'a SiteConfig,
}

impl<'a> SitemapGenerator<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Generate sitemap XML, stamping static pages with the current time
    pub fn generate(&self, blog: &[Document], changelog: &[Document]) -> String {
        let urls = self.urls(blog, changelog, Utc::now());
        render(&urls)
    }

    /// Collect all sitemap entries
    pub fn urls(
        &self,
        blog: &[Document],
        changelog: &[Document],
        now: DateTime<Utc>,
    ) -> Vec<SitemapUrl> {
        let static_urls = self.config.sitemap.static_routes.iter().map(|route| SitemapUrl {
            loc: full_url_for(self.config, &route.path),
            lastmod: Some(now),
            changefreq: route.changefreq,
            priority: route.priority,
        });

        let blog_urls = blog
            .iter()
            .map(|doc| self.document_url(doc, ChangeFreq::Monthly, 0.6));
        let changelog_urls = changelog
            .iter()
            .map(|doc| self.document_url(doc, ChangeFreq::Yearly, 0.5));

        static_urls.chain(blog_urls).chain(changelog_urls).collect()
    }

    fn document_url(&self, doc: &Document, changefreq: ChangeFreq, priority: f32) -> SitemapUrl {
        SitemapUrl {
            loc: full_url_for(self.config, &doc.path()),
            lastmod: doc.published_at(),
            changefreq,
            priority,
        }
    }
}

fn render(urls: &[SitemapUrl]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for url in urls {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
        if let Some(lastmod) = &url.lastmod {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", w3c_date(lastmod)));
        }
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            url.changefreq.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
