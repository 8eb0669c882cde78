//! Changelog RSS 2.0 feed

use chrono::{DateTime, Utc};
use rss::extension::atom::{AtomExtension, Link};
use rss::{
    Category, CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, Image, ImageBuilder, Item,
    ItemBuilder,
};

use crate::config::SiteConfig;
use crate::content::{Collection, Document};
use crate::helpers::{full_url_for, rfc822};

/// Content type served with the feed
pub const CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

/// Cache policy served with the feed
pub const CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

/// Site-relative path of the feed
pub const FEED_PATH: &str = "/changelog/rss.xml";

/// Builds the changelog feed from already filtered and sorted documents
pub struct FeedGenerator<'a> {
    config: &'a SiteConfig,
}

impl<'a> FeedGenerator<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Render the feed XML with the current time as build date
    pub fn generate(&self, documents: &[Document]) -> String {
        self.channel(documents, Utc::now()).to_string()
    }

    /// Build the RSS channel
    pub fn channel(&self, documents: &[Document], built_at: DateTime<Utc>) -> Channel {
        let name = &self.config.name;
        let changelog_url = full_url_for(self.config, Collection::Changelog.as_str());
        let author = self.config.feed_author();

        tracing::debug!(count = documents.len(), "generating changelog feed");

        let items: Vec<Item> = documents.iter().map(|doc| self.item(doc)).collect();

        ChannelBuilder::default()
            .title(format!("{} Changelog", name))
            .description(format!(
                "Latest updates, features, and improvements to {}'s accounting platform.",
                name
            ))
            .link(changelog_url)
            .language(Some(self.config.feed.language.clone()))
            .managing_editor(Some(author.clone()))
            .webmaster(Some(author))
            .last_build_date(Some(rfc822(&built_at)))
            .generator(Some(format!("{} Marketing Site", name)))
            .ttl(Some(self.config.feed.ttl.to_string()))
            .image(Some(self.image()))
            .atom_ext(Some(self.self_link()))
            .items(items)
            .build()
    }

    fn image(&self) -> Image {
        let size = self.config.feed.logo_size.to_string();
        ImageBuilder::default()
            .url(full_url_for(self.config, &self.config.feed.logo_path))
            .title(format!("{} Changelog", self.config.name))
            .link(full_url_for(self.config, Collection::Changelog.as_str()))
            .width(Some(size.clone()))
            .height(Some(size))
            .build()
    }

    fn self_link(&self) -> AtomExtension {
        let mut link = Link::default();
        link.set_href(full_url_for(self.config, FEED_PATH));
        link.set_rel("self");
        link.set_mime_type(Some("application/rss+xml".to_string()));

        let mut atom = AtomExtension::default();
        atom.set_links(vec![link]);
        atom
    }

    /// Convert a changelog entry to an RSS item
    fn item(&self, doc: &Document) -> Item {
        let url = full_url_for(self.config, &doc.path());
        let guid = GuidBuilder::default().value(url.clone()).permalink(true).build();

        let description = if doc.description.is_empty() {
            doc.title.clone()
        } else {
            doc.description.clone()
        };

        let categories: Vec<Category> = doc
            .category
            .iter()
            .chain(doc.tags.iter())
            .map(|term| CategoryBuilder::default().name(term.clone()).build())
            .collect();

        let mut builder = ItemBuilder::default();
        builder
            .title(Some(doc.title.clone()))
            .description(Some(description))
            .link(Some(url))
            .guid(Some(guid))
            .pub_date(doc.published_at().map(|date| rfc822(&date)))
            .categories(categories)
            .author(Some(self.config.feed_author()));

        builder.build()
    }
}
