//! Configuration module

mod site;

pub use site::ChangeFreq;
pub use site::ContentConfig;
pub use site::FeedConfig;
pub use site::SiteConfig;
pub use site::SitemapConfig;
pub use site::StaticRoute;
