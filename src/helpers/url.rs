//! URL helper functions

use crate::config::SiteConfig;

/// Join a site-relative path onto the base URL
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "changelog/v1") // -> "https://accounted.app/changelog/v1"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.base();
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            base_url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/changelog/v1"),
            "https://example.com/changelog/v1"
        );
        assert_eq!(full_url_for(&config, "blog"), "https://example.com/blog");
        assert_eq!(full_url_for(&config, "/"), "https://example.com");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & <b>"), "a &amp; &lt;b&gt;");
    }
}
