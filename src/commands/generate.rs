//! Generate the feed, sitemap and route manifest

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Generate all artifacts into the public directory
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    Generator::new(site).generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated into {:?} in {:.2}s",
        site.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}
