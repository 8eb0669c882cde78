//! CLI entry point for accounted-site

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use accounted_site::commands::new::NewDocument;
use accounted_site::content::Collection;

#[derive(Parser)]
#[command(name = "accounted-site")]
#[command(version)]
#[command(about = "Blog and changelog content engine for the Accounted marketing site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new blog post or changelog entry
    New {
        /// Collection to write into (blog, changelog)
        #[arg(short = 'C', long, default_value = "blog")]
        collection: String,

        /// Title of the new document
        title: String,

        /// File name without extension (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,

        #[arg(short, long)]
        author: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Create the document unpublished
        #[arg(long)]
        draft: bool,
    },

    /// Generate the changelog feed, sitemap and route manifest
    #[command(alias = "g")]
    Generate,

    /// Serve the feed, sitemap and content API
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Clean the public folder
    Clean,

    /// List collection content
    List {
        /// Type of content to list (post, slug, tag, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Collection to list (blog, changelog)
        #[arg(short = 'C', long, default_value = "blog")]
        collection: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "accounted_site=debug,info"
    } else {
        "accounted_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::New {
            collection,
            title,
            slug,
            author,
            category,
            draft,
        } => {
            let site = accounted_site::Site::new(&base_dir)?;
            let collection: Collection = collection.parse()?;
            tracing::info!("Creating new {} entry: {}", collection, title);
            let path = accounted_site::commands::new::create_document(
                &site,
                collection,
                &NewDocument {
                    title: &title,
                    slug: slug.as_deref(),
                    author: author.as_deref(),
                    category: category.as_deref(),
                    draft,
                },
            )?;
            println!("Created: {:?}", path);
        }

        Commands::Generate => {
            let site = accounted_site::Site::new(&base_dir)?;
            tracing::info!("Generating feed and sitemap...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            let site = accounted_site::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            accounted_site::server::start(&site, &ip, port).await?;
        }

        Commands::Clean => {
            let site = accounted_site::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List {
            r#type,
            collection,
        } => {
            let site = accounted_site::Site::new(&base_dir)?;
            let collection: Collection = collection.parse()?;
            accounted_site::commands::list::run(&site, collection, &r#type)?;
        }

        Commands::Version => {
            println!("accounted-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
