//! Preview server
//!
//! Serves the changelog feed, the sitemap and JSON views of the content
//! index. Every request reads the content store again, so edits show up
//! without a restart.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::{Collection, ContentIndex, Document, MarkdownRenderer};
use crate::error::ContentError;
use crate::generator::{feed, FeedGenerator, SitemapGenerator};
use crate::helpers::{routes, TaxonomyTable};
use crate::Site;

/// Server state
struct ServerState {
    site: Site,
    index: ContentIndex,
}

/// Errors surfaced to HTTP clients
#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::UnknownCollection(name) => {
                ApiError::NotFound(format!("No collection named {:?}", name))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Listing entry, without the body
#[derive(Debug, Serialize)]
struct DocumentSummary {
    slug: String,
    path: String,
    title: String,
    description: String,
    date: String,
    display_date: String,
    author: Option<String>,
    tags: Vec<String>,
    category: Option<String>,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        Self {
            slug: doc.slug.clone(),
            path: doc.path(),
            title: doc.title.clone(),
            description: doc.description.clone(),
            date: doc.date.clone(),
            display_date: doc.display_date(),
            author: doc.author.clone(),
            tags: doc.tags.clone(),
            category: doc.category.clone(),
        }
    }
}

/// Single document with its rendered body
#[derive(Debug, Serialize)]
struct DocumentDetail {
    #[serde(flatten)]
    summary: DocumentSummary,
    published: bool,
    html: String,
}

/// Documents under one tag or category
#[derive(Debug, Serialize)]
struct TermListing {
    name: String,
    path: String,
    documents: Vec<DocumentSummary>,
}

type Shared = Arc<ServerState>;

/// Static segments under `/api/:collection/` that shadow `:slug`
pub const RESERVED_SLUGS: &[&str] = &["tags", "categories"];

/// Build the router for a site
///
/// A document named after one of [`RESERVED_SLUGS`] is unreachable through
/// `/api/:collection/:slug`; `new` refuses to create one.
pub fn router(site: &Site) -> Router {
    let state = Arc::new(ServerState {
        site: site.clone(),
        index: site.index(),
    });

    Router::new()
        .route(feed::FEED_PATH, get(feed_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/api/:collection", get(list_handler))
        .route("/api/:collection/tags", get(tags_handler))
        .route("/api/:collection/categories", get(categories_handler))
        .route("/api/:collection/tag/:segment", get(tag_handler))
        .route("/api/:collection/category/:segment", get(category_handler))
        .route("/api/:collection/:slug", get(document_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = router(site);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run blocking index work off the async runtime
async fn blocking<T, F>(state: &Shared, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&ServerState) -> Result<T, ApiError> + Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
}

fn parse_collection(name: &str) -> Result<Collection, ApiError> {
    name.parse::<Collection>().map_err(ApiError::from)
}

async fn feed_handler(State(state): State<Shared>) -> Result<Response, ApiError> {
    let xml = blocking(&state, |s| {
        let changelog = s.index.list_all(Collection::Changelog);
        Ok(FeedGenerator::new(&s.site.config).generate(&changelog))
    })
    .await?;

    Ok((
        [
            (header::CONTENT_TYPE, feed::CONTENT_TYPE),
            (header::CACHE_CONTROL, feed::CACHE_CONTROL),
        ],
        xml,
    )
        .into_response())
}

async fn sitemap_handler(State(state): State<Shared>) -> Result<Response, ApiError> {
    let xml = blocking(&state, |s| {
        let blog = s.index.list_all(Collection::Blog);
        let changelog = s.index.list_all(Collection::Changelog);
        Ok(SitemapGenerator::new(&s.site.config).generate(&blog, &changelog))
    })
    .await?;

    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml).into_response())
}

async fn list_handler(
    State(state): State<Shared>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<DocumentSummary>>, ApiError> {
    let collection = parse_collection(&collection)?;
    let documents = blocking(&state, move |s| {
        Ok(s.index
            .list_all(collection)
            .iter()
            .map(DocumentSummary::from)
            .collect::<Vec<_>>())
    })
    .await?;
    Ok(Json(documents))
}

async fn document_handler(
    State(state): State<Shared>,
    Path((collection, slug)): Path<(String, String)>,
) -> Result<Json<DocumentDetail>, ApiError> {
    let collection = parse_collection(&collection)?;
    let detail = blocking(&state, move |s| {
        let doc = s
            .index
            .get_by_slug(collection, &slug)?
            .ok_or_else(|| ApiError::NotFound(format!("No {} entry {:?}", collection, slug)))?;
        let html = MarkdownRenderer::new().render(&doc.content);
        Ok(DocumentDetail {
            summary: DocumentSummary::from(&doc),
            published: doc.published,
            html,
        })
    })
    .await?;
    Ok(Json(detail))
}

async fn tags_handler(
    State(state): State<Shared>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let collection = parse_collection(&collection)?;
    let tags = blocking(&state, move |s| Ok(s.index.list_all_tags(collection))).await?;
    Ok(Json(tags))
}

async fn categories_handler(
    State(state): State<Shared>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let collection = parse_collection(&collection)?;
    let categories =
        blocking(&state, move |s| Ok(s.index.list_all_categories(collection))).await?;
    Ok(Json(categories))
}

async fn tag_handler(
    State(state): State<Shared>,
    Path((collection, segment)): Path<(String, String)>,
) -> Result<Json<TermListing>, ApiError> {
    let collection = parse_collection(&collection)?;
    let listing = blocking(&state, move |s| {
        let name = TaxonomyTable::tags(&s.index, collection).resolve(&segment);
        let documents = s.index.list_by_tag(collection, &name);
        let path = routes::tag_path(collection, &name);
        term_listing(name, path, &documents)
    })
    .await?;
    Ok(Json(listing))
}

async fn category_handler(
    State(state): State<Shared>,
    Path((collection, segment)): Path<(String, String)>,
) -> Result<Json<TermListing>, ApiError> {
    let collection = parse_collection(&collection)?;
    let listing = blocking(&state, move |s| {
        let name = TaxonomyTable::categories(&s.index, collection).resolve(&segment);
        let documents = s.index.list_by_category(collection, &name);
        let path = routes::category_path(collection, &name);
        term_listing(name, path, &documents)
    })
    .await?;
    Ok(Json(listing))
}

/// An empty listing is a missing page
fn term_listing(
    name: String,
    path: String,
    documents: &[Document],
) -> Result<TermListing, ApiError> {
    if documents.is_empty() {
        return Err(ApiError::NotFound(format!("Nothing filed under {:?}", name)));
    }
    Ok(TermListing {
        name,
        path,
        documents: documents.iter().map(DocumentSummary::from).collect(),
    })
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
