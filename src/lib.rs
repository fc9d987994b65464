/// Blog Service Library
///
/// Serves the read-only pages of a blog: the index with popularity-ranked
/// sidebars, post detail pages with comments, and per-tag post listings.
/// All writes happen elsewhere; this service only assembles rendering
/// contexts from the relational store.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for the blog pages
/// - `models`: Row types for posts, tags, comments
/// - `services`: Page assembly layer
/// - `serializers`: Row to display-mapping conversion
/// - `db`: Database access layer and repositories
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod serializers;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
