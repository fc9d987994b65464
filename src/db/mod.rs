/// Database access layer
///
/// Provides connection pooling, schema bootstrap, and the repositories
/// used by the page assembly layer.
pub mod comment_repo;
pub mod post_repo;
pub mod tag_repo;

use crate::config::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

/// Create a PostgreSQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    info!(
        max_connections = config.max_connections,
        "Creating PostgreSQL connection pool"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.url)
        .await
}

/// Ensure the blog tables exist.
///
/// The service only reads these tables at request time; entities are created
/// through the administrative interface. We lazily create the schema at
/// startup to unblock environments where migrations have not been applied
/// yet (e.g. fresh developer machines or CI spins).
pub async fn ensure_blog_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring blog tables exist");

    for statement in [
        AUTHORS_TABLE,
        POSTS_TABLE,
        TAGS_TABLE,
        POST_TAGS_TABLE,
        LIKES_TABLE,
        COMMENTS_TABLE,
        POSTS_PUBLISHED_AT_INDEX,
        POST_TAGS_TAG_INDEX,
        LIKES_POST_INDEX,
        COMMENTS_POST_INDEX,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}

const AUTHORS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS authors (
    id BIGSERIAL PRIMARY KEY,
    username TEXT UNIQUE NOT NULL
)
"#;

const POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    text TEXT NOT NULL,
    author_id BIGINT NOT NULL REFERENCES authors(id),
    image_url TEXT,
    published_at TIMESTAMPTZ NOT NULL,
    slug TEXT UNIQUE NOT NULL
)
"#;

const TAGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tags (
    id BIGSERIAL PRIMARY KEY,
    title TEXT UNIQUE NOT NULL
)
"#;

const POST_TAGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS post_tags (
    post_id BIGINT NOT NULL REFERENCES posts(id),
    tag_id BIGINT NOT NULL REFERENCES tags(id),
    PRIMARY KEY (post_id, tag_id)
)
"#;

const LIKES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS likes (
    post_id BIGINT NOT NULL REFERENCES posts(id),
    user_id BIGINT NOT NULL REFERENCES authors(id),
    PRIMARY KEY (post_id, user_id)
)
"#;

const COMMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS comments (
    id BIGSERIAL PRIMARY KEY,
    post_id BIGINT NOT NULL REFERENCES posts(id),
    author_id BIGINT NOT NULL REFERENCES authors(id),
    text TEXT NOT NULL,
    published_at TIMESTAMPTZ NOT NULL
)
"#;

const POSTS_PUBLISHED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS posts_published_at_idx ON posts (published_at DESC)";

const POST_TAGS_TAG_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS post_tags_tag_idx ON post_tags (tag_id)";

const LIKES_POST_INDEX: &str = "CREATE INDEX IF NOT EXISTS likes_post_idx ON likes (post_id)";

const COMMENTS_POST_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS comments_post_idx ON comments (post_id)";
