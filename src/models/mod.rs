/// Data models for blog-service
///
/// Row types fetched from PostgreSQL. Aggregate counts (likes per post,
/// posts per tag) are computed by the queries themselves, never stored.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post row joined with its author and annotated with its like count
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub author: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub slug: String,
    pub likes_count: i64,
}

/// Tag row annotated with how many posts carry it
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TagRow {
    pub id: i64,
    pub title: String,
    pub posts_count: i64,
}

/// Comment row joined with its author's username
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommentRow {
    pub id: i64,
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
}

/// A post with the related rows a list page needs attached
#[derive(Debug, Clone)]
pub struct AnnotatedPost {
    pub post: PostRow,
    pub comments_count: i64,
    pub tags: Vec<TagRow>,
}
