/// Page assemblers - build the rendering context for each blog page
use crate::db::{comment_repo, post_repo, tag_repo};
use crate::error::{AppError, Result};
use crate::models::{AnnotatedPost, PostRow};
use crate::serializers::{
    serialize_post, serialize_post_detail, serialize_tag, SerializedPost, SerializedPostDetail,
    SerializedTag,
};
use serde::Serialize;
use sqlx::PgPool;
use std::collections::HashMap;

/// Rendering context for the index page
#[derive(Debug, Serialize)]
pub struct IndexContext {
    pub most_popular_posts: Vec<SerializedPost>,
    pub page_posts: Vec<SerializedPost>,
    pub popular_tags: Vec<SerializedTag>,
}

/// Rendering context for the post detail page
#[derive(Debug, Serialize)]
pub struct PostDetailContext {
    pub post: SerializedPostDetail,
    pub popular_tags: Vec<SerializedTag>,
    pub most_popular_posts: Vec<SerializedPost>,
}

/// Rendering context for the per-tag post listing
#[derive(Debug, Serialize)]
pub struct TagContext {
    pub tag: String,
    pub popular_tags: Vec<SerializedTag>,
    pub posts: Vec<SerializedPost>,
    pub most_popular_posts: Vec<SerializedPost>,
}

/// Assembles page contexts from the repositories.
///
/// Every method issues a fixed number of statements regardless of how many
/// rows end up on the page: ranked posts come back in one query, and the
/// related comment counts and tags are attached through batch queries keyed
/// by post id.
pub struct PageService {
    pool: PgPool,
}

impl PageService {
    /// Popular posts shown in the sidebar of every page
    pub const POPULAR_POSTS_LIMIT: i64 = 5;
    /// Freshest posts shown on the index page
    pub const FRESH_POSTS_LIMIT: i64 = 5;
    /// Popular tags shown in the sidebar of every page
    pub const POPULAR_TAGS_LIMIT: i64 = 5;
    /// Posts shown on a tag listing page
    pub const TAG_PAGE_POSTS_LIMIT: i64 = 20;

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach comment counts and tags to fetched posts in two batch queries
    async fn annotate(&self, posts: Vec<PostRow>) -> Result<Vec<AnnotatedPost>> {
        let post_ids: Vec<i64> = posts.iter().map(|post| post.id).collect();

        let comment_counts: HashMap<i64, i64> =
            post_repo::count_comments_batch(&self.pool, &post_ids)
                .await?
                .into_iter()
                .collect();

        let mut tags_by_post: HashMap<i64, Vec<_>> = HashMap::new();
        for (post_id, tag) in tag_repo::tags_for_posts(&self.pool, &post_ids).await? {
            tags_by_post.entry(post_id).or_default().push(tag);
        }

        let annotated = posts
            .into_iter()
            .map(|post| AnnotatedPost {
                comments_count: comment_counts.get(&post.id).copied().unwrap_or(0),
                tags: tags_by_post.remove(&post.id).unwrap_or_default(),
                post,
            })
            .collect();

        Ok(annotated)
    }

    /// Popular posts, fully annotated and serialized for the sidebar
    async fn most_popular_posts(&self) -> Result<Vec<SerializedPost>> {
        let posts = post_repo::popular_posts(&self.pool, Self::POPULAR_POSTS_LIMIT).await?;
        let annotated = self.annotate(posts).await?;

        Ok(annotated.iter().map(serialize_post).collect())
    }

    /// Popular tags serialized for the sidebar
    async fn popular_tags(&self) -> Result<Vec<SerializedTag>> {
        let tags = tag_repo::popular_tags(&self.pool, Self::POPULAR_TAGS_LIMIT).await?;

        Ok(tags.iter().map(serialize_tag).collect())
    }

    /// Build the index page context: popular posts, the freshest posts,
    /// and popular tags.
    pub async fn index_context(&self) -> Result<IndexContext> {
        let most_popular_posts = self.most_popular_posts().await?;

        // The template shows the freshest posts with the most recent one
        // last, so reverse the newest-first fetch order.
        let mut fresh = post_repo::fresh_posts(&self.pool, Self::FRESH_POSTS_LIMIT).await?;
        fresh.reverse();
        let page_posts = self
            .annotate(fresh)
            .await?
            .iter()
            .map(serialize_post)
            .collect();

        let popular_tags = self.popular_tags().await?;

        Ok(IndexContext {
            most_popular_posts,
            page_posts,
            popular_tags,
        })
    }

    /// Build the post detail page context for a slug.
    ///
    /// Returns `AppError::NotFound` when no post carries the slug.
    pub async fn post_detail_context(&self, slug: &str) -> Result<PostDetailContext> {
        let post = post_repo::find_by_slug(&self.pool, slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post with slug '{}'", slug)))?;

        let comments = comment_repo::comments_for_post(&self.pool, post.id).await?;
        let related_tags = tag_repo::tags_for_posts(&self.pool, &[post.id])
            .await?
            .into_iter()
            .map(|(_, tag)| tag)
            .collect::<Vec<_>>();

        let serialized_post = serialize_post_detail(&post, &comments, &related_tags);

        Ok(PostDetailContext {
            post: serialized_post,
            popular_tags: self.popular_tags().await?,
            most_popular_posts: self.most_popular_posts().await?,
        })
    }

    /// Build the tag listing page context for a tag title.
    ///
    /// Returns `AppError::NotFound` when no tag carries the title.
    pub async fn tag_context(&self, title: &str) -> Result<TagContext> {
        let tag = tag_repo::find_by_title(&self.pool, title)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("tag with title '{}'", title)))?;

        let related = post_repo::posts_by_tag(&self.pool, tag.id, Self::TAG_PAGE_POSTS_LIMIT)
            .await?;
        let posts = self
            .annotate(related)
            .await?
            .iter()
            .map(serialize_post)
            .collect();

        Ok(TagContext {
            tag: tag.title,
            popular_tags: self.popular_tags().await?,
            posts,
            most_popular_posts: self.most_popular_posts().await?,
        })
    }
}
