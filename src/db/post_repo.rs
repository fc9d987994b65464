use crate::models::PostRow;
use sqlx::{PgPool, Row};

/// Fetch posts ordered by popularity (distinct liker count, descending).
/// Ties are broken by ascending post id.
pub async fn popular_posts(pool: &PgPool, limit: i64) -> Result<Vec<PostRow>, sqlx::Error> {
    let posts = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT p.id, p.title, p.text, a.username AS author, p.image_url,
               p.published_at, p.slug,
               COUNT(DISTINCT l.user_id) AS likes_count
        FROM posts p
        JOIN authors a ON a.id = p.author_id
        LEFT JOIN likes l ON l.post_id = p.id
        GROUP BY p.id, a.username
        ORDER BY likes_count DESC, p.id ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Fetch the most recently published posts, newest first
pub async fn fresh_posts(pool: &PgPool, limit: i64) -> Result<Vec<PostRow>, sqlx::Error> {
    let posts = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT p.id, p.title, p.text, a.username AS author, p.image_url,
               p.published_at, p.slug,
               COUNT(DISTINCT l.user_id) AS likes_count
        FROM posts p
        JOIN authors a ON a.id = p.author_id
        LEFT JOIN likes l ON l.post_id = p.id
        GROUP BY p.id, a.username
        ORDER BY p.published_at DESC, p.id DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find a post by its slug, annotated with its like count
pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<PostRow>, sqlx::Error> {
    let post = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT p.id, p.title, p.text, a.username AS author, p.image_url,
               p.published_at, p.slug,
               COUNT(DISTINCT l.user_id) AS likes_count
        FROM posts p
        JOIN authors a ON a.id = p.author_id
        LEFT JOIN likes l ON l.post_id = p.id
        WHERE p.slug = $1
        GROUP BY p.id, a.username
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Fetch posts carrying a tag, newest first
pub async fn posts_by_tag(
    pool: &PgPool,
    tag_id: i64,
    limit: i64,
) -> Result<Vec<PostRow>, sqlx::Error> {
    let posts = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT p.id, p.title, p.text, a.username AS author, p.image_url,
               p.published_at, p.slug,
               COUNT(DISTINCT l.user_id) AS likes_count
        FROM posts p
        JOIN authors a ON a.id = p.author_id
        JOIN post_tags pt ON pt.post_id = p.id
        LEFT JOIN likes l ON l.post_id = p.id
        WHERE pt.tag_id = $1
        GROUP BY p.id, a.username
        ORDER BY p.published_at DESC, p.id DESC
        LIMIT $2
        "#,
    )
    .bind(tag_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Get comment counts for multiple posts in one statement
pub async fn count_comments_batch(
    pool: &PgPool,
    post_ids: &[i64],
) -> Result<Vec<(i64, i64)>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT post_id, COUNT(*) as count
        FROM comments
        WHERE post_id = ANY($1)
        GROUP BY post_id
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    let counts: Vec<(i64, i64)> = rows
        .into_iter()
        .map(|row| {
            let post_id: i64 = row.get("post_id");
            let count: i64 = row.get("count");
            (post_id, count)
        })
        .collect();

    Ok(counts)
}
