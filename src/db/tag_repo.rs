use crate::models::TagRow;
use sqlx::{PgPool, Row};

/// Fetch tags ordered by popularity (number of posts carrying the tag,
/// descending). Ties are broken by ascending tag id.
pub async fn popular_tags(pool: &PgPool, limit: i64) -> Result<Vec<TagRow>, sqlx::Error> {
    let tags = sqlx::query_as::<_, TagRow>(
        r#"
        SELECT t.id, t.title, COUNT(pt.post_id) AS posts_count
        FROM tags t
        LEFT JOIN post_tags pt ON pt.tag_id = t.id
        GROUP BY t.id
        ORDER BY posts_count DESC, t.id ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(tags)
}

/// Find a tag by its title, annotated with its post count
pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<TagRow>, sqlx::Error> {
    let tag = sqlx::query_as::<_, TagRow>(
        r#"
        SELECT t.id, t.title, COUNT(pt.post_id) AS posts_count
        FROM tags t
        LEFT JOIN post_tags pt ON pt.tag_id = t.id
        WHERE t.title = $1
        GROUP BY t.id
        "#,
    )
    .bind(title)
    .fetch_optional(pool)
    .await?;

    Ok(tag)
}

/// Get the tags for multiple posts in one statement.
///
/// Each tag carries its global post count so list pages can render the
/// per-tag counter without a query per tag. Rows are ordered by
/// (post_id, tag_id) so per-post tag order is deterministic.
pub async fn tags_for_posts(
    pool: &PgPool,
    post_ids: &[i64],
) -> Result<Vec<(i64, TagRow)>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT pt.post_id, t.id, t.title,
               (SELECT COUNT(*) FROM post_tags pt2 WHERE pt2.tag_id = t.id) AS posts_count
        FROM post_tags pt
        JOIN tags t ON t.id = pt.tag_id
        WHERE pt.post_id = ANY($1)
        ORDER BY pt.post_id ASC, t.id ASC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    let tags: Vec<(i64, TagRow)> = rows
        .into_iter()
        .map(|row| {
            let post_id: i64 = row.get("post_id");
            let tag = TagRow {
                id: row.get("id"),
                title: row.get("title"),
                posts_count: row.get("posts_count"),
            };
            (post_id, tag)
        })
        .collect();

    Ok(tags)
}
