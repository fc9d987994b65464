use crate::models::CommentRow;
use sqlx::PgPool;

/// Fetch all comments for a post joined with author usernames, oldest first
pub async fn comments_for_post(
    pool: &PgPool,
    post_id: i64,
) -> Result<Vec<CommentRow>, sqlx::Error> {
    let comments = sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT c.id, c.text, c.published_at, a.username AS author
        FROM comments c
        JOIN authors a ON a.id = c.author_id
        WHERE c.post_id = $1
        ORDER BY c.published_at ASC, c.id ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}
