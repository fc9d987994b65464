/// Row to display-mapping conversion
///
/// Pure functions flattening fetched rows into the field sets the page
/// templates consume. Field names are part of the template contract and
/// must not change.
use crate::models::{AnnotatedPost, CommentRow, PostRow, TagRow};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Number of characters of body text shown in list teasers
pub const TEASER_LEN: usize = 200;

/// Display fields for a post on a list page
#[derive(Debug, Clone, Serialize)]
pub struct SerializedPost {
    pub title: String,
    pub teaser_text: String,
    pub author: String,
    pub comments_amount: i64,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub slug: String,
    pub tags: Vec<SerializedTag>,
    pub first_tag_title: Option<String>,
}

/// Display fields for a tag
#[derive(Debug, Clone, Serialize)]
pub struct SerializedTag {
    pub title: String,
    pub posts_with_tag: i64,
}

/// Display fields for a comment on the detail page
#[derive(Debug, Clone, Serialize)]
pub struct SerializedComment {
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
}

/// Display fields for the detail page's main post: full body text,
/// the comment thread, and the like count instead of a teaser
#[derive(Debug, Clone, Serialize)]
pub struct SerializedPostDetail {
    pub title: String,
    pub text: String,
    pub author: String,
    pub comments: Vec<SerializedComment>,
    pub likes_amount: i64,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub slug: String,
    pub tags: Vec<SerializedTag>,
}

/// First TEASER_LEN characters of the body text. Truncation is by
/// character, not byte, so multibyte text never splits a code point.
pub fn teaser(text: &str) -> String {
    match text.char_indices().nth(TEASER_LEN) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

pub fn serialize_tag(tag: &TagRow) -> SerializedTag {
    SerializedTag {
        title: tag.title.clone(),
        posts_with_tag: tag.posts_count,
    }
}

pub fn serialize_post(post: &AnnotatedPost) -> SerializedPost {
    SerializedPost {
        title: post.post.title.clone(),
        teaser_text: teaser(&post.post.text),
        author: post.post.author.clone(),
        comments_amount: post.comments_count,
        image_url: post.post.image_url.clone(),
        published_at: post.post.published_at,
        slug: post.post.slug.clone(),
        tags: post.tags.iter().map(serialize_tag).collect(),
        first_tag_title: post.tags.first().map(|tag| tag.title.clone()),
    }
}

pub fn serialize_comment(comment: &CommentRow) -> SerializedComment {
    SerializedComment {
        text: comment.text.clone(),
        published_at: comment.published_at,
        author: comment.author.clone(),
    }
}

pub fn serialize_post_detail(
    post: &PostRow,
    comments: &[CommentRow],
    tags: &[TagRow],
) -> SerializedPostDetail {
    SerializedPostDetail {
        title: post.title.clone(),
        text: post.text.clone(),
        author: post.author.clone(),
        comments: comments.iter().map(serialize_comment).collect(),
        likes_amount: post.likes_count,
        image_url: post.image_url.clone(),
        published_at: post.published_at,
        slug: post.slug.clone(),
        tags: tags.iter().map(serialize_tag).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post_row(text: &str, image_url: Option<&str>) -> PostRow {
        PostRow {
            id: 1,
            title: "Title".to_string(),
            text: text.to_string(),
            author: "alice".to_string(),
            image_url: image_url.map(str::to_string),
            published_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            slug: "title".to_string(),
            likes_count: 0,
        }
    }

    #[test]
    fn teaser_keeps_short_bodies_unchanged() {
        let body = "short body";
        assert_eq!(teaser(body), body);

        let exactly_200: String = "a".repeat(200);
        assert_eq!(teaser(&exactly_200), exactly_200);
    }

    #[test]
    fn teaser_truncates_to_200_characters() {
        let body: String = "a".repeat(201);
        let result = teaser(&body);
        assert_eq!(result.chars().count(), 200);
        assert_eq!(result, "a".repeat(200));
    }

    #[test]
    fn teaser_counts_characters_not_bytes() {
        // 'ф' is two bytes in UTF-8; 250 of them exceed 200 chars but must
        // truncate on a character boundary.
        let body: String = "ф".repeat(250);
        let result = teaser(&body);
        assert_eq!(result.chars().count(), 200);
        assert_eq!(result, "ф".repeat(200));
    }

    #[test]
    fn missing_image_serializes_as_null() {
        let annotated = AnnotatedPost {
            post: post_row("body", None),
            comments_count: 0,
            tags: vec![],
        };

        let serialized = serialize_post(&annotated);
        assert!(serialized.image_url.is_none());

        let json = serde_json::to_value(&serialized).unwrap();
        assert!(json["image_url"].is_null());
    }

    #[test]
    fn first_tag_title_is_absent_for_untagged_posts() {
        let annotated = AnnotatedPost {
            post: post_row("body", None),
            comments_count: 0,
            tags: vec![],
        };

        assert!(serialize_post(&annotated).first_tag_title.is_none());
    }

    #[test]
    fn first_tag_title_uses_the_first_tag() {
        let annotated = AnnotatedPost {
            post: post_row("body", Some("https://cdn.example/img.png")),
            comments_count: 3,
            tags: vec![
                TagRow {
                    id: 1,
                    title: "python".to_string(),
                    posts_count: 7,
                },
                TagRow {
                    id: 2,
                    title: "rust".to_string(),
                    posts_count: 2,
                },
            ],
        };

        let serialized = serialize_post(&annotated);
        assert_eq!(serialized.first_tag_title.as_deref(), Some("python"));
        assert_eq!(serialized.comments_amount, 3);
        assert_eq!(serialized.tags.len(), 2);
        assert_eq!(serialized.tags[0].posts_with_tag, 7);
        assert_eq!(
            serialized.image_url.as_deref(),
            Some("https://cdn.example/img.png")
        );
    }

    #[test]
    fn detail_serialization_keeps_full_text_and_comments() {
        let post = PostRow {
            likes_count: 42,
            ..post_row(&"b".repeat(500), None)
        };
        let comments = vec![CommentRow {
            id: 1,
            text: "nice".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 16, 9, 30, 0).unwrap(),
            author: "bob".to_string(),
        }];

        let serialized = serialize_post_detail(&post, &comments, &[]);
        assert_eq!(serialized.text.chars().count(), 500);
        assert_eq!(serialized.likes_amount, 42);
        assert_eq!(serialized.comments.len(), 1);
        assert_eq!(serialized.comments[0].author, "bob");
    }
}
