/// HTTP handlers for the blog pages
///
/// - Index: popular posts, freshest posts, popular tags
/// - Post detail: full text, comments, like count, related tags
/// - Tag filter: posts under a tag
/// - Contacts: static page
pub mod pages;

pub use pages::{contacts, index, post_detail, tag_filter};
