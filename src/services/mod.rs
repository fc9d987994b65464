/// Page assembly layer for blog-service
///
/// Turns repository rows into the rendering contexts the page templates
/// consume.
pub mod pages;

pub use pages::{IndexContext, PageService, PostDetailContext, TagContext};
