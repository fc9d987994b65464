/// Page handlers - HTTP endpoints for the blog pages
///
/// Each handler assembles the page's rendering context and returns it as
/// JSON; template rendering happens downstream.
use crate::error::Result;
use crate::metrics::{PAGE_RENDER_DURATION_SECONDS, PAGE_RENDER_TOTAL};
use crate::services::PageService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// Index page: popular posts, freshest posts, popular tags
pub async fn index(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let timer = PAGE_RENDER_DURATION_SECONDS
        .with_label_values(&["index"])
        .start_timer();

    let service = PageService::new((**pool).clone());
    let context = service.index_context().await?;

    timer.observe_duration();
    PAGE_RENDER_TOTAL.with_label_values(&["index"]).inc();

    Ok(HttpResponse::Ok().json(context))
}

/// Post detail page for a slug
pub async fn post_detail(pool: web::Data<PgPool>, slug: web::Path<String>) -> Result<HttpResponse> {
    let timer = PAGE_RENDER_DURATION_SECONDS
        .with_label_values(&["post_detail"])
        .start_timer();

    let service = PageService::new((**pool).clone());
    let context = service.post_detail_context(&slug).await?;

    timer.observe_duration();
    PAGE_RENDER_TOTAL.with_label_values(&["post_detail"]).inc();

    Ok(HttpResponse::Ok().json(context))
}

/// Post listing for a tag title
pub async fn tag_filter(pool: web::Data<PgPool>, title: web::Path<String>) -> Result<HttpResponse> {
    let timer = PAGE_RENDER_DURATION_SECONDS
        .with_label_values(&["tag_filter"])
        .start_timer();

    let service = PageService::new((**pool).clone());
    let context = service.tag_context(&title).await?;

    timer.observe_duration();
    PAGE_RENDER_TOTAL.with_label_values(&["tag_filter"]).inc();

    Ok(HttpResponse::Ok().json(context))
}

/// Static contacts page, no data dependency
pub async fn contacts() -> Result<HttpResponse> {
    PAGE_RENDER_TOTAL.with_label_values(&["contacts"]).inc();

    Ok(HttpResponse::Ok().json(serde_json::json!({})))
}
