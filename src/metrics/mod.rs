//! Prometheus metrics for blog-service.
//!
//! Exposes page-render collectors and an HTTP handler for the `/metrics`
//! endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// Duration of page context assembly by page (index, post_detail, tag_filter).
    pub static ref PAGE_RENDER_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "page_render_duration_seconds",
        "Page context assembly duration segmented by page",
        &["page"]
    )
    .expect("failed to register page_render_duration_seconds");

    /// Total page renders processed by page.
    pub static ref PAGE_RENDER_TOTAL: IntCounterVec = register_int_counter_vec!(
        "page_render_total",
        "Total page renders segmented by page",
        &["page"]
    )
    .expect("failed to register page_render_total");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
