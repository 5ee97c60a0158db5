pub mod health;
pub mod links;

use axum::extract::{DefaultBodyLimit, MatchedPath};
use axum::{Json, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        links::list_files,
        links::get_file,
        links::delete_links,
        links::bulk_links,
        links::delete_line,
        links::create_file,
        links::delete_file,
        health::health,
    ),
    components(schemas(
        links::LinkItem,
        links::SubjectItem,
        links::FileLinksResponse,
        links::StatusResponse,
        links::DeleteLinkItem,
        links::DeleteLinksRequest,
        links::BulkLinkItem,
        links::BulkLinksRequest,
        links::DeleteLineRequest,
        links::FileRequest,
        health::HealthResp,
    )),
    tags(
        (name = "Links", description = "Markdown link collections"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE])
}

/// Front-end assets for every path the API does not claim. Production builds
/// are single-page apps, so unknown paths fall back to `index.html`.
fn with_static_assets(router: Router, cfg: &Config) -> Router {
    let dir = cfg.static_dir.as_path();
    if cfg.is_production {
        router.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        )
    } else {
        router.fallback_service(ServeDir::new(dir))
    }
}

pub fn build_router(ctx: AppContext) -> Router {
    let router = Router::new()
        .nest("/api", health::routes(ctx.clone()))
        .nest("/api", links::routes(ctx.clone()))
        .route("/api/openapi.json", get(openapi_json));
    let router = with_static_assets(router, &ctx.cfg);

    let router = if ctx.cfg.cors_enabled {
        router.layer(cors_layer())
    } else {
        router
    };

    router
        .layer(DefaultBodyLimit::max(ctx.cfg.body_max_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}
