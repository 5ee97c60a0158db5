use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::link_store::StoreError;
use crate::application::use_cases::links::add_bulk_links::AddBulkLinks;
use crate::application::use_cases::links::create_file::CreateFile;
use crate::application::use_cases::links::delete_file::DeleteFile;
use crate::application::use_cases::links::delete_line::DeleteLine;
use crate::application::use_cases::links::delete_links::DeleteLinks;
use crate::application::use_cases::links::get_links::GetLinks;
use crate::application::use_cases::links::list_files::ListFiles;
use crate::bootstrap::app_context::AppContext;
use crate::domain::links::link as domain;

#[derive(Debug, Serialize, ToSchema)]
pub struct LinkItem {
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectItem {
    pub subject: String,
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FileLinksResponse {
    pub data: Vec<SubjectItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    fn success() -> Json<Self> {
        Json(Self { status: "success" })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteLinkItem {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteLinksRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub links: Vec<DeleteLinkItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkLinkItem {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkLinksRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub links: Vec<BulkLinkItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteLineRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(rename = "lineIndex")]
    pub line_index: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FileRequest {
    #[serde(default)]
    pub filename: String,
}

impl From<domain::Subject> for SubjectItem {
    fn from(s: domain::Subject) -> Self {
        Self {
            subject: s.name,
            links: s
                .links
                .into_iter()
                .map(|l| LinkItem {
                    id: l.id,
                    title: l.title,
                    url: l.url,
                    timestamp: l.timestamp,
                })
                .collect(),
        }
    }
}

impl From<DeleteLinkItem> for domain::Link {
    fn from(l: DeleteLinkItem) -> Self {
        Self {
            id: l.id,
            ..domain::Link::new(l.title, l.url)
        }
    }
}

impl From<BulkLinkItem> for domain::Link {
    fn from(l: BulkLinkItem) -> Self {
        domain::Link::new(l.title, l.url)
    }
}

fn error_status(op: &'static str, filename: &str, err: &StoreError) -> StatusCode {
    match err {
        StoreError::Validation(_) => {
            tracing::warn!(op, filename = %filename, error = %err, "link_request_rejected");
            StatusCode::BAD_REQUEST
        }
        StoreError::NotFound(_) => {
            tracing::warn!(op, filename = %filename, error = %err, "link_target_not_found");
            StatusCode::NOT_FOUND
        }
        StoreError::Io { .. } => {
            tracing::error!(op, filename = %filename, error = ?err, "link_store_io_failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn body_or_400<T>(op: &'static str, payload: Result<Json<T>, JsonRejection>) -> Result<T, StatusCode> {
    payload.map(|Json(v)| v).map_err(|e| {
        tracing::warn!(op, error = %e, "request_body_rejected");
        StatusCode::BAD_REQUEST
    })
}

#[utoipa::path(get, path = "/api/files", tag = "Links",
    responses((status = 200, body = [String])))]
pub async fn list_files(State(ctx): State<AppContext>) -> Result<Json<Vec<String>>, StatusCode> {
    let store = ctx.link_store();
    let uc = ListFiles {
        store: store.as_ref(),
    };
    let files = uc
        .execute()
        .await
        .map_err(|e| error_status("list_files", "", &e))?;
    Ok(Json(files))
}

#[utoipa::path(get, path = "/api/file/{filename}", tag = "Links",
    params(("filename" = String, Path, description = "Markdown file name")),
    responses(
        (status = 200, body = FileLinksResponse),
        (status = 400, description = "Invalid filename"),
        (status = 404, description = "File not found")
    ))]
pub async fn get_file(
    State(ctx): State<AppContext>,
    Path(filename): Path<String>,
) -> Result<Json<FileLinksResponse>, StatusCode> {
    let store = ctx.link_store();
    let uc = GetLinks {
        store: store.as_ref(),
    };
    let subjects = uc
        .execute(&filename)
        .await
        .map_err(|e| error_status("get_file", &filename, &e))?;
    Ok(Json(FileLinksResponse {
        data: subjects.into_iter().map(SubjectItem::from).collect(),
    }))
}

#[utoipa::path(post, path = "/api/delete_links", tag = "Links",
    request_body = DeleteLinksRequest,
    responses(
        (status = 200, body = StatusResponse),
        (status = 400, description = "Malformed body or invalid filename"),
        (status = 404, description = "File not found")
    ))]
pub async fn delete_links(
    State(ctx): State<AppContext>,
    payload: Result<Json<DeleteLinksRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let req = body_or_400("delete_links", payload)?;
    let links: Vec<domain::Link> = req.links.into_iter().map(Into::into).collect();

    let store = ctx.link_store();
    let uc = DeleteLinks {
        store: store.as_ref(),
    };
    uc.execute(&req.filename, &links)
        .await
        .map_err(|e| error_status("delete_links", &req.filename, &e))?;
    Ok(StatusResponse::success())
}

#[utoipa::path(post, path = "/api/bulk_links", tag = "Links",
    request_body = BulkLinksRequest,
    responses(
        (status = 200, body = StatusResponse),
        (status = 400, description = "Malformed body or missing filename")
    ))]
pub async fn bulk_links(
    State(ctx): State<AppContext>,
    payload: Result<Json<BulkLinksRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let req = body_or_400("bulk_links", payload)?;
    let links: Vec<domain::Link> = req.links.into_iter().map(Into::into).collect();

    let store = ctx.link_store();
    let uc = AddBulkLinks {
        store: store.as_ref(),
    };
    uc.execute(&req.filename, &req.subject, &links)
        .await
        .map_err(|e| error_status("bulk_links", &req.filename, &e))?;
    Ok(StatusResponse::success())
}

#[utoipa::path(post, path = "/api/delete_line", tag = "Links",
    request_body = DeleteLineRequest,
    responses(
        (status = 200, body = StatusResponse),
        (status = 400, description = "Malformed body or negative index"),
        (status = 404, description = "File or line not found")
    ))]
pub async fn delete_line(
    State(ctx): State<AppContext>,
    payload: Result<Json<DeleteLineRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let req = body_or_400("delete_line", payload)?;
    let store = ctx.link_store();
    let uc = DeleteLine {
        store: store.as_ref(),
    };
    uc.execute(&req.filename, req.line_index)
        .await
        .map_err(|e| error_status("delete_line", &req.filename, &e))?;
    Ok(StatusResponse::success())
}

#[utoipa::path(post, path = "/api/create_file", tag = "Links",
    request_body = FileRequest,
    responses((status = 200, body = StatusResponse), (status = 400, description = "Invalid filename")))]
pub async fn create_file(
    State(ctx): State<AppContext>,
    payload: Result<Json<FileRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let req = body_or_400("create_file", payload)?;
    let store = ctx.link_store();
    let uc = CreateFile {
        store: store.as_ref(),
    };
    uc.execute(&req.filename)
        .await
        .map_err(|e| error_status("create_file", &req.filename, &e))?;
    Ok(StatusResponse::success())
}

#[utoipa::path(post, path = "/api/delete_file", tag = "Links",
    request_body = FileRequest,
    responses(
        (status = 200, body = StatusResponse),
        (status = 400, description = "Invalid filename"),
        (status = 404, description = "File not found")
    ))]
pub async fn delete_file(
    State(ctx): State<AppContext>,
    payload: Result<Json<FileRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let req = body_or_400("delete_file", payload)?;
    let store = ctx.link_store();
    let uc = DeleteFile {
        store: store.as_ref(),
    };
    uc.execute(&req.filename)
        .await
        .map_err(|e| error_status("delete_file", &req.filename, &e))?;
    Ok(StatusResponse::success())
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/files", get(list_files))
        .route("/file/:filename", get(get_file))
        .route("/delete_links", post(delete_links))
        .route("/bulk_links", post(bulk_links))
        .route("/delete_line", post(delete_line))
        .route("/create_file", post(create_file))
        .route("/delete_file", post(delete_file))
        .with_state(ctx)
}
