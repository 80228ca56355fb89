//! # sl-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the
//! `FeedService`. Failures re-render the feed with an alert banner, so the
//! page always stays usable.

use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse, Responder};
use askama::Template;
use chrono::Utc;
use log::warn;
use serde::Deserialize;
use sl_core::error::AppError;
use sl_core::models::{Category, PostDraft, PostId, PostKind, WalletKind};
use sl_core::service::FeedService;
use sl_ui::{FeedTemplate, PageOptions};

/// State shared across all Actix-web workers.
pub struct AppState {
    pub feed: FeedService,
    /// Absolute URL put into share payloads
    pub public_url: String,
    pub estimated_gas_sui: f64,
}

#[derive(Debug, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConnectForm {
    pub wallet: String,
}

/// Add-post dialog fields. Unchecked checkboxes are simply absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub kind: String,
    pub content: String,
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub store_on_chain: Option<String>,
}

impl PostForm {
    fn into_draft(self) -> Result<PostDraft, AppError> {
        let kind: PostKind = self
            .kind
            .parse()
            .map_err(|_| AppError::ValidationError(format!("unknown post type '{}'", self.kind)))?;
        let category = match self.category.trim() {
            "" => None,
            value => Some(value.parse::<Category>()?),
        };
        Ok(PostDraft {
            kind,
            content: self.content,
            title: self.title,
            image_url: self.image_url,
            category,
            persist_on_chain: self.store_on_chain.is_some(),
        })
    }
}

pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::SubmissionFailure(_) | AppError::ConnectionRefused(_) => StatusCode::BAD_GATEWAY,
        AppError::ProviderUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        AppError::SubmissionInProgress => StatusCode::CONFLICT,
        AppError::NotFound(_, _) => StatusCode::NOT_FOUND,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn tab_location(kind: PostKind) -> String {
    format!("/?tab={}", kind.as_path())
}

/// Renders the feed with the given tab, optional alert and status.
fn render_page(data: &AppState, tab: PostKind, notice: Option<String>, status: StatusCode) -> HttpResponse {
    let snapshot = match data.feed.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Snapshot failed: {}", e);
            return HttpResponse::InternalServerError().body(e.to_string());
        }
    };
    let options = PageOptions {
        tab,
        notice,
        estimated_gas_sui: data.estimated_gas_sui,
    };
    match FeedTemplate::from_snapshot(&snapshot, options, Utc::now()).render() {
        Ok(html) => HttpResponse::build(status).content_type("text/html; charset=utf-8").body(html),
        Err(e) => {
            warn!("Template rendering failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Logs the failure once and shows it as an alert on the feed.
fn error_page(data: &AppState, tab: PostKind, err: AppError) -> HttpResponse {
    warn!("Request failed: {}", err);
    render_page(data, tab, Some(err.to_string()), status_for(&err))
}

fn error_json(err: AppError) -> HttpResponse {
    warn!("Request failed: {}", err);
    HttpResponse::build(status_for(&err)).json(serde_json::json!({ "error": err.to_string() }))
}

/// Renders the feed (e.g., `/?tab=memes`)
pub async fn index(data: web::Data<AppState>, query: web::Query<TabQuery>) -> impl Responder {
    let tab = query
        .tab
        .as_deref()
        .and_then(|t| t.parse().ok())
        .unwrap_or(PostKind::Joke);
    render_page(&data, tab, None, StatusCode::OK)
}

pub async fn connect_wallet(data: web::Data<AppState>, form: web::Form<ConnectForm>) -> impl Responder {
    let wallet: WalletKind = match form.wallet.parse() {
        Ok(wallet) => wallet,
        Err(e) => return error_page(&data, PostKind::Joke, e),
    };
    match data.feed.connect(wallet).await {
        Ok(_) => see_other("/".to_string()),
        Err(e) => error_page(&data, PostKind::Joke, e),
    }
}

pub async fn disconnect_wallet(data: web::Data<AppState>) -> impl Responder {
    match data.feed.disconnect() {
        Ok(()) => see_other("/".to_string()),
        Err(e) => error_page(&data, PostKind::Joke, e),
    }
}

/// Full address as plain text, for the copy button.
pub async fn copy_address(data: web::Data<AppState>) -> impl Responder {
    match data.feed.copy_address() {
        Ok(address) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(address),
        Err(e) => {
            warn!("Request failed: {}", e);
            HttpResponse::build(status_for(&e)).body(e.to_string())
        }
    }
}

pub async fn like_post(data: web::Data<AppState>, path: web::Path<(String, String)>) -> impl Responder {
    let (kind, id) = path.into_inner();
    let kind: PostKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => return error_page(&data, PostKind::Joke, e),
    };
    match data.feed.like(kind, &PostId(id)) {
        Ok(_) => see_other(tab_location(kind)),
        Err(e) => error_page(&data, kind, e),
    }
}

pub async fn share_post(data: web::Data<AppState>, path: web::Path<(String, String)>) -> impl Responder {
    let (kind, id) = path.into_inner();
    let result = kind
        .parse::<PostKind>()
        .and_then(|kind| data.feed.share(kind, &PostId(id), &data.public_url));
    match result {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => error_json(e),
    }
}

/// Submits the add-post dialog. On-chain drafts wait for the wallet.
pub async fn submit_post(data: web::Data<AppState>, form: web::Form<PostForm>) -> impl Responder {
    let draft = match form.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return error_page(&data, PostKind::Joke, e),
    };
    let kind = draft.kind;
    match data.feed.submit(draft).await {
        Ok(_) => see_other(tab_location(kind)),
        Err(e) => error_page(&data, kind, e),
    }
}

pub async fn api_stats(data: web::Data<AppState>) -> impl Responder {
    match data.feed.stats() {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => error_json(e),
    }
}

pub async fn api_posts(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let result = path
        .into_inner()
        .parse::<PostKind>()
        .and_then(|kind| data.feed.list(kind));
    match result {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => error_json(e),
    }
}
