//! The `traffic-wizard-web` dashboard: axum routes over the page loaders.

pub mod pages;

use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, Path, Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::add_content::{AddContentForm, AddContentInput, SubmitOutcome};
use crate::api::ContentApi;
use crate::config::Config;
use crate::dashboard::{self, DeleteDialog};
use crate::detail::{self, ContentKey, DetailState, PageScope, RefreshGuard};
use crate::export::{ExportFormat, ShareLinks};
use crate::notify::{NoticeParams, Toast};
use crate::paths;
use crate::sections::export_modal::EXPORT_FAILED;
use pages::{Audience, Tab};

#[derive(Clone)]
pub struct AppState {
    api: Arc<dyn ContentApi>,
    config: Config,
    refresh_guard: RefreshGuard,
}

impl AppState {
    pub fn new(api: Arc<dyn ContentApi>, config: Config) -> Self {
        Self {
            api,
            config,
            refresh_guard: RefreshGuard::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok\n" }))
        .route("/", get(dashboard_page))
        .route("/content/new", get(new_content_page).post(submit_content))
        .route("/content/:id", get(detail_page))
        .route("/content/:id/refresh", post(refresh_content))
        .route("/content/:id/delete", post(delete_content))
        .route("/content/:id/export/:format", get(export_content))
        .route("/share/:share_id", get(share_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn notice(params: Option<Query<NoticeParams>>) -> Option<Toast> {
    params.and_then(|Query(params)| params.toast())
}

#[derive(Debug, Default, Deserialize)]
struct DashboardQuery {
    confirm_delete: Option<String>,
}

async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
    params: Option<Query<NoticeParams>>,
) -> Html<String> {
    let scope = PageScope::new();
    let (view, load_toast) = dashboard::load_detached(Arc::clone(&state.api), &scope).await;

    let dialog = query
        .confirm_delete
        .as_deref()
        .and_then(|id| view.find(id))
        .map(|record| DeleteDialog::open(&record.id, record.display_title()))
        .unwrap_or_default();

    let toasts: Vec<Toast> = notice(params).into_iter().chain(load_toast).collect();
    Html(pages::dashboard(&view, &dialog, &toasts))
}

async fn new_content_page(params: Option<Query<NoticeParams>>) -> Html<String> {
    let form = AddContentForm::new(AddContentInput::default());
    let toasts: Vec<Toast> = notice(params).into_iter().collect();
    Html(pages::add_form(&form, &toasts))
}

async fn submit_content(
    State(state): State<AppState>,
    Form(input): Form<AddContentInput>,
) -> Response {
    let mut form = AddContentForm::new(input);
    match form.submit(state.api.as_ref()).await {
        SubmitOutcome::Navigate {
            location,
            after,
            toast,
            ..
        } => {
            let mut resp = Html(pages::navigating(&location, after, &toast)).into_response();
            let refresh = format!("{};url={location}", after.as_secs_f64());
            if let Ok(value) = HeaderValue::from_str(&refresh) {
                resp.headers_mut().insert(header::REFRESH, value);
            }
            resp
        }
        SubmitOutcome::Rejected(toast) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(pages::add_form(&form, &[toast])),
        )
            .into_response(),
    }
}

#[derive(Debug, Default, Deserialize)]
struct TabQuery {
    tab: Option<String>,
}

async fn detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<TabQuery>,
    params: Option<Query<NoticeParams>>,
) -> Response {
    render_detail(
        &state,
        ContentKey::Id(id),
        Tab::from_slug(query.tab.as_deref()),
        Audience::Owner,
        notice(params),
    )
    .await
}

async fn share_page(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
    Query(query): Query<TabQuery>,
) -> Response {
    render_detail(
        &state,
        ContentKey::Share(share_id.clone()),
        Tab::from_slug(query.tab.as_deref()),
        Audience::Public(&share_id),
        None,
    )
    .await
}

async fn render_detail(
    state: &AppState,
    key: ContentKey,
    tab: Tab,
    audience: Audience<'_>,
    notice: Option<Toast>,
) -> Response {
    let scope = PageScope::new();
    let (page, load_toast) = detail::load_page_detached(Arc::clone(&state.api), key, &scope).await;
    let toasts: Vec<Toast> = notice.into_iter().chain(load_toast).collect();

    match page.state() {
        DetailState::Loaded(view) => {
            let links = ShareLinks::for_record(&state.config, &view.record);
            Html(pages::detail(view, tab, audience, &links, &toasts)).into_response()
        }
        DetailState::NotFound => {
            (StatusCode::NOT_FOUND, Html(pages::not_found(&toasts))).into_response()
        }
        DetailState::Loading => Html(pages::loading(&toasts)).into_response(),
    }
}

async fn refresh_content(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let result = detail::refresh(state.api.as_ref(), &state.refresh_guard, &id).await;
    let toast = detail::refresh_toast(&result);
    Redirect::to(&toast.attach_to(&paths::content(&id)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Decision {
    Confirm,
    Cancel,
}

#[derive(Debug, Deserialize)]
struct DeleteForm {
    decision: Decision,
}

async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Redirect {
    let mut dialog = DeleteDialog::open(&id, "");
    match form.decision {
        Decision::Cancel => {
            dialog.cancel();
            Redirect::to("/")
        }
        Decision::Confirm => match dashboard::delete_confirmed(state.api.as_ref(), &mut dialog).await
        {
            Some(toast) => Redirect::to(&toast.attach_to("/")),
            None => Redirect::to("/"),
        },
    }
}

async fn export_content(
    State(state): State<AppState>,
    Path((id, format)): Path<(String, ExportFormat)>,
) -> Response {
    tracing::info!(id = %id, %format, "export content");
    let file = match state.api.export_content(&id, format).await {
        Ok(file) => file,
        Err(err) => {
            tracing::error!(id = %id, ?err, "export failed");
            let toast = Toast::error(EXPORT_FAILED);
            return Redirect::to(&toast.attach_to(&paths::content(&id))).into_response();
        }
    };

    let disposition = match HeaderValue::from_str(&file.content_disposition()) {
        Ok(value) => value,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    let mut resp = Response::new(axum::body::Body::from(file.bytes));
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(format.content_type()),
    );
    resp.headers_mut()
        .insert(header::CONTENT_DISPOSITION, disposition);
    resp
}

/// Resolves on Ctrl-C. Dropped handlers cancel their page scopes on the way out.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
