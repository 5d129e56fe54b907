//! Content detail loading: the record and its generated queries, fetched
//! together and composed into one view model per page visit.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use anyhow::Context as _;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::api::{ApiError, ContentApi};
use crate::cli::{RefreshArgs, ShowArgs};
use crate::model::{ContentRecord, Query, QueryType};
use crate::notify::Toast;
use crate::sections::bands;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKey {
    Id(String),
    Share(String),
}

#[derive(Debug, Clone)]
pub struct DetailView {
    pub record: ContentRecord,
    pub standard_queries: Vec<Query>,
    pub voice_queries: Vec<Query>,
}

impl DetailView {
    pub fn compose(record: ContentRecord, queries: Vec<Query>) -> Self {
        let (voice_queries, standard_queries) = queries
            .into_iter()
            .partition(|q| q.query_type == QueryType::Voice);
        Self {
            record,
            standard_queries,
            voice_queries,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DetailState {
    Loading,
    Loaded(Box<DetailView>),
    NotFound,
}

/// Per-visit state of the detail page.
#[derive(Debug)]
pub struct DetailPage {
    state: DetailState,
}

impl Default for DetailPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailPage {
    pub fn new() -> Self {
        Self {
            state: DetailState::Loading,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn into_state(self) -> DetailState {
        self.state
    }

    /// Any failure ends in `NotFound`; the returned toast tells the user.
    pub fn resolve(&mut self, result: Result<DetailView, ApiError>) -> Option<Toast> {
        match result {
            Ok(view) => {
                self.state = DetailState::Loaded(Box::new(view));
                None
            }
            Err(err) => {
                tracing::error!(?err, "load content detail");
                self.state = DetailState::NotFound;
                let message = if err.is_not_found() {
                    "Content not found"
                } else {
                    "Failed to load content"
                };
                Some(Toast::error(message))
            }
        }
    }

    fn fail(&mut self) -> Toast {
        self.state = DetailState::NotFound;
        Toast::error("Failed to load content")
    }
}

/// Cancels its token when dropped, so loads started for a visit never outlive it.
#[derive(Debug)]
pub struct PageScope {
    token: CancellationToken,
    _guard: DropGuard,
}

impl Default for PageScope {
    fn default() -> Self {
        Self::new()
    }
}

impl PageScope {
    pub fn new() -> Self {
        let token = CancellationToken::new();
        let guard = token.clone().drop_guard();
        Self {
            token,
            _guard: guard,
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Fetches record and queries. `None` means the scope was cancelled first.
pub async fn fetch_detail(
    api: &dyn ContentApi,
    key: &ContentKey,
    cancel: &CancellationToken,
) -> Option<Result<DetailView, ApiError>> {
    let fetch = async {
        let (record, queries) = match key {
            ContentKey::Id(id) => {
                tokio::try_join!(api.get_content(id), api.list_queries(id))?
            }
            ContentKey::Share(share_id) => {
                let record = api.get_shared_content(share_id).await?;
                let queries = api.list_queries(&record.id).await?;
                (record, queries)
            }
        };
        Ok::<_, ApiError>(DetailView::compose(record, queries))
    };

    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!(?key, "detail load cancelled");
            None
        }
        result = fetch => Some(result),
    }
}

/// Runs one visit's load and returns the settled page plus an optional toast.
pub async fn load_page(
    api: &dyn ContentApi,
    key: &ContentKey,
    scope: &PageScope,
) -> (DetailPage, Option<Toast>) {
    let mut page = DetailPage::new();
    let toast = match fetch_detail(api, key, scope.token()).await {
        Some(result) => page.resolve(result),
        None => None,
    };
    (page, toast)
}

/// Like [`load_page`], but the fetch runs on its own task bound to `scope`.
/// When the caller goes away the scope drops, and the task abandons its
/// requests instead of finishing them unobserved.
pub async fn load_page_detached(
    api: Arc<dyn ContentApi>,
    key: ContentKey,
    scope: &PageScope,
) -> (DetailPage, Option<Toast>) {
    let cancel = scope.token().clone();
    let task = tokio::spawn(async move { fetch_detail(api.as_ref(), &key, &cancel).await });

    let mut page = DetailPage::new();
    let toast = match task.await {
        Ok(Some(result)) => page.resolve(result),
        Ok(None) => None,
        Err(err) => {
            tracing::error!(?err, "detail load task");
            Some(page.fail())
        }
    };
    (page, toast)
}

/// Tracks refreshes in flight so each content id has at most one.
#[derive(Debug, Clone, Default)]
pub struct RefreshGuard {
    in_flight: Arc<Mutex<HashSet<String>>>,
}

#[derive(Debug)]
pub struct RefreshTicket {
    id: String,
    in_flight: Arc<Mutex<HashSet<String>>>,
}

impl Drop for RefreshTicket {
    fn drop(&mut self) {
        if let Ok(mut in_flight) = self.in_flight.lock() {
            in_flight.remove(&self.id);
        }
    }
}

impl RefreshGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self, id: &str) -> Option<RefreshTicket> {
        let mut in_flight = self.in_flight.lock().ok()?;
        if !in_flight.insert(id.to_owned()) {
            return None;
        }
        Some(RefreshTicket {
            id: id.to_owned(),
            in_flight: Arc::clone(&self.in_flight),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed,
    AlreadyRunning,
}

pub async fn refresh(
    api: &dyn ContentApi,
    guard: &RefreshGuard,
    id: &str,
) -> Result<RefreshOutcome, ApiError> {
    let Some(_ticket) = guard.try_begin(id) else {
        tracing::info!(id, "refresh already in flight");
        return Ok(RefreshOutcome::AlreadyRunning);
    };
    tracing::info!(id, "refresh content");
    api.refresh_content(id).await?;
    Ok(RefreshOutcome::Refreshed)
}

pub fn refresh_toast(result: &Result<RefreshOutcome, ApiError>) -> Toast {
    match result {
        Ok(RefreshOutcome::Refreshed) => Toast::success("Content refreshed"),
        Ok(RefreshOutcome::AlreadyRunning) => Toast::info("Refresh already in progress"),
        Err(err) => {
            tracing::error!(?err, "refresh content");
            Toast::error("Failed to refresh content")
        }
    }
}

pub async fn show(api: &dyn ContentApi, args: ShowArgs) -> anyhow::Result<()> {
    let scope = PageScope::new();
    let key = ContentKey::Id(args.id.clone());
    let (page, toast) = load_page(api, &key, &scope).await;
    if let Some(toast) = toast {
        anyhow::bail!("{}: {}", toast.message, args.id);
    }
    let DetailState::Loaded(view) = page.into_state() else {
        anyhow::bail!("Content not found: {}", args.id);
    };

    if args.json {
        let out = serde_json::json!({
            "content": view.record,
            "queries": view.standard_queries,
            "voice_queries": view.voice_queries,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize content view")?
        );
        return Ok(());
    }

    for line in summary_lines(&view) {
        println!("{line}");
    }
    Ok(())
}

pub async fn run_refresh(api: &dyn ContentApi, args: RefreshArgs) -> anyhow::Result<()> {
    let guard = RefreshGuard::new();
    let result = refresh(api, &guard, &args.id).await;
    let toast = refresh_toast(&result);
    result.with_context(|| format!("refresh {}", args.id))?;
    println!("{}", toast.message);

    let scope = PageScope::new();
    let (page, toast) = load_page(api, &ContentKey::Id(args.id.clone()), &scope).await;
    if let Some(toast) = toast {
        anyhow::bail!("{}: {}", toast.message, args.id);
    }
    if let DetailState::Loaded(view) = page.state()
        && let Some(freshness) = &view.record.freshness
    {
        println!(
            "freshness: {} ({}%, {} days old)",
            freshness.status.label(),
            freshness.freshness_score.percent(),
            freshness.days_old
        );
    }
    Ok(())
}

/// Plain-text overview used by `show`.
pub fn summary_lines(view: &DetailView) -> Vec<String> {
    let record = &view.record;
    let mut lines = vec![
        format!("{} ({})", record.display_title(), record.id),
        format!("source: {}", record.url.as_deref().unwrap_or("manual")),
        format!("performance: {}%", record.performance_score.percent()),
    ];
    if !record.keywords.is_empty() {
        lines.push(format!("keywords: {}", record.keywords.join(", ")));
    }
    if let Some(seo) = &record.seo_score {
        lines.push(format!(
            "seo: {} / 100, grade {} [{}]",
            seo.overall_score.percent(),
            seo.grade,
            bands::seo_grade(&seo.grade).name()
        ));
    }
    if let Some(freshness) = &record.freshness {
        lines.push(format!(
            "freshness: {} [{}], {} days old{}",
            freshness.status.label(),
            bands::freshness_status(&freshness.status).name(),
            freshness.days_old,
            if freshness.needs_update {
                ", update recommended"
            } else {
                ""
            }
        ));
    }
    if let Some(traffic) = &record.traffic_prediction {
        lines.push(format!(
            "traffic: {} tier [{}], ~{} visits/month",
            traffic.traffic_tier.label(),
            bands::traffic_tier(&traffic.traffic_tier).name(),
            traffic.estimated_monthly_traffic.mid
        ));
    }
    lines.push(format!(
        "queries: {} standard, {} voice",
        view.standard_queries.len(),
        view.voice_queries.len()
    ));
    lines
}
