use std::io::{BufRead as _, Write as _};
use std::sync::Arc;

use anyhow::Context as _;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiError, ContentApi};
use crate::cli::{DeleteArgs, ListArgs};
use crate::detail::PageScope;
use crate::model::{AnalyticsSummary, ContentRecord};
use crate::notify::{Toast, ToastLevel};

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub analytics: AnalyticsSummary,
    /// Backend order; never sorted locally.
    pub contents: Vec<ContentRecord>,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ContentRecord> {
        self.contents.iter().find(|c| c.id == id)
    }
}

/// Analytics and the content list, fetched together. `None` means cancelled.
pub async fn fetch_dashboard(
    api: &dyn ContentApi,
    cancel: &CancellationToken,
) -> Option<Result<DashboardView, ApiError>> {
    tokio::select! {
        _ = cancel.cancelled() => None,
        result = async { tokio::try_join!(api.analytics(), api.list_content()) } => {
            Some(result.map(|(analytics, contents)| DashboardView { analytics, contents }))
        }
    }
}

/// A failed load still renders, as the empty view plus an error toast.
pub fn settle(result: Result<DashboardView, ApiError>) -> (DashboardView, Option<Toast>) {
    match result {
        Ok(view) => (view, None),
        Err(err) => {
            tracing::error!(?err, "load dashboard");
            (
                DashboardView::default(),
                Some(Toast::error("Failed to load dashboard")),
            )
        }
    }
}

/// Fetches on a task bound to `scope` and settles the result. A cancelled
/// load renders as the empty view without a toast.
pub async fn load_detached(
    api: Arc<dyn ContentApi>,
    scope: &PageScope,
) -> (DashboardView, Option<Toast>) {
    let cancel = scope.token().clone();
    let task = tokio::spawn(async move { fetch_dashboard(api.as_ref(), &cancel).await });
    match task.await {
        Ok(Some(result)) => settle(result),
        Ok(None) => (DashboardView::default(), None),
        Err(err) => {
            tracing::error!(?err, "dashboard load task");
            (
                DashboardView::default(),
                Some(Toast::error("Failed to load dashboard")),
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteDialog {
    #[default]
    Closed,
    Confirming {
        content_id: String,
        title: String,
    },
}

impl DeleteDialog {
    pub fn open(content_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::Confirming {
            content_id: content_id.into(),
            title: title.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Confirming { .. })
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Closes the dialog and hands back the id to delete, if it was open.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Confirming { content_id, .. } => Some(content_id),
            Self::Closed => None,
        }
    }
}

/// Deletes after confirmation. The caller reloads the dashboard afterwards.
pub async fn delete_confirmed(api: &dyn ContentApi, dialog: &mut DeleteDialog) -> Option<Toast> {
    let content_id = dialog.confirm()?;
    tracing::info!(id = %content_id, "delete content");
    match api.delete_content(&content_id).await {
        Ok(()) => Some(Toast::success("Content deleted")),
        Err(err) => {
            tracing::error!(id = %content_id, ?err, "delete content");
            Some(Toast::error("Failed to delete content"))
        }
    }
}

pub async fn list(api: &dyn ContentApi, args: ListArgs) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    let Some(result) = fetch_dashboard(api, &cancel).await else {
        return Ok(());
    };
    let view = result.context("load dashboard")?;

    let analytics = &view.analytics;
    println!(
        "content: {}  queries: {}  avg seo: {}%  avg readability: {:.1}",
        analytics.total_content,
        analytics.total_queries,
        analytics.avg_performance_score.percent(),
        analytics.avg_readability_score.value()
    );

    if view.is_empty() {
        println!("No content yet. Add some with `traffic-wizard add --url <URL>`.");
        return Ok(());
    }
    for record in view.contents.iter().take(args.limit.unwrap_or(usize::MAX)) {
        println!(
            "{}\t{:>3}%\t{}",
            record.id,
            record.performance_score.percent(),
            record.display_title()
        );
    }
    Ok(())
}

pub async fn delete(api: &dyn ContentApi, args: DeleteArgs) -> anyhow::Result<()> {
    let record = api
        .get_content(&args.id)
        .await
        .with_context(|| format!("load content {}", args.id))?;
    let mut dialog = DeleteDialog::open(&record.id, record.display_title());

    if !args.yes && !confirm_on_terminal(record.display_title())? {
        dialog.cancel();
        println!("Cancelled");
        return Ok(());
    }

    match delete_confirmed(api, &mut dialog).await {
        Some(toast) if toast.level == ToastLevel::Error => {
            anyhow::bail!("{}: {}", toast.message, args.id)
        }
        Some(toast) => println!("{}", toast.message),
        None => {}
    }
    Ok(())
}

fn confirm_on_terminal(title: &str) -> anyhow::Result<bool> {
    let mut stderr = std::io::stderr();
    write!(stderr, "Delete \"{title}\"? This cannot be undone. [y/N] ").context("prompt")?;
    stderr.flush().context("flush prompt")?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}
