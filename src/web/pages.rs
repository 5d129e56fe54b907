//! Full HTML pages. Everything here is a pure function of already-loaded state.

use std::fmt::Write as _;
use std::time::Duration;

use crate::add_content::{AddContentForm, InputMode};
use crate::dashboard::{DashboardView, DeleteDialog};
use crate::detail::DetailView;
use crate::export::ShareLinks;
use crate::model::{ContentRecord, Query};
use crate::notify::{TOAST_TTL, Toast};
use crate::paths;
use crate::sections::{
    bags, bands, card, escape_html, export_modal, freshness, meta_preview, pill, progress_bar,
    seo_score, tags, topic_clusters, traffic,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Queries,
    Keywords,
    Serp,
    StructuredData,
    Social,
    Advanced,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Self::Overview,
        Self::Queries,
        Self::Keywords,
        Self::Serp,
        Self::StructuredData,
        Self::Social,
        Self::Advanced,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Queries => "queries",
            Self::Keywords => "keywords",
            Self::Serp => "serp",
            Self::StructuredData => "structured-data",
            Self::Social => "social",
            Self::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Queries => "LLM Queries",
            Self::Keywords => "Keywords & Traffic",
            Self::Serp => "SERP & Answers",
            Self::StructuredData => "Structured Data",
            Self::Social => "Social",
            Self::Advanced => "Advanced",
        }
    }

    /// Unknown or missing slugs fall back to the overview.
    pub fn from_slug(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|tab| tab.slug() == raw)
            .unwrap_or_default()
    }
}

/// Who is looking at a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience<'a> {
    /// Full dashboard: refresh, export and delete are offered.
    Owner,
    /// Public share link, read-only. Holds the share id the page was opened with.
    Public(&'a str),
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f7f9; color: #1d2330; }
header.top { background: #1d2330; color: #fff; padding: 12px 24px; display: flex; gap: 24px; align-items: center; }
header.top a { color: #fff; text-decoration: none; }
main { max-width: 1100px; margin: 24px auto; padding: 0 16px; }
.card { background: #fff; border-radius: 8px; padding: 16px 20px; margin-bottom: 16px; box-shadow: 0 1px 2px rgba(0,0,0,.08); }
.tiles { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }
.tile .value { font-size: 28px; font-weight: 600; }
.pill { border-radius: 999px; padding: 2px 10px; font-size: 12px; margin-left: 8px; }
.bar { background: #e6e8ec; border-radius: 4px; height: 8px; overflow: hidden; }
.bar-fill { height: 100%; }
.score { font-size: 32px; font-weight: 700; }
.band-green { background: #dcf5e3; color: #17693a; }
.band-blue { background: #dde8fb; color: #1e4f9c; }
.band-orange { background: #fde9d3; color: #9a4d07; }
.band-red { background: #fbdcdc; color: #9c1e1e; }
.band-gray { background: #eceef1; color: #4a5160; }
.bar-fill.band-green { background: #2fa55a; }
.bar-fill.band-blue { background: #3a78d8; }
.bar-fill.band-orange { background: #e98a23; }
.bar-fill.band-red { background: #d64545; }
.tabs { display: flex; gap: 4px; margin-bottom: 16px; flex-wrap: wrap; }
.tabs a { padding: 8px 14px; border-radius: 6px; text-decoration: none; color: #1d2330; }
.tabs a.active { background: #1d2330; color: #fff; }
.tag { display: inline-block; background: #eceef1; border-radius: 4px; padding: 2px 8px; margin: 2px; font-size: 12px; }
.button { display: inline-block; background: #3a78d8; color: #fff; border: 0; border-radius: 6px; padding: 8px 14px; text-decoration: none; cursor: pointer; margin: 2px; }
.button.danger { background: #d64545; }
.button.secondary { background: #eceef1; color: #1d2330; }
.button[disabled] { opacity: .6; cursor: wait; }
.toasts { position: fixed; top: 16px; right: 16px; display: flex; flex-direction: column; gap: 8px; }
.toast { padding: 10px 16px; border-radius: 6px; color: #fff; animation: toast-fade var(--ttl) forwards; }
.toast-success { background: #2fa55a; }
.toast-info { background: #3a78d8; }
.toast-error { background: #d64545; }
@keyframes toast-fade { 0%, 85% { opacity: 1; } 100% { opacity: 0; } }
.modal { position: fixed; inset: 0; background: rgba(0,0,0,.4); display: flex; align-items: center; justify-content: center; }
.modal .card { max-width: 420px; }
.spinner { width: 40px; height: 40px; border: 4px solid #e6e8ec; border-top-color: #3a78d8; border-radius: 50%; animation: spin 1s linear infinite; margin: 80px auto; }
@keyframes spin { to { transform: rotate(360deg); } }
pre { white-space: pre-wrap; word-break: break-word; background: #f6f7f9; padding: 12px; border-radius: 6px; }
"#;

pub fn layout(title: &str, toasts: &[Toast], body: &str) -> String {
    let mut out = format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{} | Traffic Wizard</title>
<style>{STYLE}</style>
</head>
<body>
<header class="top"><a href="/"><strong>Traffic Wizard</strong></a><a href="/">Dashboard</a><a href="/content/new">Add Content</a></header>
<main>
"#,
        escape_html(title)
    );
    out.push_str(body);
    out.push_str("</main>\n");

    let ttl = TOAST_TTL.as_millis();
    let _ = write!(
        out,
        r#"<div class="toasts" id="toasts" data-ttl="{ttl}" style="--ttl: {ttl}ms">"#
    );
    for toast in toasts {
        let _ = write!(
            out,
            r#"<div class="toast toast-{}" role="status">{}</div>"#,
            toast.level.as_str(),
            escape_html(&toast.message)
        );
    }
    out.push_str("</div>");
    if !toasts.is_empty() {
        let _ = write!(
            out,
            r#"<script>setTimeout(function () {{ document.querySelectorAll(".toast").forEach(function (t) {{ t.remove(); }}); }}, {ttl});</script>"#
        );
    }
    out.push_str("\n</body>\n</html>\n");
    out
}

pub fn dashboard(view: &DashboardView, dialog: &DeleteDialog, toasts: &[Toast]) -> String {
    let analytics = &view.analytics;
    let mut body = String::from("<h1>Dashboard</h1>");

    body.push_str(r#"<div class="tiles">"#);
    for (label, value) in [
        ("Total Content", analytics.total_content.to_string()),
        ("LLM Queries", analytics.total_queries.to_string()),
        (
            "Avg SEO Score",
            format!("{}%", analytics.avg_performance_score.percent()),
        ),
        (
            "Avg Readability",
            format!("{:.1}", analytics.avg_readability_score.value()),
        ),
    ] {
        let _ = write!(
            body,
            r#"<div class="card tile"><div class="label">{label}</div><div class="value">{value}</div></div>"#
        );
    }
    body.push_str("</div>");

    if !analytics.top_performing.is_empty() {
        let mut chart = String::from(r#"<div class="chart">"#);
        for entry in &analytics.top_performing {
            let score = entry.performance_score;
            let title = match &entry.id {
                Some(id) => format!(
                    r#"<a href="{}">{}</a>"#,
                    escape_html(&paths::content(id)),
                    escape_html(&entry.title)
                ),
                None => escape_html(&entry.title),
            };
            let _ = write!(
                chart,
                r#"<div class="chart-row"><span>{title}</span><span>{}%</span>{}</div>"#,
                score.percent(),
                progress_bar(score.value(), bands::seo_overall(score))
            );
        }
        chart.push_str("</div>");
        body.push_str(&card("top-performing", "Top Performing Content", &chart));
    }

    if !analytics.recent_queries.is_empty() {
        let mut list = String::from(r#"<ul class="recent-queries">"#);
        for query in &analytics.recent_queries {
            let _ = write!(
                list,
                "<li>{}{}</li>",
                escape_html(&query.query),
                pill(
                    &format!("{}%", query.relevance_score.percent()),
                    bands::seo_overall(query.relevance_score)
                )
            );
        }
        list.push_str("</ul>");
        body.push_str(&card("recent-queries", "Recent LLM Queries", &list));
    }

    body.push_str(&card("content-list", "Your Content", &content_list(view)));

    if let DeleteDialog::Confirming { content_id, title } = dialog {
        body.push_str(&delete_dialog(content_id, title));
    }

    layout("Dashboard", toasts, &body)
}

fn content_list(view: &DashboardView) -> String {
    if view.is_empty() {
        return r#"<div class="empty-state"><p>No content yet. Submit a URL or paste an article to get its SEO and LLM analysis.</p><a class="button" href="/content/new">Add Your First Content</a></div>"#.to_owned();
    }

    let mut out = String::from(r#"<ul class="contents">"#);
    for record in &view.contents {
        let href = escape_html(&paths::content(&record.id));
        let confirm = escape_html(&paths::confirm_delete(&record.id));
        let source = record.url.as_deref().unwrap_or("Manual entry");
        let _ = write!(
            out,
            r#"<li class="content-item"><a href="{href}"><strong>{}</strong></a>{}<div class="source">{}</div><div class="meta">{} keywords</div><a class="button danger" href="{confirm}">Delete</a></li>"#,
            escape_html(record.display_title()),
            pill(
                &format!("{}%", record.performance_score.percent()),
                bands::seo_overall(record.performance_score)
            ),
            escape_html(source),
            record.keywords.len(),
        );
    }
    out.push_str("</ul>");
    out
}

fn delete_dialog(content_id: &str, title: &str) -> String {
    format!(
        r#"<div class="modal" role="dialog" aria-modal="true"><div class="card"><h3>Delete content?</h3><p>"{}" and its generated queries will be removed. This cannot be undone.</p><form method="post" action="{}"><button type="submit" name="decision" value="cancel" class="button secondary">Cancel</button><button type="submit" name="decision" value="confirm" class="button danger">Delete</button></form></div></div>"#,
        escape_html(title),
        escape_html(&paths::delete(content_id))
    )
}

pub fn add_form(form: &AddContentForm, toasts: &[Toast]) -> String {
    let input = &form.input;
    let (url_checked, manual_checked) = match input.mode {
        InputMode::Url => (" checked", ""),
        InputMode::Manual => ("", " checked"),
    };
    let disabled = if form.is_busy() { " disabled" } else { "" };

    let body = format!(
        r#"<h1>Add Content</h1>
<section class="card">
<form method="post" action="/content/new" id="add-content">
<fieldset class="modes">
<label><input type="radio" name="input_type" value="url"{url_checked}> From URL</label>
<label><input type="radio" name="input_type" value="manual"{manual_checked}> Manual entry</label>
</fieldset>
<div class="mode-url"><label>URL<br><input type="url" name="url" value="{}" placeholder="https://example.com/article" size="60"></label></div>
<div class="mode-manual"><label>Title<br><input type="text" name="title" value="{}" size="60"></label><br>
<label>Content<br><textarea name="content" rows="12" cols="80">{}</textarea></label></div>
<button type="submit" class="button"{disabled}>Analyze Content</button>
</form>
</section>
<script>
document.getElementById("add-content").addEventListener("submit", function (event) {{
  var button = event.target.querySelector("button[type=submit]");
  if (button.disabled) {{ event.preventDefault(); return; }}
  button.disabled = true;
  button.textContent = "Analyzing...";
}});
</script>"#,
        escape_html(&input.url),
        escape_html(&input.title),
        escape_html(&input.content),
    );
    layout("Add Content", toasts, &body)
}

/// Shown after a successful create; the browser moves on after `after`.
pub fn navigating(location: &str, after: Duration, toast: &Toast) -> String {
    let location = escape_html(location);
    let body = format!(
        r#"<meta http-equiv="refresh" content="{};url={location}"><div class="spinner" aria-busy="true"></div><p class="center">Opening your analysis... <a href="{location}">Go now</a></p>"#,
        after.as_secs_f64()
    );
    layout("Content added", std::slice::from_ref(toast), &body)
}

pub fn loading(toasts: &[Toast]) -> String {
    layout(
        "Loading",
        toasts,
        r#"<div class="spinner" aria-busy="true"></div>"#,
    )
}

pub fn not_found(toasts: &[Toast]) -> String {
    layout(
        "Not found",
        toasts,
        r#"<section class="card not-found"><h1>Content not found</h1><p>It may have been deleted, or the link is wrong.</p><a class="button" href="/">Back to Dashboard</a></section>"#,
    )
}

pub fn detail(
    view: &DetailView,
    tab: Tab,
    audience: Audience<'_>,
    links: &ShareLinks,
    toasts: &[Toast],
) -> String {
    let record = &view.record;
    let base = match audience {
        Audience::Owner => paths::content(&record.id),
        Audience::Public(share_id) => paths::share(share_id),
    };

    let mut body = record_header(record, audience);

    body.push_str(r#"<nav class="tabs">"#);
    for candidate in Tab::ALL {
        let class = if candidate == tab { " class=\"active\"" } else { "" };
        let _ = write!(
            body,
            r#"<a href="{}?tab={}"{class}>{}</a>"#,
            escape_html(&base),
            candidate.slug(),
            candidate.label()
        );
    }
    body.push_str("</nav>");

    let sections = tab_sections(view, tab, audience, links);
    if sections.is_empty() {
        body.push_str(
            r#"<section class="card empty-tab">No analysis available for this tab yet.</section>"#,
        );
    } else {
        for section in sections {
            body.push_str(&section);
        }
    }

    layout(record.display_title(), toasts, &body)
}

fn record_header(record: &ContentRecord, audience: Audience<'_>) -> String {
    let mut out = format!(
        r#"<section class="card record-header"><h1>{}{}</h1>"#,
        escape_html(record.display_title()),
        pill(
            &format!("{}%", record.performance_score.percent()),
            bands::seo_overall(record.performance_score)
        )
    );
    if let Some(url) = &record.url {
        let url = escape_html(url);
        let _ = write!(out, r#"<p class="source"><a href="{url}">{url}</a></p>"#);
    }
    if let Some(description) = record
        .optimized_description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    {
        let _ = write!(out, r#"<p class="description">{}</p>"#, escape_html(description));
    }
    if !record.keywords.is_empty() {
        out.push_str(&tags(&record.keywords));
    }

    let _ = write!(
        out,
        r#"<p class="stats">{} views, {} LLM queries"#,
        record.views, record.llm_queries
    );
    if let Some(created) = record.created_at.as_deref().and_then(format_timestamp) {
        let _ = write!(out, ", created {created}");
    }
    if let Some(updated) = record.updated_at.as_deref().and_then(format_timestamp) {
        let _ = write!(out, ", updated {updated}");
    }
    out.push_str("</p>");

    if audience == Audience::Owner {
        let _ = write!(
            out,
            r#"<div class="actions"><a class="button secondary" href="/">Back</a><a class="button danger" href="{}">Delete</a></div>"#,
            escape_html(&paths::confirm_delete(&record.id))
        );
    }
    out.push_str("</section>");
    out
}

fn tab_sections(
    view: &DetailView,
    tab: Tab,
    audience: Audience<'_>,
    links: &ShareLinks,
) -> Vec<String> {
    let record = &view.record;
    let b = &record.bags;
    let refresh_action = paths::refresh(&record.id);

    let sections = match tab {
        Tab::Overview => vec![
            seo_score::render(record.seo_score.as_ref()),
            freshness::render(
                record.freshness.as_ref(),
                (audience == Audience::Owner).then_some(refresh_action.as_str()),
            ),
            meta_preview::render(record.meta_preview.as_ref()),
            original_content(record),
            (audience == Audience::Owner).then(|| export_modal::render(&record.id, links)),
        ],
        Tab::Queries => vec![
            queries("LLM Queries", &view.standard_queries, true),
            queries("Voice Queries", &view.voice_queries, false),
            bags::render("Voice Search Phrases", b.voice_queries.as_ref()),
        ],
        Tab::Keywords => vec![
            traffic::render(
                record.traffic_prediction.as_ref(),
                record.keyword_gap.as_ref(),
                record.serp_optimization.as_ref(),
            ),
            topic_clusters::render(record.topic_clusters.as_ref()),
            bags::render("LSI Keywords", b.lsi_keywords.as_ref()),
            bags::render("Entities", b.entities.as_ref()),
        ],
        Tab::Serp => vec![
            bags::render("FAQs", b.faqs.as_ref()),
            bags::render("People Also Ask", b.people_also_ask.as_ref()),
            bags::render("Answer Box Content", b.answer_box_content.as_ref()),
            bags::render("Citation Snippets", b.citation_snippets.as_ref()),
            bags::render("Search Intent", b.search_intent.as_ref()),
        ],
        Tab::StructuredData => vec![
            bags::render("Structured Data", b.structured_data.as_ref()),
            bags::render("Canonical Tags", b.canonical_tags.as_ref()),
            bags::render("Internal Linking", b.internal_linking.as_ref()),
            bags::render("Backlink Anchors", b.backlink_anchors.as_ref()),
        ],
        Tab::Social => vec![bags::render("Social Posts", b.social_posts.as_ref())],
        Tab::Advanced => vec![
            bags::render("Topic Authority", b.topic_authority.as_ref()),
            bags::render("Semantic Enrichment", b.semantic_enrichment.as_ref()),
            bags::render("Quality Score", b.quality_score.as_ref()),
        ],
    };
    sections.into_iter().flatten().collect()
}

fn original_content(record: &ContentRecord) -> Option<String> {
    if record.content.trim().is_empty() {
        return None;
    }
    Some(card(
        "original-content",
        "Content",
        &format!(
            "<details><summary>{}</summary><pre>{}</pre></details>",
            escape_html(&record.title),
            escape_html(&record.content)
        ),
    ))
}

/// `with_response` is false for voice queries, which carry no answer.
fn queries(title: &str, queries: &[Query], with_response: bool) -> Option<String> {
    if queries.is_empty() {
        return None;
    }
    let mut out = String::from(r#"<ol class="queries">"#);
    for query in queries {
        let _ = write!(
            out,
            "<li><strong>{}</strong>{}",
            escape_html(&query.query),
            pill(
                &format!("{}% relevant", query.relevance_score.percent()),
                bands::seo_overall(query.relevance_score)
            )
        );
        if with_response && !query.response.trim().is_empty() {
            let _ = write!(out, "<p>{}</p>", escape_html(&query.response));
        }
        out.push_str("</li>");
    }
    out.push_str("</ol>");
    Some(card("queries", title, &out))
}

/// ISO-8601 timestamps, with or without offset; anything else is not shown.
fn format_timestamp(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.format("%Y-%m-%d %H:%M UTC%:z").to_string());
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|parsed| parsed.format("%Y-%m-%d %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalyticsSummary, Metric, QueryType, TrafficPrediction, TrafficTier};

    fn links() -> ShareLinks {
        ShareLinks {
            share_url: "http://127.0.0.1:3000/share/c1".to_owned(),
            sitemap_url: "http://localhost:8000/api/sitemap.xml".to_owned(),
        }
    }

    fn record() -> ContentRecord {
        ContentRecord {
            id: "c1".to_owned(),
            title: "Raw title".to_owned(),
            content: "Body".to_owned(),
            performance_score: Metric::new(85.0),
            ..ContentRecord::default()
        }
    }

    #[test]
    fn unknown_tab_falls_back_to_overview() {
        assert_eq!(Tab::from_slug(Some("keywords")), Tab::Keywords);
        assert_eq!(Tab::from_slug(Some("bogus")), Tab::Overview);
        assert_eq!(Tab::from_slug(None), Tab::Overview);
    }

    #[test]
    fn empty_dashboard_shows_call_to_action() {
        let view = DashboardView {
            analytics: AnalyticsSummary::default(),
            contents: Vec::new(),
        };
        let html = dashboard(&view, &DeleteDialog::Closed, &[]);
        assert!(html.contains("empty-state"));
        assert!(html.contains(r#"href="/content/new">Add Your First Content"#));
        assert!(!html.contains("Top Performing"));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn delete_dialog_offers_cancel_and_confirm() {
        let view = DashboardView {
            contents: vec![record()],
            ..DashboardView::default()
        };
        let html = dashboard(&view, &DeleteDialog::open("c1", "Raw title"), &[]);
        assert!(html.contains(r#"action="/content/c1/delete""#));
        assert!(html.contains(r#"value="cancel""#));
        assert!(html.contains(r#"value="confirm""#));
    }

    #[test]
    fn public_detail_hides_owner_actions() {
        let mut record = record();
        record.freshness = Some(Default::default());
        let view = DetailView::compose(record, Vec::new());

        let owner = detail(&view, Tab::Overview, Audience::Owner, &links(), &[]);
        assert!(owner.contains(r#"action="/content/c1/refresh""#));
        assert!(owner.contains("/content/c1/export/json"));

        let public = detail(&view, Tab::Overview, Audience::Public("c1"), &links(), &[]);
        assert!(!public.contains("/refresh"));
        assert!(!public.contains("/export/"));
        assert!(public.contains(r#"href="/share/c1?tab=queries""#));
    }

    #[test]
    fn share_tabs_keep_the_share_id_from_the_request() {
        let view = DetailView::compose(record(), Vec::new());
        let html = detail(&view, Tab::Overview, Audience::Public("pub-7"), &links(), &[]);
        assert!(html.contains(r#"href="/share/pub-7?tab=keywords""#));
        assert!(!html.contains("/share/c1?tab="));
    }

    #[test]
    fn links_encode_record_ids() {
        let mut record = record();
        record.id = "a b/c".to_owned();
        let view = DetailView::compose(record, Vec::new());
        let html = detail(&view, Tab::Overview, Audience::Owner, &links(), &[]);
        assert!(html.contains(r#"href="/content/a%20b%2Fc?tab=queries""#));
        assert!(html.contains(r#"href="/?confirm_delete=a%20b%2Fc""#));
    }

    #[test]
    fn queries_tab_splits_standard_and_voice() {
        let queries = vec![
            Query {
                query: "what is rust".to_owned(),
                response: "A language".to_owned(),
                ..Query::default()
            },
            Query {
                query: "hey, what is rust".to_owned(),
                query_type: QueryType::Voice,
                ..Query::default()
            },
        ];
        let view = DetailView::compose(record(), queries);
        let html = detail(&view, Tab::Queries, Audience::Owner, &links(), &[]);
        assert!(html.contains("<h3>LLM Queries</h3>"));
        assert!(html.contains("<h3>Voice Queries</h3>"));
        assert!(html.contains("<p>A language</p>"));
    }

    #[test]
    fn keywords_tab_renders_medium_tier_in_orange() {
        let mut record = record();
        record.traffic_prediction = Some(TrafficPrediction {
            traffic_tier: TrafficTier::Medium,
            ..TrafficPrediction::default()
        });
        let view = DetailView::compose(record, Vec::new());
        let html = detail(&view, Tab::Keywords, Audience::Owner, &links(), &[]);
        assert!(html.contains(r#"<span class="pill band-orange">Medium Traffic</span>"#));
    }

    #[test]
    fn tab_without_analyses_says_so() {
        let view = DetailView::compose(record(), Vec::new());
        let html = detail(&view, Tab::Advanced, Audience::Owner, &links(), &[]);
        assert!(html.contains("No analysis available for this tab yet."));
    }

    #[test]
    fn timestamps_render_only_when_parseable() {
        assert_eq!(
            format_timestamp("2024-05-01T10:30:00.123456").as_deref(),
            Some("2024-05-01 10:30")
        );
        assert!(format_timestamp("2024-05-01T10:30:00Z").is_some());
        assert_eq!(format_timestamp("yesterday"), None);
    }

    #[test]
    fn navigating_page_refreshes_after_delay() {
        let html = navigating(
            "/content/abc123",
            Duration::from_millis(1500),
            &Toast::success("Content added successfully"),
        );
        assert!(html.contains(r#"content="1.5;url=/content/abc123""#));
        assert!(html.contains("Content added successfully"));
    }
}
