//! Section renderers for the content detail page.
//!
//! Every renderer takes an optional slice of a [`ContentRecord`] and returns
//! `None` when there is nothing to show, so a missing analysis never becomes an
//! error or an empty placeholder.
//!
//! [`ContentRecord`]: crate::model::ContentRecord

pub mod bags;
pub mod bands;
pub mod export_modal;
pub mod freshness;
pub mod meta_preview;
pub mod seo_score;
pub mod topic_clusters;
pub mod traffic;

use std::fmt::Write as _;

use bands::Band;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn pill(label: &str, band: Band) -> String {
    format!(
        r#"<span class="pill {}">{}</span>"#,
        band.class(),
        escape_html(label)
    )
}

/// A horizontal bar filled to `percent` (clamped to 0..=100).
pub(crate) fn progress_bar(percent: f64, band: Band) -> String {
    let width = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!(
        r#"<div class="bar"><div class="bar-fill {}" style="width: {width:.0}%"></div></div>"#,
        band.class()
    )
}

pub(crate) fn card(class: &str, title: &str, body: &str) -> String {
    format!(
        r#"<section class="card {class}"><h3>{}</h3>{body}</section>"#,
        escape_html(title)
    )
}

/// `<ul>` of escaped items, or nothing for an empty list.
pub(crate) fn bullet_list(class: &str, items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let mut out = format!(r#"<ul class="{class}">"#);
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>");
    Some(out)
}

pub(crate) fn tags(items: &[String]) -> String {
    let mut out = String::from(r#"<div class="tags">"#);
    for item in items {
        let _ = write!(out, r#"<span class="tag">{}</span>"#, escape_html(item));
    }
    out.push_str("</div>");
    out
}
