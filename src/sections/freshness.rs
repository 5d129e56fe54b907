use crate::model::Freshness;
use crate::sections::{bands, card, escape_html, pill, progress_bar};

/// `refresh_action` is the form target for re-analysis; `None` hides the button.
pub fn render(freshness: Option<&Freshness>, refresh_action: Option<&str>) -> Option<String> {
    let freshness = freshness?;
    let score = freshness.freshness_score;
    let status = freshness.status.label();
    let status = if status.trim().is_empty() {
        "Unknown"
    } else {
        status
    };

    let mut body = format!(
        r#"<div class="score-head"><span class="score {}">{}</span><span class="score-max">/ 100</span>{}</div>"#,
        bands::freshness_score(score).class(),
        score.percent(),
        pill(status, bands::freshness_status(&freshness.status)),
    );
    body.push_str(&progress_bar(
        score.value(),
        bands::freshness_score(score),
    ));
    body.push_str(&format!(
        r#"<p class="days-old">{} days old</p>"#,
        freshness.days_old
    ));

    if freshness.needs_update {
        body.push_str(
            r#"<p class="notice band-orange">This content may be out of date. Refreshing regenerates its analysis.</p>"#,
        );
    }

    if let Some(action) = refresh_action {
        body.push_str(&format!(
            r#"<form method="post" action="{}"><button type="submit" class="button">Refresh Content</button></form>"#,
            escape_html(action)
        ));
    }

    Some(card("freshness", "Content Freshness", &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FreshnessStatus, Metric};

    fn freshness(score: f64, status: &str, needs_update: bool) -> Freshness {
        Freshness {
            freshness_score: Metric::new(score),
            status: FreshnessStatus::from(status.to_owned()),
            days_old: Metric::new(3.0),
            needs_update,
        }
    }

    #[test]
    fn absent_freshness_renders_nothing() {
        assert_eq!(render(None, Some("/content/c1/refresh")), None);
    }

    #[test]
    fn status_and_score_bands() {
        let html = render(Some(&freshness(90.0, "Very Fresh", false)), None).unwrap();
        assert!(html.contains(r#"<span class="pill band-green">Very Fresh</span>"#));
        assert!(html.contains(r#"<span class="score band-green">90</span>"#));
        assert!(html.contains("3 days old"));
        assert!(!html.contains("out of date"));

        let html = render(Some(&freshness(59.0, "Aging", true)), None).unwrap();
        assert!(html.contains(r#"<span class="pill band-red">Aging</span>"#));
        assert!(html.contains(r#"<span class="score band-red">59</span>"#));
        assert!(html.contains("out of date"));
    }

    #[test]
    fn colour_matches_the_displayed_score() {
        let html = render(Some(&freshness(89.5, "Fresh", false)), None).unwrap();
        assert!(html.contains(r#"<span class="score band-green">90</span>"#));
    }

    #[test]
    fn refresh_button_only_with_action() {
        let entry = freshness(75.0, "Recent", false);
        assert!(!render(Some(&entry), None).unwrap().contains("<form"));
        let html = render(Some(&entry), Some("/content/c1/refresh")).unwrap();
        assert!(html.contains(r#"action="/content/c1/refresh""#));
    }

    #[test]
    fn unknown_status_is_gray() {
        let html = render(Some(&freshness(80.0, "Stale", false)), None).unwrap();
        assert!(html.contains(r#"<span class="pill band-gray">Stale</span>"#));
    }
}
